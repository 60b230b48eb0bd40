//! Progress state machine.
//!
//! ```text
//! Step(0) ─1500ms─▶ Step(1) ─1500ms─▶ Step(2) ─1500ms─▶ Step(3)
//!                                                          │
//!                                  Complete ◀─500ms─ Settling ◀─1500ms─┘
//! ```
//!
//! States are ordered, and the machine only ever moves forward.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::steps::{PipelineStep, STEPS};
use crate::config::SynthConfig;

/// Position of a run in the step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PipelineState {
    /// Index into [`STEPS`]
    Step(usize),
    /// Step table exhausted, waiting for the settle delay
    Settling,
    /// Terminal
    Complete,
}

/// Delays between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTiming {
    pub step_delay: Duration,
    pub settle_delay: Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self::from(&SynthConfig::default())
    }
}

impl From<&SynthConfig> for PipelineTiming {
    fn from(config: &SynthConfig) -> Self {
        Self {
            step_delay: config.step_delay(),
            settle_delay: config.settle_delay(),
        }
    }
}

impl PipelineTiming {
    /// Virtual time from the first step to completion.
    pub fn total(&self) -> Duration {
        self.step_delay * STEPS.len() as u32 + self.settle_delay
    }
}

/// Next transition of a run: enter `next` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub next: PipelineState,
    pub delay: Duration,
}

impl PipelineState {
    pub const FIRST: PipelineState = PipelineState::Step(0);

    /// The transition that follows this state, if any.
    pub fn schedule(&self, timing: &PipelineTiming) -> Option<Schedule> {
        let (next, delay) = match *self {
            PipelineState::Step(i) if i + 1 < STEPS.len() => {
                (PipelineState::Step(i + 1), timing.step_delay)
            }
            // The step timer fires once more and finds nothing left to show
            PipelineState::Step(_) => (PipelineState::Settling, timing.step_delay),
            PipelineState::Settling => (PipelineState::Complete, timing.settle_delay),
            PipelineState::Complete => return None,
        };
        Some(Schedule { next, delay })
    }

    /// The visible step, while one is being shown.
    pub fn step(&self) -> Option<&'static PipelineStep> {
        match *self {
            PipelineState::Step(i) => STEPS.get(i),
            _ => None,
        }
    }

    /// Progress bar width in percent.
    pub fn progress(&self) -> u8 {
        self.step().map(|s| s.progress).unwrap_or(100)
    }

    /// Status text. The last step's text stays up while settling.
    pub fn status(&self) -> &'static str {
        self.step().unwrap_or(&STEPS[STEPS.len() - 1]).status
    }

    /// Number of step indicators marked active.
    pub fn active_steps(&self) -> usize {
        match *self {
            PipelineState::Step(i) => (i + 1).min(STEPS.len()),
            _ => STEPS.len(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PipelineState::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_walks_the_table() {
        let timing = PipelineTiming::default();
        let mut state = PipelineState::FIRST;
        let mut seen = vec![(state, Duration::ZERO)];

        while let Some(Schedule { next, delay }) = state.schedule(&timing) {
            assert!(next > state);
            seen.push((next, delay));
            state = next;
        }

        let ms = |n| Duration::from_millis(n);
        assert_eq!(
            seen,
            vec![
                (PipelineState::Step(0), ms(0)),
                (PipelineState::Step(1), ms(1500)),
                (PipelineState::Step(2), ms(1500)),
                (PipelineState::Step(3), ms(1500)),
                (PipelineState::Settling, ms(1500)),
                (PipelineState::Complete, ms(500)),
            ]
        );
    }

    #[test]
    fn test_progress_and_status() {
        let percents: Vec<u8> = (0..4).map(|i| PipelineState::Step(i).progress()).collect();
        assert_eq!(percents, vec![25, 50, 75, 100]);

        assert_eq!(PipelineState::Step(1).status(), "Extracting content from study materials...");
        assert_eq!(PipelineState::Settling.status(), "Generating PDF document...");
        assert_eq!(PipelineState::Settling.progress(), 100);
    }

    #[test]
    fn test_indicators_accumulate() {
        assert_eq!(PipelineState::Step(0).active_steps(), 1);
        assert_eq!(PipelineState::Step(2).active_steps(), 3);
        assert_eq!(PipelineState::Complete.active_steps(), 4);
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(PipelineTiming::default().total(), Duration::from_millis(6500));
    }
}
