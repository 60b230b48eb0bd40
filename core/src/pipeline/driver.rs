//! Runs the state machine against a [`Timer`].

use futures::future::{select, Either};
use futures::pin_mut;
use tokio_util::sync::CancellationToken;

use super::machine::{PipelineState, PipelineTiming, Schedule};
use super::timer::Timer;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOutcome {
    /// Reached [`PipelineState::Complete`]
    Completed,
    /// Stopped by the token while in this state
    Cancelled(PipelineState),
}

/// Play every scheduled transition after `from`.
///
/// `on_enter` is called once per state entered (not for `from` itself).
/// Cancellation is checked before and during each delay.
pub async fn drive<T, F>(
    from: PipelineState,
    timing: PipelineTiming,
    timer: &T,
    cancel: &CancellationToken,
    mut on_enter: F,
) -> DriveOutcome
where
    T: Timer,
    F: FnMut(PipelineState),
{
    let mut state = from;

    while let Some(Schedule { next, delay }) = state.schedule(&timing) {
        if cancel.is_cancelled() {
            log::debug!("Pipeline cancelled at {:?}", state);
            return DriveOutcome::Cancelled(state);
        }

        let sleep = timer.sleep(delay);
        let cancelled = cancel.cancelled();
        pin_mut!(sleep, cancelled);

        if let Either::Right(_) = select(sleep, cancelled).await {
            log::debug!("Pipeline cancelled at {:?}", state);
            return DriveOutcome::Cancelled(state);
        }

        state = next;
        on_enter(state);
    }

    DriveOutcome::Completed
}
