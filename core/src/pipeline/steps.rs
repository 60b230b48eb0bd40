//! The fixed step table played by the simulated pipeline.

use serde::Serialize;

/// One labeled stage of the simulated pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    /// DOM id of the matching step indicator
    pub id: &'static str,
    /// Status text shown under the progress bar
    pub status: &'static str,
    /// Progress bar width in percent
    pub progress: u8,
}

pub static STEPS: [PipelineStep; 4] = [
    PipelineStep {
        id: "step-1",
        status: "Analyzing syllabus structure...",
        progress: 25,
    },
    PipelineStep {
        id: "step-2",
        status: "Extracting content from study materials...",
        progress: 50,
    },
    PipelineStep {
        id: "step-3",
        status: "Cross-referencing and merging information...",
        progress: 75,
    },
    PipelineStep {
        id: "step-4",
        status: "Generating PDF document...",
        progress: 100,
    },
];

/// Indicator captions for the four steps.
pub const STEP_TITLES: [&str; 4] = ["Analyze", "Extract", "Cross-reference", "Generate"];
