//! Simulated generation pipeline.
//!
//! No content is analysed. The pipeline is a timed walk through a fixed
//! step table, modelled as an explicit state machine:
//!
//! - [`steps`] - The step table (id, status text, percentage)
//! - [`machine`] - [`PipelineState`] and its `schedule(next, delay)` primitive
//! - [`timer`] - Pluggable timers (virtual and tokio)
//! - [`driver`] - Async runner with cancellation

pub mod driver;
pub mod machine;
pub mod steps;
pub mod timer;

pub use driver::{drive, DriveOutcome};
pub use machine::{PipelineState, PipelineTiming, Schedule};
pub use steps::{PipelineStep, STEPS, STEP_TITLES};
pub use timer::{ManualTimer, Timer};

#[cfg(feature = "cli")]
pub use timer::TokioTimer;

pub use tokio_util::sync::CancellationToken;
