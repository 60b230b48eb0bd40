//! Browser-side services.
//!
//! # Services
//!
//! - [`files`] - File pickers and drops to [`notesynth::FileRef`]s
//! - [`timer`] - `setTimeout` timer for the simulated pipeline
//! - [`browser`] - Alerts, smooth scrolling, Blob downloads

pub mod browser;
pub mod files;
pub mod timer;

pub use browser::*;
pub use files::*;
pub use timer::*;
