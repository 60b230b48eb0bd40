//! UI Components for the demo page.
//!
//! # Layout Components
//! - [`Header`] - Navbar with smooth-scrolling links
//! - [`Hero`] - Main title and call to action
//! - [`HowItWorks`], [`Features`] - Marketing sections
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SyllabusUpload`], [`MaterialsUpload`] - Pickers with drag & drop
//! - [`MaterialsList`] - Selected materials with remove buttons
//! - [`CourseDetails`], [`GenerateButton`] - Subject fields and trigger
//! - [`ProgressSection`] - Simulated progress bar and step indicators
//! - [`DownloadSection`] - Placeholder download

mod header;
mod hero;
mod features;
mod upload;
mod materials;
mod generate;
mod progress;
mod download;
mod footer;

pub use header::*;
pub use hero::*;
pub use features::*;
pub use upload::*;
pub use materials::*;
pub use generate::*;
pub use progress::*;
pub use download::*;
pub use footer::*;

/// CSS `display` value for a section toggled on and off.
pub(crate) fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
