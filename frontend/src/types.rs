//! Common types used across the page.
//!
//! # Categories
//!
//! - **Error Types** - Page-level error handling
//! - **Scroll Types** - Where a scrolled-to section lands

use std::fmt;

use notesynth::{DownloadError, GenerateError, IntakeError};

// =============================================================================
// Error Types
// =============================================================================

/// Page errors.
///
/// User-facing variants carry the exact message to show in an alert.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A selected file was refused.
    Intake(String),
    /// Generation could not start.
    Generate(String),
    /// The placeholder could not be produced or saved.
    Download(String),
    /// A browser API call failed.
    Browser(String),
}

impl AppError {
    /// Text for a blocking alert.
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Intake(msg)
            | AppError::Generate(msg)
            | AppError::Download(msg)
            | AppError::Browser(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Intake(msg) => write!(f, "Upload error: {}", msg),
            AppError::Generate(msg) => write!(f, "Generation error: {}", msg),
            AppError::Download(msg) => write!(f, "Download error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<IntakeError> for AppError {
    fn from(e: IntakeError) -> Self {
        AppError::Intake(e.to_string())
    }
}

impl From<GenerateError> for AppError {
    fn from(e: GenerateError) -> Self {
        AppError::Generate(e.to_string())
    }
}

impl From<DownloadError> for AppError {
    fn from(e: DownloadError) -> Self {
        AppError::Download(e.to_string())
    }
}

/// Result type alias for page operations.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Scroll Types
// =============================================================================

/// Vertical alignment of a section scrolled into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Navigation links
    Start,
    /// Download section after completion
    Center,
}
