//! Error types for the note synthesizer session.
//!
//! Every user-facing failure is synchronous and non-fatal: the action is
//! refused and the session is left exactly as it was.
//!
//! - [`IntakeError`] - File type, size and readability checks
//! - [`ListError`] - Materials list removal
//! - [`GenerateError`] - Generation trigger preconditions
//! - [`PipelineError`] - Progress state machine transitions
//! - [`DownloadError`] - Placeholder document delivery
//! - [`SessionError`] - Top-level wrapper for all of the above
//!
//! The `Display` text of user-facing variants is the exact message shown to
//! the user, so front ends can surface `err.to_string()` directly.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::PipelineState;

// =============================================================================
// Intake Errors
// =============================================================================

/// A file was refused at intake.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Extension not in the allow-list of the target slot.
    #[error("File type \"{extension}\" is not supported. Allowed types: {allowed}")]
    UnsupportedType { extension: String, allowed: String },

    /// File larger than the configured ceiling.
    #[error("File \"{name}\" is too large ({size_mb:.2}MB). Maximum size is {max_mb}MB.")]
    TooLarge { name: String, size_mb: f64, max_mb: u64 },

    /// Path could not be inspected (CLI only).
    #[error("Failed to read file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Materials List Errors
// =============================================================================

/// Errors when removing an entry from the materials list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// The handle was rendered before the last mutation of the list.
    #[error("Stale entry handle for index {index} (rendered at revision {rendered}, list is at {current})")]
    StaleHandle { index: usize, rendered: u64, current: u64 },

    /// No entry at this position.
    #[error("No material at index {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
}

// =============================================================================
// Generation Trigger Errors
// =============================================================================

/// Unmet preconditions of the generation trigger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Please upload your syllabus first.")]
    MissingSyllabus,

    #[error("Please upload at least one study material.")]
    NoMaterials,

    #[error("Please enter the subject name.")]
    BlankSubject,

    /// There is no way back to idle once a run has started.
    #[error("Generation has already been started.")]
    AlreadyStarted,
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Invalid transitions of the progress state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The progress never moves backwards.
    #[error("Cannot move pipeline from {from:?} back to {to:?}")]
    Rewind { from: PipelineState, to: PipelineState },

    /// A transition arrived while the view is not running.
    #[error("Pipeline is not running")]
    NotRunning,
}

// =============================================================================
// Download Errors
// =============================================================================

/// Errors when producing the placeholder download.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The simulated generation has not completed yet.
    #[error("Your notes are not ready yet.")]
    NotReady,

    /// Writing the document to disk failed (CLI only).
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Session Errors (top-level)
// =============================================================================

/// Top-level session error.
///
/// Wraps the lower-level errors so that `?` works across module boundaries.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Download(#[from] DownloadError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Result type for materials list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Result type for the generation trigger.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Result type for pipeline transitions.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for downloads.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
