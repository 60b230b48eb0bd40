//! Domain models for the note synthesizer session.
//!
//! - [`FileRef`] - A user-selected file (name and size, never its content)
//! - [`SlotKind`] - Which upload slot a file is offered to
//! - [`ViewState`] - Page-level state (idle, running, complete)
//! - [`GenerationRequest`] - Inputs captured when generation is triggered

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::BYTES_PER_MB;
use crate::error::{IntakeError, IntakeResult};
use crate::pipeline::PipelineState;

// =============================================================================
// File Reference
// =============================================================================

/// Reference to a user-selected file.
///
/// Only the attributes the page looks at are kept; content is never read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as selected (original case)
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size }
    }

    /// Build a reference from a file on disk.
    pub fn from_path(path: &Path) -> IntakeResult<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| IntakeError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, metadata.len()))
    }

    /// Lowercased extension including the leading dot.
    ///
    /// A name without a dot yields the whole lowercased name (`README` gives
    /// `.readme`), which no allow-list contains.
    pub fn extension(&self) -> String {
        let lower = self.name.to_lowercase();
        let last = lower.rsplit('.').next().unwrap_or_default();
        format!(".{}", last)
    }

    /// Size in megabytes.
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / BYTES_PER_MB as f64
    }
}

// =============================================================================
// Upload Slots
// =============================================================================

/// The two upload slots of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Single reference document, replaced on each selection
    Syllabus,
    /// Ordered, capped list of supplementary files
    Materials,
}

impl SlotKind {
    /// Whether a selection for this slot keeps only its first file.
    pub fn is_single_file(&self) -> bool {
        matches!(self, SlotKind::Syllabus)
    }
}

// =============================================================================
// View State
// =============================================================================

/// Page-level view state.
///
/// `Idle → Running → Complete`. There is no transition back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Trigger visible, waiting for input
    #[default]
    Idle,
    /// Progress surface visible
    Running(PipelineState),
    /// Download surface visible
    Complete,
}

impl ViewState {
    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ViewState::Running(_))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ViewState::Complete)
    }
}

// =============================================================================
// Generation Request
// =============================================================================

/// Inputs captured when generation is triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub syllabus: FileRef,
    pub subject_name: String,
    pub course_code: Option<String>,
    pub material_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(FileRef::new("Notes.PDF", 1).extension(), ".pdf");
        assert_eq!(FileRef::new("archive.tar.GZ", 1).extension(), ".gz");
    }

    #[test]
    fn test_extension_without_dot() {
        assert_eq!(FileRef::new("README", 1).extension(), ".readme");
        assert_eq!(FileRef::new("trailing.", 1).extension(), ".");
    }

    #[test]
    fn test_from_path_reads_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Week 1.pptx");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let file = FileRef::from_path(&path).unwrap();
        assert_eq!(file.name, "Week 1.pptx");
        assert_eq!(file.size, 2048);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileRef::from_path(&dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(IntakeError::Unreadable { .. })));
    }
}
