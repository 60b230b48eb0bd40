//! Upload intake: type and size checks for both slots.
//!
//! A file is accepted when its lowercased extension is in the slot's
//! allow-list and its size does not exceed the ceiling. The extension check
//! runs first, so an oversized `.exe` is reported as a type error.

use serde::Serialize;

use crate::config::SynthConfig;
use crate::error::{IntakeError, IntakeResult};
use crate::models::{FileRef, SlotKind};

/// Allow-list of lowercased extensions (with leading dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    extensions: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Allow-list of a slot under the given configuration.
    pub fn for_slot(slot: SlotKind, config: &SynthConfig) -> Self {
        match slot {
            SlotKind::Syllabus => Self::new(&config.syllabus_types),
            SlotKind::Materials => Self::new(&config.material_types),
        }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e == extension)
    }

    /// Comma separated list, as shown in the rejection message.
    pub fn describe(&self) -> String {
        self.extensions.join(", ")
    }
}

/// Check a single file against an allow-list and the configured size ceiling.
pub fn validate_file(file: &FileRef, allowed: &AllowList, config: &SynthConfig) -> IntakeResult<()> {
    let extension = file.extension();
    if !allowed.contains(&extension) {
        return Err(IntakeError::UnsupportedType {
            extension,
            allowed: allowed.describe(),
        });
    }

    if file.size > config.max_file_size_bytes() {
        return Err(IntakeError::TooLarge {
            name: file.name.clone(),
            size_mb: file.size_mb(),
            max_mb: config.max_file_size_mb,
        });
    }

    Ok(())
}

/// Split a selection into accepted files and rejections, keeping order.
pub fn partition(
    files: Vec<FileRef>,
    allowed: &AllowList,
    config: &SynthConfig,
) -> (Vec<FileRef>, Vec<IntakeError>) {
    let mut accepted = Vec::with_capacity(files.len());
    let mut rejected = Vec::new();

    for file in files {
        match validate_file(&file, allowed, config) {
            Ok(()) => accepted.push(file),
            Err(e) => rejected.push(e),
        }
    }

    (accepted, rejected)
}

/// Outcome of offering a selection to a slot.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeReport {
    /// Names of the files that were stored
    pub accepted: Vec<String>,
    /// One message per refused file
    #[serde(serialize_with = "serialize_errors")]
    pub rejected: Vec<IntakeError>,
    /// Valid files dropped because the materials list was full
    pub overflow: usize,
}

impl IntakeReport {
    /// Everything offered was stored.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.overflow == 0
    }

    /// Notice for files dropped at the cap, if any.
    pub fn overflow_notice(&self, cap: usize) -> Option<String> {
        (self.overflow > 0).then(|| {
            format!(
                "{} file(s) skipped: the limit of {} study materials was reached.",
                self.overflow, cap
            )
        })
    }
}

fn serialize_errors<S: serde::Serializer>(errors: &[IntakeError], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(errors.iter().map(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BYTES_PER_MB;

    fn materials() -> AllowList {
        AllowList::for_slot(SlotKind::Materials, &SynthConfig::default())
    }

    #[test]
    fn test_accepts_allowed_extension_any_case() {
        let file = FileRef::new("Slides.PPTX", 10);
        assert!(validate_file(&file, &materials(), &SynthConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = FileRef::new("setup.exe", 10);
        let err = validate_file(&file, &materials(), &SynthConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File type \".exe\" is not supported. Allowed types: \
             .pdf, .ppt, .pptx, .doc, .docx, .txt, .jpg, .png"
        );
    }

    #[test]
    fn test_syllabus_list_is_narrower() {
        let syllabus = AllowList::for_slot(SlotKind::Syllabus, &SynthConfig::default());
        let image = FileRef::new("scan.jpg", 10);
        assert!(validate_file(&image, &syllabus, &SynthConfig::default()).is_err());
        assert!(validate_file(&image, &materials(), &SynthConfig::default()).is_ok());
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let exact = FileRef::new("big.pdf", 50 * BYTES_PER_MB);
        assert!(validate_file(&exact, &materials(), &SynthConfig::default()).is_ok());

        let over = FileRef::new("Bigger.pdf", 50 * BYTES_PER_MB + 1);
        let err = validate_file(&over, &materials(), &SynthConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File \"Bigger.pdf\" is too large (50.00MB). Maximum size is 50MB."
        );
    }

    #[test]
    fn test_ceiling_follows_config_in_bytes() {
        let config = SynthConfig { max_file_size_mb: 1, ..SynthConfig::default() };

        let at_limit = FileRef::new("notes.pdf", BYTES_PER_MB);
        assert!(validate_file(&at_limit, &materials(), &config).is_ok());

        let over = FileRef::new("notes.pdf", BYTES_PER_MB + 1);
        let err = validate_file(&over, &materials(), &config).unwrap_err();
        assert!(matches!(err, IntakeError::TooLarge { max_mb: 1, .. }));
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = FileRef::new("huge.zip", 80 * BYTES_PER_MB);
        let err = validate_file(&file, &materials(), &SynthConfig::default()).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType { .. }));
    }

    #[test]
    fn test_partition_keeps_order() {
        let files = vec![
            FileRef::new("a.pdf", 1),
            FileRef::new("b.mp3", 1),
            FileRef::new("c.txt", 1),
        ];
        let (accepted, rejected) = partition(files, &materials(), &SynthConfig::default());
        let names: Vec<_> = accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.txt"]);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn test_overflow_notice() {
        let report = IntakeReport { overflow: 2, ..Default::default() };
        assert!(!report.is_clean());
        assert_eq!(
            report.overflow_notice(50).as_deref(),
            Some("2 file(s) skipped: the limit of 50 study materials was reached.")
        );
        assert!(IntakeReport::default().overflow_notice(50).is_none());
        assert!(IntakeReport::default().is_clean());
    }
}
