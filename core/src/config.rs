//! Session configuration.
//!
//! The defaults are the values the demo page ships with. The CLI may override
//! a few of them from the environment (see [`SynthConfig::from_env`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum number of study materials kept in the list.
pub const MAX_UPLOAD_FILES: usize = 50;

/// Maximum size of a single file, in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 50;

/// Bytes per megabyte used for size checks and messages.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Delay between two progress steps.
pub const STEP_DELAY_MS: u64 = 1500;

/// Delay between the end of the step table and the download surface.
pub const COMPLETION_DELAY_MS: u64 = 500;

/// Extensions accepted for the syllabus slot.
pub const ALLOWED_SYLLABUS_TYPES: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

/// Extensions accepted for the materials slot.
pub const ALLOWED_MATERIAL_TYPES: &[&str] = &[
    ".pdf", ".ppt", ".pptx", ".doc", ".docx", ".txt", ".jpg", ".png",
];

const ENV_MAX_MATERIALS: &str = "NOTESYNTH_MAX_MATERIALS";
const ENV_MAX_FILE_SIZE_MB: &str = "NOTESYNTH_MAX_FILE_SIZE_MB";
const ENV_STEP_DELAY_MS: &str = "NOTESYNTH_STEP_DELAY_MS";
const ENV_SETTLE_DELAY_MS: &str = "NOTESYNTH_SETTLE_DELAY_MS";

/// Effective configuration of a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthConfig {
    /// Cap on the materials list
    pub max_materials: usize,
    /// Per-file size ceiling in megabytes
    pub max_file_size_mb: u64,
    /// Allow-list for the syllabus slot
    pub syllabus_types: Vec<String>,
    /// Allow-list for the materials slot
    pub material_types: Vec<String>,
    /// Delay between progress steps, in milliseconds
    pub step_delay_ms: u64,
    /// Settle delay before completion, in milliseconds
    pub settle_delay_ms: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            max_materials: MAX_UPLOAD_FILES,
            max_file_size_mb: MAX_FILE_SIZE_MB,
            syllabus_types: ALLOWED_SYLLABUS_TYPES.iter().map(|s| s.to_string()).collect(),
            material_types: ALLOWED_MATERIAL_TYPES.iter().map(|s| s.to_string()).collect(),
            step_delay_ms: STEP_DELAY_MS,
            settle_delay_ms: COMPLETION_DELAY_MS,
        }
    }
}

impl SynthConfig {
    /// Defaults with overrides from `NOTESYNTH_*` environment variables.
    ///
    /// Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = parse_var(&lookup, ENV_MAX_MATERIALS) {
            config.max_materials = v as usize;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_FILE_SIZE_MB) {
            config.max_file_size_mb = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_STEP_DELAY_MS) {
            config.step_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_SETTLE_DELAY_MS) {
            config.settle_delay_ms = v;
        }

        config
    }

    /// Size ceiling in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * BYTES_PER_MB
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("⚠️  Ignoring {}={:?}: not a non-negative integer", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Collects warnings of the calling test thread.
    struct WarningCapture;

    impl log::Log for WarningCapture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: WarningCapture = WarningCapture;

    fn captured_warnings(f: impl FnOnce()) -> Vec<String> {
        // Only the first call installs the logger; later calls reuse it
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Warn);
        WARNINGS.with(|w| w.borrow_mut().clear());
        f();
        WARNINGS.with(|w| w.take())
    }

    #[test]
    fn test_defaults_match_page_constants() {
        let config = SynthConfig::default();
        assert_eq!(config.max_materials, 50);
        assert_eq!(config.max_file_size_bytes(), 50 * 1024 * 1024);
        assert_eq!(config.syllabus_types, vec![".pdf", ".doc", ".docx", ".txt"]);
        assert_eq!(config.material_types.len(), 8);
        assert_eq!(config.step_delay(), Duration::from_millis(1500));
        assert_eq!(config.settle_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_env_overrides() {
        let config = SynthConfig::from_lookup(|key| match key {
            "NOTESYNTH_STEP_DELAY_MS" => Some("10".into()),
            "NOTESYNTH_MAX_MATERIALS" => Some(" 3 ".into()),
            "NOTESYNTH_SETTLE_DELAY_MS" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config.step_delay_ms, 10);
        assert_eq!(config.max_materials, 3);
        // Unparsable value keeps the default
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.max_file_size_mb, 50);
    }

    #[test]
    fn test_bad_value_is_reported() {
        let warnings = captured_warnings(|| {
            let config = SynthConfig::from_lookup(|key| {
                (key == "NOTESYNTH_STEP_DELAY_MS").then(|| "soon".to_string())
            });
            assert_eq!(config.step_delay_ms, 1500);
        });

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("NOTESYNTH_STEP_DELAY_MS"));
        assert!(warnings[0].contains("\"soon\""));
    }

    #[test]
    fn test_valid_values_are_silent() {
        let warnings = captured_warnings(|| {
            SynthConfig::from_lookup(|key| (key == "NOTESYNTH_MAX_MATERIALS").then(|| "12".to_string()));
        });
        assert!(warnings.is_empty());
    }
}
