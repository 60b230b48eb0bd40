//! Placeholder download.
//!
//! The "generated notes" are a fixed text template. Nothing from the uploaded
//! files ends up in it, only the subject, course code and material count.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{DownloadError, DownloadResult};

/// Subject used when the field is empty at download time.
pub const DEFAULT_SUBJECT: &str = "Master Notes";

/// Suffix of every downloaded file.
pub const FILE_SUFFIX: &str = "_Master_Notes.txt";

pub const MIME_TYPE: &str = "text/plain";

/// Shown after every download.
pub const DISCLOSURE: &str = "Demo: In a production environment, this would download a professionally formatted PDF compiled from your study materials.";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A ready-to-save text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl PlaceholderDocument {
    /// Build the document for a subject.
    ///
    /// An empty subject falls back to [`DEFAULT_SUBJECT`]; an empty course
    /// code is treated as absent.
    pub fn new(subject: &str, course_code: Option<&str>, material_count: usize, date: NaiveDate) -> Self {
        let subject = if subject.is_empty() { DEFAULT_SUBJECT } else { subject };
        let course_code = course_code.filter(|c| !c.is_empty());

        Self {
            file_name: file_name_for(subject),
            mime_type: MIME_TYPE,
            content: render_content(subject, course_code, material_count, date),
        }
    }

    /// Write into `dir` under [`file_name`](Self::file_name).
    pub fn save_to(&self, dir: &Path) -> DownloadResult<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content).map_err(|source| DownloadError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Subject with every whitespace run replaced by `_`, plus the suffix.
pub fn file_name_for(subject: &str) -> String {
    format!("{}{}", WHITESPACE_RUN.replace_all(subject, "_"), FILE_SUFFIX)
}

/// Date as shown in the document header (`M/D/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

fn render_content(subject: &str, course_code: Option<&str>, material_count: usize, date: NaiveDate) -> String {
    let header = match course_code {
        Some(code) => format!("{} ({})", subject, code),
        None => subject.to_string(),
    };

    format!(
        r#"
================================================================================
                              MASTER NOTES
================================================================================

Subject: {header}
Compiled from: {material_count} study material(s)
Generated: {date}

--------------------------------------------------------------------------------
                            TABLE OF CONTENTS
--------------------------------------------------------------------------------

This is a demo file. In a production environment, this would be a{sp}
professionally formatted PDF containing:

1. Title Page
   - Subject Name
   - Course Code
   - Compilation Info

2. Auto-generated Table of Contents

3. Syllabus-organized Sections
   - Comprehensive explanations
   - Key definitions and concepts
   - Mathematical formulas
   - Step-by-step derivations

4. Figures and Tables
   - Embedded diagrams
   - Properly captioned charts

5. Section Summaries
   - Key takeaways for each topic

6. Index
   - Consolidated reference

================================================================================
                    Thank you for using Master Note Synthesizer!
================================================================================
"#,
        header = header,
        material_count = material_count,
        date = format_date(date),
        sp = " ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_file_name_collapses_whitespace_runs() {
        assert_eq!(file_name_for("Linear Algebra"), "Linear_Algebra_Master_Notes.txt");
        assert_eq!(file_name_for("Intro \t to  CS"), "Intro_to_CS_Master_Notes.txt");
        assert_eq!(file_name_for(" Physics "), "_Physics__Master_Notes.txt");
    }

    #[test]
    fn test_content_with_course_code() {
        let doc = PlaceholderDocument::new("Linear Algebra", Some("MATH 221"), 3, date());
        assert_eq!(doc.file_name, "Linear_Algebra_Master_Notes.txt");
        assert_eq!(doc.mime_type, "text/plain");
        assert!(doc.content.contains("Subject: Linear Algebra (MATH 221)\n"));
        assert!(doc.content.contains("Compiled from: 3 study material(s)\n"));
        assert!(doc.content.contains("Generated: 3/7/2026\n"));
        assert!(doc.content.starts_with("\n====="));
    }

    #[test]
    fn test_content_without_course_code() {
        let doc = PlaceholderDocument::new("Biology", Some(""), 1, date());
        assert!(doc.content.contains("Subject: Biology\n"));
        assert!(!doc.content.contains("Biology ("));
    }

    #[test]
    fn test_template_keeps_trailing_space() {
        let doc = PlaceholderDocument::new("Linear Algebra", None, 1, date());
        assert!(doc
            .content
            .contains("In a production environment, this would be a \nprofessionally formatted PDF"));
        assert_eq!(doc.content.lines().nth(13), Some("This is a demo file. In a production environment, this would be a "));
    }

    #[test]
    fn test_empty_subject_falls_back() {
        let doc = PlaceholderDocument::new("", None, 2, date());
        assert_eq!(doc.file_name, "Master_Notes_Master_Notes.txt");
        assert!(doc.content.contains("Subject: Master Notes\n"));
    }

    #[test]
    fn test_save_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let doc = PlaceholderDocument::new("Chemistry", None, 4, date());
        let path = doc.save_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Chemistry_Master_Notes.txt");
        assert_eq!(std::fs::read_to_string(path).unwrap(), doc.content);
    }
}
