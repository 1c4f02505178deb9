//! Export surface — formats, content types, filenames, and the entry points
//! that turn a Record into a downloadable artifact on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compose::compose;
use crate::errors::ExportError;
use crate::models::Record;
use crate::render::{render_docx, render_pdf};

/// Filename stem used when the record has no name to derive one from.
const FALLBACK_STEM: &str = "resume";

/// The four export formats, in the order the driver produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Markdown,
    PlainText,
    Pdf,
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Markdown,
        ExportFormat::PlainText,
        ExportFormat::Pdf,
        ExportFormat::Docx,
    ];

    /// Declared content type. Markdown and plain text share bytes and differ
    /// only here.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::PlainText => "text/plain",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::PlainText => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    /// `{sanitized name}_CV.{ext}`.
    pub fn filename(&self, name: &str) -> String {
        format!("{}_CV.{}", sanitize_name(name), self.extension())
    }
}

/// A finished export: the bytes plus the metadata a download needs.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Produces the artifact for one format from a Record snapshot.
pub fn export(record: &Record, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Markdown | ExportFormat::PlainText => compose(record).into_bytes(),
        ExportFormat::Pdf => render_pdf(record)?,
        ExportFormat::Docx => render_docx(record)?,
    };
    Ok(ExportArtifact {
        filename: format.filename(&record.personal_info.name),
        content_type: format.content_type(),
        bytes,
    })
}

/// Loads a Record from a JSON document on disk. Missing fields take their
/// documented defaults, so a sparse document is a valid record.
pub fn load_record(path: &Path) -> Result<Record, ExportError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes an artifact into `dir` under its own filename, returning the full
/// path of the written file.
pub fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)?;
    Ok(path)
}

/// Conservative filename sanitizer: spaces become underscores, and any
/// character outside `[A-Za-z0-9._-]` is flattened to an underscore too, so
/// path separators and exotic codepoints can never leak into a filename. An
/// empty result falls back to a fixed stem.
fn sanitize_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        sanitized
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalInfo;

    fn named_record(name: &str) -> Record {
        Record {
            personal_info: PersonalInfo {
                name: name.to_string(),
                ..PersonalInfo::default()
            },
            ..Record::default()
        }
    }

    #[test]
    fn test_filename_replaces_spaces() {
        assert_eq!(ExportFormat::Markdown.filename("John Doe"), "John_Doe_CV.md");
        assert_eq!(ExportFormat::Pdf.filename("John Doe"), "John_Doe_CV.pdf");
    }

    #[test]
    fn test_filename_flattens_path_separators_and_non_ascii() {
        assert_eq!(
            ExportFormat::Docx.filename("../etc/passwd"),
            ".._etc_passwd_CV.docx"
        );
        assert_eq!(ExportFormat::PlainText.filename("Zoë Müller"), "Zo__M_ller_CV.txt");
    }

    #[test]
    fn test_filename_empty_name_falls_back() {
        assert_eq!(ExportFormat::Markdown.filename(""), "resume_CV.md");
    }

    #[test]
    fn test_content_types() {
        assert_eq!(ExportFormat::Markdown.content_type(), "text/markdown");
        assert_eq!(ExportFormat::PlainText.content_type(), "text/plain");
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(
            ExportFormat::Docx.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_markdown_and_plain_text_share_bytes() {
        let record = named_record("Shared Bytes");
        let md = export(&record, ExportFormat::Markdown).unwrap();
        let txt = export(&record, ExportFormat::PlainText).unwrap();
        assert_eq!(md.bytes, txt.bytes);
        assert_ne!(md.content_type, txt.content_type);
        assert_eq!(md.filename, "Shared_Bytes_CV.md");
        assert_eq!(txt.filename, "Shared_Bytes_CV.txt");
    }

    #[test]
    fn test_export_all_formats_for_empty_record() {
        let record = Record::default();
        for format in ExportFormat::ALL {
            let artifact = export(&record, format).unwrap();
            match format {
                // The composer's empty-record contract is the empty string.
                ExportFormat::Markdown | ExportFormat::PlainText => {
                    assert!(artifact.bytes.is_empty())
                }
                // The binary renderers still emit a minimal valid document.
                ExportFormat::Pdf | ExportFormat::Docx => assert!(!artifact.bytes.is_empty()),
            }
        }
    }

    #[test]
    fn test_export_markdown_matches_compose_contract() {
        let artifact = export(&named_record("John Doe"), ExportFormat::Markdown).unwrap();
        assert_eq!(artifact.bytes, b"# John Doe\n\n");
    }

    #[test]
    fn test_load_record_sparse_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        std::fs::write(&path, r#"{"personal_info": {"name": "Ada"}}"#).unwrap();
        let record = load_record(&path).unwrap();
        assert_eq!(record.personal_info.name, "Ada");
        assert!(record.education.is_empty());
    }

    #[test]
    fn test_load_record_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_record(&path),
            Err(ExportError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_write_artifact_places_file_under_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = export(&named_record("On Disk"), ExportFormat::Markdown).unwrap();
        let path = write_artifact(&artifact, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "On_Disk_CV.md");
        assert_eq!(std::fs::read(path).unwrap(), b"# On Disk\n\n".to_vec());
    }
}
