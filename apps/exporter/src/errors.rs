use thiserror::Error;

/// Export-pipeline error type.
///
/// Renderer-library failures are unexpected for a schema-valid Record; they
/// are surfaced as-is rather than retried, and there is no partial-output
/// mode — every export returns a complete artifact or an error.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error("docx rendering failed: {0}")]
    Docx(String),

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
