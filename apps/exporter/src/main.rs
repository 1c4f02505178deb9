mod compose;
mod config;
mod errors;
mod export;
mod layout;
mod models;
mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::{export, load_record, write_artifact, ExportFormat};
use crate::models::validate::advisories;

/// Batch export driver: loads a résumé record from JSON and writes the
/// requested artifacts to disk. The interactive form UI that edits records
/// lives outside this crate; this binary is the non-interactive surface.
#[derive(Parser)]
#[clap(
    name = "exporter",
    version,
    about = "Render a structured résumé record to Markdown, plain-text, PDF, and DOCX files"
)]
struct Cli {
    /// Path to the record JSON file
    record: PathBuf,

    /// Output directory (overrides OUTPUT_DIR)
    #[clap(long)]
    out_dir: Option<PathBuf>,

    /// Formats to write; repeat for several. Defaults to all four.
    #[clap(long = "format", value_enum)]
    formats: Vec<FormatArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Md,
    Txt,
    Pdf,
    Docx,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Md => ExportFormat::Markdown,
            FormatArg::Txt => ExportFormat::PlainText,
            FormatArg::Pdf => ExportFormat::Pdf,
            FormatArg::Docx => ExportFormat::Docx,
        }
    }
}

fn main() -> Result<()> {
    // Load configuration first so the log filter default is available.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV exporter v{}", env!("CARGO_PKG_VERSION"));

    run(Cli::parse(), config)
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let record = load_record(&cli.record)
        .with_context(|| format!("failed to load record from {}", cli.record.display()))?;

    // Advisory only: malformed contact values are logged and still rendered.
    for finding in advisories(&record) {
        warn!("{finding}");
    }

    let out_dir = cli.out_dir.unwrap_or(config.output_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let formats: Vec<ExportFormat> = if cli.formats.is_empty() {
        ExportFormat::ALL.to_vec()
    } else {
        cli.formats.iter().copied().map(ExportFormat::from).collect()
    };

    for format in formats {
        let artifact = export(&record, format)?;
        let path = write_artifact(&artifact, &out_dir)
            .with_context(|| format!("failed to write {}", artifact.filename))?;
        info!(
            path = %path.display(),
            content_type = artifact.content_type,
            bytes = artifact.bytes.len(),
            "wrote artifact"
        );
    }

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn write_record(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("record.json");
        fs::write(
            &path,
            r#"{
                "personal_info": {"name": "Jane Doe", "email": "jane@example.com"},
                "skills": {"technical": ["Rust"]}
            }"#,
        )
        .unwrap();
        path
    }

    fn test_config(out_dir: &std::path::Path) -> Config {
        Config {
            output_dir: out_dir.to_path_buf(),
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_run_writes_all_four_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let record_path = write_record(dir.path());
        let cli = Cli {
            record: record_path,
            out_dir: None,
            formats: Vec::new(),
        };
        run(cli, test_config(dir.path())).unwrap();

        for name in [
            "Jane_Doe_CV.md",
            "Jane_Doe_CV.txt",
            "Jane_Doe_CV.pdf",
            "Jane_Doe_CV.docx",
        ] {
            assert!(dir.path().join(name).exists(), "missing artifact {name}");
        }
    }

    #[test]
    fn test_run_single_format_selection() {
        let dir = tempfile::tempdir().unwrap();
        let record_path = write_record(dir.path());
        let cli = Cli {
            record: record_path,
            out_dir: None,
            formats: vec![FormatArg::Pdf],
        };
        run(cli, test_config(dir.path())).unwrap();

        assert!(dir.path().join("Jane_Doe_CV.pdf").exists());
        assert!(!dir.path().join("Jane_Doe_CV.md").exists());
    }

    #[test]
    fn test_run_out_dir_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let override_dir = dir.path().join("elsewhere");
        let record_path = write_record(dir.path());
        let cli = Cli {
            record: record_path,
            out_dir: Some(override_dir.clone()),
            formats: vec![FormatArg::Md],
        };
        run(cli, test_config(dir.path())).unwrap();

        assert!(override_dir.join("Jane_Doe_CV.md").exists());
    }

    #[test]
    fn test_run_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let record_path = dir.path().join("broken.json");
        fs::write(&record_path, "{not json").unwrap();
        let cli = Cli {
            record: record_path,
            out_dir: None,
            formats: Vec::new(),
        };
        assert!(run(cli, test_config(dir.path())).is_err());
    }

    #[test]
    fn test_run_missing_record_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            record: dir.path().join("nope.json"),
            out_dir: None,
            formats: Vec::new(),
        };
        assert!(run(cli, test_config(dir.path())).is_err());
    }
}
