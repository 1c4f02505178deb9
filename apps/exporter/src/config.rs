use std::path::PathBuf;

use anyhow::Result;

/// Driver configuration loaded from environment variables. Both knobs have
/// defaults, and CLI flags override them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory export artifacts are written into.
    pub output_dir: PathBuf,
    /// Default log filter when RUST_LOG is not set.
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_has_defaults() {
        // The variables are unlikely to be set in the test environment, and
        // defaults must hold either way.
        let config = Config::from_env().unwrap();
        assert!(!config.rust_log.is_empty());
        assert!(!config.output_dir.as_os_str().is_empty());
    }
}
