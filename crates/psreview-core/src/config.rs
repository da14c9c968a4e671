//! Configuration management for psreview
//!
//! Settings come from an optional TOML file layered under `PSREVIEW_*`
//! environment overrides, falling back to defaults. CLI flags override all
//! of these at the call site.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration
    pub dataset: DatasetConfig,

    /// Export configuration
    pub export: ExportConfig,

    /// TUI configuration
    pub tui: TuiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist; otherwise the default
    /// location (`<config dir>/psreview/config.toml`) is read when present.
    /// `PSREVIEW_*` environment variables override file values, e.g.
    /// `PSREVIEW_DATASET__PATH` for `dataset.path`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else if let Some(dirs) = ProjectDirs::from("", "", "psreview") {
            let default_path = dirs.config_dir().join("config.toml");
            builder = builder.add_source(config::File::from(default_path).required(false));
        }

        builder
            .add_source(config::Environment::with_prefix("PSREVIEW").separator("__"))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| Error::config(e.to_string()))
    }
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the CSV file that is both source data and review state
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("problem_statements.csv"),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output path for the shortlisted-records artifact
    pub output: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(crate::export::DEFAULT_EXPORT_FILE),
        }
    }
}

/// TUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event-loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` and `--verbose` are absent
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.dataset.path, PathBuf::from("problem_statements.csv"));
        assert_eq!(config.export.output, PathBuf::from("shortlisted_ideas.csv"));
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/psreview.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dataset]\npath = \"sih2025.csv\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("sih2025.csv"));
        assert_eq!(config.tui.tick_rate_ms, 250);
    }
}
