//! Configuration file
//!
//! ```json
//! {
//!   "data_dir": "./formsmith-data",
//!   "schema_file": "form_schema.json",
//!   "submissions_file": "form_submissions.json",
//!   "log_level": "info"
//! }
//! ```
//!
//! Only `data_dir` is required.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::observability::Severity;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "./formsmith.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write config '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Config '{0}' already exists")]
    AlreadyExists(PathBuf),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the schema and submission files (required)
    pub data_dir: String,

    /// Schema file name inside `data_dir`
    #[serde(default = "default_schema_file")]
    pub schema_file: String,

    /// Submissions file name inside `data_dir`
    #[serde(default = "default_submissions_file")]
    pub submissions_file: String,

    /// Lowest logged severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_file() -> String {
    "form_schema.json".to_string()
}

fn default_submissions_file() -> String {
    "form_submissions.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Creates a configuration with defaults for everything but `data_dir`
    pub fn new(data_dir: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            schema_file: default_schema_file(),
            submissions_file: default_submissions_file(),
            log_level: default_log_level(),
        }
    }

    /// Load and validate configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration to `path`, refusing to overwrite.
    pub fn write_new(&self, path: &Path) -> ConfigResult<()> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate field values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".into()));
        }

        for (key, name) in [
            ("schema_file", &self.schema_file),
            ("submissions_file", &self.submissions_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a file name, not a path: '{}'",
                    key, name
                )));
            }
        }

        if self.schema_file == self.submissions_file {
            return Err(ConfigError::Invalid(
                "schema_file and submissions_file must differ".into(),
            ));
        }

        self.severity()?;
        Ok(())
    }

    /// Data directory as a path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Configured minimum log severity
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }
}
