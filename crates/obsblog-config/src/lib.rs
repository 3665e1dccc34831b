//! Configuration management for obsblog.
//!
//! Parses an `obs-blog.yaml` configuration file with serde. The file lives in
//! the working directory and holds two keys:
//!
//! ```yaml
//! input: ~/vault
//! output: ./site
//! ```
//!
//! `input` is the vault to convert, `output` the directory that receives the
//! mirrored HTML tree. Both paths support home-directory shorthand (`~`).
//! Unrecognized keys are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "obs-blog.yaml";

/// Raw configuration as parsed from YAML (paths as strings).
#[derive(Debug, Deserialize)]
struct ConfigRaw {
    input: String,
    output: String,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the vault to convert (read-only).
    pub input: PathBuf,
    /// Root of the output tree (created if absent).
    pub output: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error (also covers missing required keys).
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from `obs-blog.yaml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparsable, missing a
    /// required key, or contains an empty path.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file(Path::new(CONFIG_FILENAME))
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Config::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let raw: ConfigRaw = serde_yaml::from_str(&content)?;
        Self::resolve(&raw)
    }

    /// Validate raw values and expand home-directory shorthand.
    fn resolve(raw: &ConfigRaw) -> Result<Self, ConfigError> {
        require_non_empty(&raw.input, "input")?;
        require_non_empty(&raw.output, "output")?;

        Ok(Self {
            input: PathBuf::from(shellexpand::tilde(&raw.input).into_owned()),
            output: PathBuf::from(shellexpand::tilde(&raw.output).into_owned()),
        })
    }
}
