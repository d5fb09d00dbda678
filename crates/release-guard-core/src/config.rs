//! Tool configuration loaded from `release-guard.toml`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the checked directory.
pub const CONFIG_FILE: &str = "release-guard.toml";

/// Top-level configuration for release-guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-guideline settings keyed by rule id (e.g. `"RG 1.01"`).
    #[serde(default)]
    pub guidelines: HashMap<String, GuidelineConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks whether a guideline is enabled (default: enabled).
    #[must_use]
    pub fn is_enabled(&self, code: &str) -> bool {
        self.guidelines
            .get(code)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Returns the configured optionality override for a guideline, if any.
    #[must_use]
    pub fn optional_override(&self, code: &str) -> Option<bool> {
        self.guidelines.get(code).and_then(|c| c.optional)
    }
}

/// Per-guideline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidelineConfig {
    /// Whether this guideline runs at all.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Overrides whether a failure of this guideline is tolerable.
    #[serde(default)]
    pub optional: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
