//! Product metadata consumed by metadata-backed guidelines.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata file name, expected at the root of the checked directory.
pub const METADATA_FILE: &str = ".release-metadata.toml";

/// Product metadata describing the repository under check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductMetadata {
    /// Human-readable product name.
    #[serde(default)]
    pub product_name: Option<String>,

    /// Locator of the product's leading repository, the entrypoint for all
    /// stakeholders.
    #[serde(default)]
    pub leading_repository: Option<String>,
}

impl ProductMetadata {
    /// Loads metadata from [`METADATA_FILE`] in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is absent, unreadable, or invalid TOML.
    pub fn from_dir(dir: &Path) -> Result<Self, MetadataError> {
        let path = dir.join(METADATA_FILE);
        if !path.is_file() {
            return Err(MetadataError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path).map_err(|source| MetadataError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses metadata from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, MetadataError> {
        toml::from_str(content).map_err(|e| MetadataError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the leading repository locator, trimmed, or `None` when the
    /// field is absent or blank.
    #[must_use]
    pub fn leading_repository(&self) -> Option<&str> {
        self.leading_repository
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Metadata errors.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// No metadata file in the checked directory.
    #[error("metadata file {path} not found")]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// IO error reading the metadata file.
    #[error("failed to read metadata file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the metadata file.
    #[error("failed to parse metadata: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
