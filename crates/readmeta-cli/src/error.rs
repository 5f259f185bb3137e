//! Error types for readmeta-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for readmeta-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readmeta-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from readmeta-core (configuration loading)
    #[error("Core error: {0}")]
    Core(#[from] readmeta_core::Error),

    /// A readme file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Output could not be encoded as JSON
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be encoded as TOML
    #[error("TOML encoding error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl Error {
    /// Create a read error for `path`.
    pub fn read(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
