//! Error types for readmeta-core.
//!
//! Parsing a readme never fails; these errors only arise at the edges,
//! when configuration or input files are loaded.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for readmeta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readmeta-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be decoded
    #[error("Invalid configuration in {}: {source}", path.display())]
    ConfigParse {
        /// Configuration file being decoded
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// Any other configuration problem
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a configuration error from a message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
