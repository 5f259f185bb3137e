//! Parser configuration.
//!
//! The host tool decides which tags are ignored and what the current stable
//! platform version is; both are explicit inputs here rather than globals.
//!
//! # Example
//!
//! ```rust
//! use readmeta_core::ParserConfig;
//!
//! let config = ParserConfig::from_toml_str(
//!     "ignore_tags = [\"featured\"]\nstable_version = \"6.4\"",
//! )
//! .unwrap();
//! assert_eq!(config.ignore_tags, vec!["featured"]);
//! assert_eq!(config.stable_version.as_deref(), Some("6.4"));
//! assert_eq!(config.short_description_length, 150);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::resolver::ConfigResolver;

/// Configuration for a readme parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Tags dropped from the parsed tag list.
    #[serde(default)]
    pub ignore_tags: Vec<String>,

    /// Current stable platform version, used as the upper bound for the
    /// `Requires at least` and `Tested up to` headers.
    #[serde(default)]
    pub stable_version: Option<String>,

    /// Target length of the short description, in characters.
    #[serde(default = "default_short_description_length")]
    pub short_description_length: usize,
}

fn default_short_description_length() -> usize {
    150
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            ignore_tags: Vec::new(),
            stable_version: None,
            short_description_length: default_short_description_length(),
        }
    }
}

impl ParserConfig {
    /// Decode a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded parser configuration from {}", path.display());
        Ok(config)
    }

    /// Load the configuration for the given explicit path, or fall back to
    /// the resolved default location.
    ///
    /// An explicit path must exist. A missing default file yields
    /// [`ParserConfig::default`].
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match ConfigResolver::new("readmeta").config_file() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Builder-style setter for the stable version ceiling.
    pub fn with_stable_version(mut self, version: impl Into<String>) -> Self {
        self.stable_version = Some(version.into());
        self
    }

    /// Builder-style setter for the ignored tags.
    pub fn with_ignore_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a tag is on the ignore list.
    pub fn is_ignored_tag(&self, tag: &str) -> bool {
        self.ignore_tags.iter().any(|t| t == tag)
    }
}
