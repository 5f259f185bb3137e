//! Configuration file path resolution.
//!
//! `ConfigResolver` locates a project's configuration file using an
//! environment variable override and the platform config directory.
//!
//! # Example
//!
//! ```no_run
//! use readmeta_core::util::resolver::ConfigResolver;
//!
//! // Checks READMETA_CONFIG, then <config dir>/readmeta/config.toml
//! let resolver = ConfigResolver::new("readmeta");
//! if let Some(path) = resolver.config_file() {
//!     println!("Config: {}", path.display());
//! }
//! ```

use std::env;
use std::path::PathBuf;

/// Resolver for a project's configuration file.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Project name (e.g., "readmeta")
    project_name: String,
    /// Environment variable prefix (e.g., "READMETA")
    env_prefix: String,
}

/// File name inside the project config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

impl ConfigResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "readmeta" → "READMETA"
    /// - "theme-check" → "THEME_CHECK"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
        }
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use readmeta_core::util::resolver::ConfigResolver;
    ///
    /// let resolver = ConfigResolver::new("theme-check");
    /// assert_eq!(resolver.env_var("CONFIG"), "THEME_CHECK_CONFIG");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Path of the file in the platform config directory, whether or not it
    /// exists.
    pub fn default_config_file(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(&self.project_name).join(CONFIG_FILE_NAME))
    }

    /// Resolve the configuration file.
    ///
    /// Checks in order:
    /// 1. `{PROJECT}_CONFIG` environment variable
    /// 2. `<platform config dir>/{project}/config.toml`
    pub fn config_file(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var(self.env_var("CONFIG")) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.default_config_file()
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}
