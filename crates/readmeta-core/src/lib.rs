//! Readmeta Core: shared types, configuration, errors, and utilities.
//!
//! This crate provides the foundational types used across all readmeta
//! crates. It has no internal readmeta dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Parser configuration and its TOML loading
//! - [`util`]: Slug generation and config path resolution

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::ParserConfig;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::slugify;
pub use util::resolver::ConfigResolver;
