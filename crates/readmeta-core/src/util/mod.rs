//! Utility modules for slug generation and config path handling.
//!
//! # Modules
//!
//! - [`ids`]: Anchor slug generation
//! - [`resolver`]: Configuration file path resolution

pub mod ids;
pub mod resolver;
