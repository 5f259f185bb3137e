//! # readmeta-cli
//!
//! Command-line front end for the readme parser.
//!
//! This crate owns everything the parser itself leaves to its host:
//! - Reading readme files from disk
//! - Resolving configuration (file, environment, flags)
//! - Logging setup
//! - JSON output

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::Args;
pub use error::{Error, Result};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with
/// `verbose`. Records from the `log` facade are forwarded to the subscriber.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
