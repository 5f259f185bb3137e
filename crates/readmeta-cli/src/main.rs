//! readmeta
//!
//! Parses readme.txt files and prints their metadata as JSON.

use anyhow::{Context, Result};
use clap::Parser;

use readmeta_cli::{commands, init_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::debug!(files = args.files.len(), "Starting readmeta");

    let output = commands::run(&args).context("readmeta failed")?;
    println!("{output}");
    Ok(())
}
