//! Command implementations: configuration resolution, parsing, output.

use std::path::{Path, PathBuf};

use readmeta_core::ParserConfig;
use readmeta_parser::{ParsedReadme, ReadmeParser};
use serde::Serialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// One parsed file in multi-file output.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// The file as given on the command line.
    pub path: PathBuf,
    /// The parsed record.
    pub readme: ParsedReadme,
}

/// Load the configuration and apply command-line overrides.
pub fn resolve_config(args: &Args) -> Result<ParserConfig> {
    let mut config = ParserConfig::load_or_default(args.config.as_deref())?;

    if let Some(version) = &args.stable_version {
        config.stable_version = Some(version.clone());
    }
    if !args.ignore_tags.is_empty() {
        config.ignore_tags = args.ignore_tags.clone();
    }

    log::debug!("Resolved configuration: {config:?}");
    Ok(config)
}

/// Read and parse one readme file.
pub fn parse_file(parser: &ReadmeParser, path: &Path) -> Result<ParsedReadme> {
    let bytes = std::fs::read(path).map_err(|e| Error::read(e, path))?;
    log::debug!("Parsing {} ({} bytes)", path.display(), bytes.len());

    let readme = parser.parse(&bytes);
    for warning in &readme.warnings {
        log::info!("{}: {warning}", path.display());
    }
    Ok(readme)
}

/// Encode `value` as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Run the command and return what should be printed.
///
/// A single file prints its record. Several files print an array of
/// [`FileReport`]s in argument order.
pub fn run(args: &Args) -> Result<String> {
    let parser = ReadmeParser::new(resolve_config(args)?);

    if args.print_config {
        return Ok(toml::to_string_pretty(parser.config())?);
    }

    match args.files.as_slice() {
        [path] => to_json(&parse_file(&parser, path)?, args.pretty),
        paths => {
            let reports = paths
                .iter()
                .map(|path| {
                    parse_file(&parser, path).map(|readme| FileReport {
                        path: path.clone(),
                        readme,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            to_json(&reports, args.pretty)
        }
    }
}
