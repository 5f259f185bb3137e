//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Parse theme and plugin readme.txt files into JSON metadata
#[derive(Parser, Debug, Clone)]
#[command(name = "readmeta", author, version, about, long_about = None)]
pub struct Args {
    /// Readme files to parse
    #[arg(required_unless_present = "print_config")]
    pub files: Vec<PathBuf>,

    /// Configuration file path (defaults to $READMETA_CONFIG, then the
    /// platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Current stable platform version, the ceiling for version headers
    #[arg(long, env = "READMETA_STABLE_VERSION")]
    pub stable_version: Option<String>,

    /// Tag to drop from the parsed tag list (repeatable)
    #[arg(long = "ignore-tag", value_name = "TAG")]
    pub ignore_tags: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_files_and_flags() {
        let args = Args::try_parse_from([
            "readmeta",
            "readme.txt",
            "other/readme.txt",
            "--stable-version",
            "6.4",
            "--ignore-tag",
            "featured",
            "--ignore-tag",
            "blog",
            "-p",
        ])
        .unwrap();

        assert_eq!(args.files.len(), 2);
        assert_eq!(args.stable_version.as_deref(), Some("6.4"));
        assert_eq!(args.ignore_tags, vec!["featured", "blog"]);
        assert!(args.pretty);
        assert!(!args.verbose);
    }

    #[test]
    fn test_files_required() {
        assert!(Args::try_parse_from(["readmeta"]).is_err());
    }

    #[test]
    fn test_print_config_without_files() {
        let args = Args::try_parse_from(["readmeta", "--print-config"]).unwrap();
        assert!(args.print_config);
        assert!(args.files.is_empty());
    }
}
