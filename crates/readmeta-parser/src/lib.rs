//! Theme and plugin readme parsing.
//!
//! Turns a human-authored `readme.txt` into a normalized [`ParsedReadme`]:
//! title, header fields, tags, contributors, a short description and
//! filtered HTML for each section. Parsing never fails. Malformed version
//! headers are cleared and reported as [`ReadmeWarning`]s.
//!
//! # Pipeline
//!
//! Every stage advances one shared [`cursor::LineCursor`]:
//!
//! 1. [`normalize`]: bytes to lines (BOM, UTF-16, lossy fallback)
//! 2. [`header`]: title and `Key: value` header block
//! 3. [`sanitize`]: version, tag, stable tag and license clean-up
//! 4. [`short_description`]: text up to the first section heading
//! 5. [`blocks`]: section splitting and FAQ / upgrade notice sub-lists
//! 6. [`assemble`]: merging, Markdown rendering, HTML filtering
//!
//! # Example
//!
//! ```rust
//! use readmeta_core::ParserConfig;
//! use readmeta_parser::{ReadmeParser, ReadmeWarning};
//!
//! let parser = ReadmeParser::new(ParserConfig::default().with_stable_version("6.4"));
//! let readme = parser.parse_str("=== Demo ===\nStable tag: tags/1.2.3\nTested up to: 7.0\n");
//!
//! assert_eq!(readme.stable_tag.as_deref(), Some("1.2.3"));
//! assert_eq!(readme.tested, None);
//! assert!(readme.has_warning(ReadmeWarning::TestedHeaderIgnored));
//! ```

pub mod assemble;
pub mod blocks;
pub mod cursor;
pub mod header;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod sanitize;
pub mod short_description;

mod proptests;

pub use model::{ItemList, ParsedReadme, ReadmeWarning, Section};
pub use parser::ReadmeParser;
