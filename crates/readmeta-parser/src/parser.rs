//! The readme parser entry point.

use readmeta_content::{CommonMarkRenderer, MarkdownRenderer};
use readmeta_core::ParserConfig;

use crate::assemble::assemble;
use crate::blocks::split_sections;
use crate::cursor::LineCursor;
use crate::header::{extract_headers, extract_title};
use crate::model::ParsedReadme;
use crate::normalize::normalize_lines;
use crate::sanitize::apply_headers;
use crate::short_description::extract_short_description;

/// Parses readme files into [`ParsedReadme`] records.
///
/// A parser holds only configuration and a stateless renderer, so one
/// instance can be shared across threads and reused for any number of
/// documents.
///
/// # Example
///
/// ```rust
/// use readmeta_parser::{ReadmeParser, Section};
///
/// let parser = ReadmeParser::default();
/// let readme = parser.parse_str(
///     "=== My Theme ===\nTags: foo, bar\n\nShort desc.\n\n== Description ==\nHello",
/// );
///
/// assert_eq!(readme.name.as_deref(), Some("My Theme"));
/// assert_eq!(readme.tags, vec!["foo", "bar"]);
/// assert_eq!(readme.short_description, "Short desc.");
/// assert_eq!(readme.section(Section::Description), Some("<p>Hello</p>"));
/// ```
#[derive(Debug, Clone)]
pub struct ReadmeParser<R = CommonMarkRenderer> {
    config: ParserConfig,
    renderer: R,
}

impl ReadmeParser {
    /// Create a parser using the default CommonMark renderer.
    pub fn new(config: ParserConfig) -> Self {
        Self::with_renderer(config, CommonMarkRenderer::default())
    }
}

impl Default for ReadmeParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<R: MarkdownRenderer> ReadmeParser<R> {
    /// Create a parser with a custom Markdown renderer.
    pub fn with_renderer(config: ParserConfig, renderer: R) -> Self {
        Self { config, renderer }
    }

    /// The parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse raw readme bytes. Never fails; malformed input yields empty
    /// fields and warnings.
    pub fn parse(&self, bytes: &[u8]) -> ParsedReadme {
        let lines = normalize_lines(bytes);
        let mut cursor = LineCursor::new(&lines);
        let mut readme = ParsedReadme {
            name: extract_title(&mut cursor),
            ..ParsedReadme::default()
        };

        let headers = extract_headers(&mut cursor);
        apply_headers(&mut readme, &headers, &self.config);

        let short_description = extract_short_description(&mut cursor);
        let sections = split_sections(cursor.remaining().iter().map(String::as_str));

        assemble(
            &mut readme,
            &short_description,
            sections,
            &self.renderer,
            &self.config,
        );

        log::debug!(
            "Parsed readme {:?}: {} section(s), {} warning(s)",
            readme.name,
            readme.sections.len(),
            readme.warnings.len()
        );
        readme
    }

    /// Parse readme text.
    pub fn parse_str(&self, text: &str) -> ParsedReadme {
        self.parse(text.as_bytes())
    }
}
