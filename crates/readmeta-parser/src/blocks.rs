//! Heading-delimited block splitting.
//!
//! The body of a readme and its FAQ / upgrade notice sections share one
//! shape: content accumulates until a heading line, which closes the current
//! block and opens the next. [`BlockSplitter`] implements that once and is
//! configured with a heading predicate and a key function.
//!
//! - [`split_sections`]: top-level `== Section ==` / `## Section` split
//! - [`parse_sub_list`]: `= Item =` / `**Item**` split inside a section

use std::collections::BTreeMap;

use readmeta_content::escape_html;

use crate::model::{ItemList, Section};

/// A run of lines under one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Key derived from the heading line; `None` for content before the
    /// first heading.
    pub key: Option<String>,
    /// Heading line as written, trimmed.
    pub heading: Option<String>,
    /// Accumulated lines, each followed by `\n`. Blank lines contribute a
    /// bare `\n`.
    pub body: String,
}

impl Block {
    fn leading() -> Self {
        Self {
            key: None,
            heading: None,
            body: String::new(),
        }
    }
}

/// Splits lines into [`Block`]s at heading lines.
pub struct BlockSplitter<H, K> {
    is_heading: H,
    key_of: K,
}

impl<H, K> BlockSplitter<H, K>
where
    H: Fn(&str) -> bool,
    K: Fn(&str) -> String,
{
    /// Build a splitter. Both functions receive the trimmed line.
    pub fn new(is_heading: H, key_of: K) -> Self {
        Self { is_heading, key_of }
    }

    /// Split `lines`.
    ///
    /// The untitled leading block is only returned when it holds something;
    /// titled blocks are always returned, even with an empty body.
    pub fn split<'a, I>(&self, lines: I) -> Vec<Block>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut blocks = Vec::new();
        let mut current = Block::leading();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                current.body.push('\n');
                continue;
            }

            if (self.is_heading)(trimmed) {
                if current.key.is_some() || !current.body.is_empty() {
                    blocks.push(current);
                }
                current = Block {
                    key: Some((self.key_of)(trimmed)),
                    heading: Some(trimmed.to_string()),
                    body: String::new(),
                };
                continue;
            }

            current.body.push_str(line);
            current.body.push('\n');
        }

        if current.key.is_some() || !current.body.is_empty() {
            blocks.push(current);
        }
        blocks
    }
}

// ----------------------------------------------------------------------------
// Top-level sections
// ----------------------------------------------------------------------------

/// Whether a trimmed line opens a top-level section.
///
/// `==` always does; `##` only when followed by something other than a
/// third `#`, so `###` sub-headings stay inside their section.
pub fn is_section_heading(trimmed: &str) -> bool {
    if trimmed.starts_with("==") {
        return true;
    }
    let mut chars = trimmed.chars();
    chars.next() == Some('#') && chars.next() == Some('#') && chars.next().is_some_and(|c| c != '#')
}

/// Normalized key for a section heading: markup trimmed, spaces to
/// underscores, lower-cased.
pub fn section_key(trimmed: &str) -> String {
    section_title(trimmed).replace(' ', "_").to_lowercase()
}

fn section_title(trimmed: &str) -> &str {
    trimmed.trim_matches(['#', '=', ' ', '\t'])
}

/// Split body lines into raw section text.
///
/// Unrecognized headings land in [`Section::OtherNotes`] with their title
/// kept as an `<h3>`. A recurring section is appended to. Empty sections
/// are left out.
pub fn split_sections<'a, I>(lines: I) -> BTreeMap<Section, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let splitter = BlockSplitter::new(is_section_heading, section_key);
    let mut sections: BTreeMap<Section, String> = BTreeMap::new();

    for block in splitter.split(lines) {
        let (Some(key), Some(heading)) = (block.key, block.heading) else {
            log::debug!("Dropping content before the first section heading");
            continue;
        };

        let body = block.body.trim();
        let (section, content) = match Section::from_key(&key) {
            Some(section) => (section, body.to_string()),
            None => {
                log::debug!("Folding unknown section {key:?} into other notes");
                let title = escape_html(section_title(&heading));
                (Section::OtherNotes, format!("<h3>{title}</h3>\n\n{body}"))
            }
        };

        let entry = sections.entry(section).or_default();
        if !entry.is_empty() && !content.is_empty() {
            entry.push_str("\n\n");
        }
        entry.push_str(content.trim());
    }

    sections.retain(|_, text| !text.is_empty());
    log::debug!(
        "Found sections: {:?}",
        sections.keys().map(|s| s.key()).collect::<Vec<_>>()
    );
    sections
}

// ----------------------------------------------------------------------------
// Sub-lists
// ----------------------------------------------------------------------------

/// How items are titled inside a FAQ or upgrade notice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Lines starting with `#` or `=`.
    Heading,
    /// Whole-line bold: `**Question**`.
    Bold,
}

impl HeadingStyle {
    /// `Heading` if any line starts with `#` or `=`, else `Bold`.
    pub fn detect<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let headed = lines
            .into_iter()
            .map(str::trim)
            .any(|line| line.starts_with(['#', '=']));
        if headed {
            HeadingStyle::Heading
        } else {
            HeadingStyle::Bold
        }
    }

    /// Whether a trimmed line is an item title in this style.
    pub fn is_title(self, trimmed: &str) -> bool {
        match self {
            HeadingStyle::Heading => trimmed.starts_with(['#', '=']),
            HeadingStyle::Bold => trimmed.starts_with("**") && trimmed.ends_with("**"),
        }
    }
}

/// Item title: the line with its marker character, spaces and tabs trimmed.
fn item_title(trimmed: &str) -> String {
    match trimmed.chars().next() {
        Some(marker) => trimmed.trim_matches([marker, ' ', '\t']).to_string(),
        None => String::new(),
    }
}

/// Parse a FAQ or upgrade notice section into titled items.
///
/// Non-blank content before the first title is kept under the empty title.
/// An item with an empty body is skipped unless it is the last one.
/// Repeated titles overwrite.
///
/// # Example
///
/// ```rust
/// use readmeta_parser::blocks::parse_sub_list;
///
/// let items = parse_sub_list("= 1.1 =\nSecurity fix.\n\n= 1.0 =\nFirst release.");
/// assert_eq!(items.get("1.1"), Some("Security fix."));
/// assert_eq!(items.titles().collect::<Vec<_>>(), vec!["1.1", "1.0"]);
/// ```
pub fn parse_sub_list(text: &str) -> ItemList {
    let style = HeadingStyle::detect(text.split('\n'));
    log::debug!("Sub-list heading style: {style:?}");

    let splitter = BlockSplitter::new(|line: &str| style.is_title(line), item_title);
    let blocks = splitter.split(text.split('\n'));
    let last = blocks.len().saturating_sub(1);

    let mut items = ItemList::new();
    for (index, block) in blocks.into_iter().enumerate() {
        let keep = match &block.key {
            None => !block.body.trim().is_empty(),
            Some(title) => !block.body.is_empty() || (index == last && !title.is_empty()),
        };
        if keep {
            let title = block.key.unwrap_or_default();
            items.insert(title, block.body.trim());
        }
    }
    items
}
