//! Title and header block extraction.
//!
//! A readme opens with its title, optionally underlined, followed by a block
//! of `Key: value` lines:
//!
//! ```text
//! === My Theme ===
//! Contributors: alice, bob
//! Tags: blog, two-columns
//! Requires at least: 5.8
//! ```
//!
//! Header keys are matched case-insensitively against a fixed table;
//! synonyms map to the same [`HeaderField`] and unknown keys are dropped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use readmeta_content::sanitize_text;
use regex::Regex;

use crate::cursor::LineCursor;

/// Title used by unedited readme templates.
const PLACEHOLDER_TITLE: &str = "plugin name";

/// Longest line accepted as the real title after a placeholder.
const MAX_FALLBACK_TITLE_CHARS: usize = 50;

/// Recognized header keys and the field each maps to.
const RECOGNIZED_HEADERS: &[(&str, HeaderField)] = &[
    ("tested", HeaderField::Tested),
    ("tested up to", HeaderField::Tested),
    ("requires", HeaderField::Requires),
    ("requires at least", HeaderField::Requires),
    ("requires php", HeaderField::RequiresPhp),
    ("tags", HeaderField::Tags),
    ("contributors", HeaderField::Contributors),
    ("donate link", HeaderField::DonateLink),
    ("stable tag", HeaderField::StableTag),
    ("license", HeaderField::License),
    ("license uri", HeaderField::LicenseUri),
    ("resources", HeaderField::Resources),
];

static HEADER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keys = RECOGNIZED_HEADERS
        .iter()
        .map(|(key, _)| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^({keys})\s*:")).expect("HEADER_LINE_RE: built from literal keys")
});

/// A canonical header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderField {
    /// `Tested` / `Tested up to`
    Tested,
    /// `Requires` / `Requires at least`
    Requires,
    /// `Requires PHP`
    RequiresPhp,
    /// `Tags`
    Tags,
    /// `Contributors`
    Contributors,
    /// `Donate link`
    DonateLink,
    /// `Stable tag`
    StableTag,
    /// `License`
    License,
    /// `License URI`
    LicenseUri,
    /// `Resources`
    Resources,
}

impl HeaderField {
    /// Look up a lower-cased, trimmed header key.
    pub fn from_key(key: &str) -> Option<HeaderField> {
        RECOGNIZED_HEADERS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, field)| *field)
    }
}

/// Raw header values keyed by field. Later duplicates win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    values: BTreeMap<HeaderField, String>,
}

impl Headers {
    /// Value of `field`, if present and not empty.
    pub fn get(&self, field: HeaderField) -> Option<&str> {
        self.values
            .get(&field)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Set `field`.
    pub fn insert(&mut self, field: HeaderField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Number of recognized headers read.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no recognized header was read.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether `line` starts with a recognized `Key:` header.
pub fn looks_like_header(line: &str) -> bool {
    HEADER_LINE_RE.is_match(line)
}

/// Clean a title line: drop surrounding heading markup, then strip tags
/// and escape.
pub fn sanitize_title(line: &str) -> String {
    let trimmed = line.trim_matches(['#', '=', ' ', '\t', '\0', '\x0B']);
    sanitize_text(trimmed)
}

/// Read the document title from the front of the cursor.
///
/// Returns `None` when the document is blank or only a placeholder title
/// could be found. In the placeholder case the line that was tried as the
/// real title is left for the header block.
pub fn extract_title(cursor: &mut LineCursor<'_>) -> Option<String> {
    let line = cursor.next_non_blank()?;
    let mut name = sanitize_title(line);

    // "Title\n=====" underline style.
    if cursor
        .peek()
        .is_some_and(|next| next.chars().all(|c| c == '=' || c == '-'))
    {
        cursor.next_line();
    }

    if name.to_lowercase() == PLACEHOLDER_TITLE {
        let candidate = cursor.next_non_blank()?;
        if candidate.chars().count() > MAX_FALLBACK_TITLE_CHARS || looks_like_header(candidate) {
            log::debug!("Placeholder title without a usable replacement");
            cursor.push_back();
            return None;
        }
        name = sanitize_title(candidate);
    }

    log::debug!("Readme title: {name:?}");
    (!name.is_empty()).then_some(name)
}

/// Read the `Key: value` block following the title.
///
/// Blank lines inside the block are skipped. The first non-blank line
/// without a colon ends the block and is left on the cursor.
pub fn extract_headers(cursor: &mut LineCursor<'_>) -> Headers {
    let mut headers = Headers::default();
    let mut next = cursor.next_non_blank();

    while let Some(line) = next {
        match line.trim().split_once(':') {
            Some((key, value)) => {
                let key = key
                    .trim_matches([' ', '\t', '*', '-', '\r', '\n'])
                    .to_lowercase();
                match HeaderField::from_key(&key) {
                    Some(field) => headers.insert(field, value.trim()),
                    None => log::trace!("Ignoring unrecognized header {key:?}"),
                }
            }
            None if line.trim().is_empty() => {}
            None => {
                cursor.push_back();
                break;
            }
        }
        next = cursor.next_line();
    }

    log::debug!("Read {} recognized header(s)", headers.len());
    headers
}
