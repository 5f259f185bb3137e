//! Anchor slug generation.
//!
//! Provides the slug used for FAQ question anchors: a lowercase,
//! dash-separated identifier safe to use as an HTML `id`.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG_RE: hardcoded regex is valid"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#x[0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);")
        .expect("ENTITY_RE: hardcoded regex is valid")
});

/// Convert arbitrary text into a dash-separated anchor slug.
///
/// Performs the following transformations:
/// 1. Removes HTML tags and character entities
/// 2. Converts to lowercase
/// 3. Turns whitespace, dots and slashes into hyphens
/// 4. Drops every other character that is not alphanumeric, `_` or `-`
/// 5. Collapses runs of hyphens and trims them from both ends
///
/// # Examples
///
/// ```
/// use readmeta_core::util::ids::slugify;
///
/// assert_eq!(slugify("How do I install it?"), "how-do-i-install-it");
/// assert_eq!(slugify("Does it work with v2.0"), "does-it-work-with-v2-0");
/// assert_eq!(slugify("  <em>Styled</em>  question "), "styled-question");
/// assert_eq!(slugify("Fish &amp; Chips"), "fish-chips");
/// ```
pub fn slugify(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, "");
    let plain = ENTITY_RE.replace_all(&without_tags, "");

    let mut slug = String::with_capacity(plain.len());
    for c in plain.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        } else if c.is_whitespace() || c == '.' || c == '/' {
            slug.push('-');
        }
    }

    slug.split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
