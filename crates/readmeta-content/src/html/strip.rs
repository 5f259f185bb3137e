//! Tag stripping and escaping.
//!
//! # Example
//!
//! ```rust
//! use readmeta_content::html::strip::sanitize_text;
//!
//! assert_eq!(sanitize_text("  <b>Tom</b> & \"Jerry\" "), "Tom &amp; &quot;Jerry&quot;");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>")
        .expect("SCRIPT_RE: hardcoded regex is valid")
});

static STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("STYLE_RE: hardcoded regex is valid")
});

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?[a-zA-Z!?][^<>]*>").expect("MARKUP_RE: hardcoded regex is valid")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("ENTITY_RE: hardcoded regex is valid")
});

/// Remove all markup from `text`.
///
/// `<script>` and `<style>` elements are removed together with their
/// content; every other tag and comment is removed and its content kept.
/// The result is trimmed.
///
/// # Example
///
/// ```rust
/// use readmeta_content::html::strip::strip_tags;
///
/// assert_eq!(strip_tags("<p>Hi <em>there</em></p><script>x()</script>"), "Hi there");
/// ```
pub fn strip_tags(text: &str) -> String {
    let text = SCRIPT_RE.replace_all(text, "");
    let text = STYLE_RE.replace_all(&text, "");
    MARKUP_RE.replace_all(&text, "").trim().to_string()
}

/// Escape HTML special characters.
///
/// Encodes `&`, `<`, `>`, `"` and `'`. An `&` that already starts a valid
/// character entity is left alone, so escaping twice is harmless.
///
/// # Example
///
/// ```rust
/// use readmeta_content::html::strip::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("AT&amp;T"), "AT&amp;T");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for (index, c) in text.char_indices() {
        match c {
            '&' if ENTITY_RE.is_match(&text[index..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Strip markup, escape what remains, and trim.
///
/// This is the text-level sanitizer used for titles and upgrade notices.
pub fn sanitize_text(text: &str) -> String {
    escape_html(&strip_tags(text)).trim().to_string()
}
