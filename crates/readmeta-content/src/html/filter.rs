//! Allow-list HTML filtering.
//!
//! Tags not on the list are removed (their text content stays), attributes
//! not on the list are removed, comments are removed, and stray `<`/`>`
//! characters in text are escaped.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::tokens::{tokenize, Tag, Token};

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("ATTR_RE: hardcoded regex is valid")
});

static CHAR_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[xX]([0-9a-fA-F]+)|#([0-9]+)|([a-zA-Z][a-zA-Z0-9]*));?")
        .expect("CHAR_REF_RE: hardcoded regex is valid")
});

/// Protocols allowed in URL attributes.
const ALLOWED_PROTOCOLS: &[&str] = &["http", "https", "mailto", "ftp"];

/// Attributes whose value is a URL.
const URL_ATTRIBUTES: &[&str] = &["href", "cite", "src"];

/// Permitted elements and, for each, its permitted attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    tags: BTreeMap<String, Vec<String>>,
}

impl AllowList {
    /// An allow-list that permits nothing.
    pub fn empty() -> Self {
        Self {
            tags: BTreeMap::new(),
        }
    }

    /// Permit `tag` with the given attributes.
    pub fn allow(mut self, tag: &str, attributes: &[&str]) -> Self {
        self.tags.insert(
            tag.to_ascii_lowercase(),
            attributes.iter().map(|a| a.to_ascii_lowercase()).collect(),
        );
        self
    }

    /// Whether `tag` is permitted.
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Whether `attribute` is permitted on `tag`.
    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.tags
            .get(tag)
            .is_some_and(|attrs| attrs.iter().any(|a| a == attribute))
    }
}

impl Default for AllowList {
    /// The readme section allow-list: links, quotes, paragraphs, code,
    /// emphasis, lists, definition lists and `h3`/`h4` sub-headings.
    fn default() -> Self {
        Self::empty()
            .allow("a", &["href", "title", "rel"])
            .allow("blockquote", &["cite"])
            .allow("br", &[])
            .allow("p", &[])
            .allow("code", &[])
            .allow("pre", &[])
            .allow("em", &[])
            .allow("strong", &[])
            .allow("ul", &[])
            .allow("ol", &[])
            .allow("dl", &[])
            .allow("dt", &[])
            .allow("dd", &[])
            .allow("li", &[])
            .allow("h3", &[])
            .allow("h4", &[])
    }
}

/// Filter `html` against `allowed`.
///
/// # Example
///
/// ```rust
/// use readmeta_content::html::filter::{filter_html, AllowList};
///
/// let html = "<p onclick=\"x()\"><a href='https://example.com' target=\"_blank\">ok</a><img src=x></p>";
/// assert_eq!(
///     filter_html(html, &AllowList::default()),
///     "<p><a href=\"https://example.com\">ok</a></p>"
/// );
/// ```
pub fn filter_html(html: &str, allowed: &AllowList) -> String {
    let mut output = String::with_capacity(html.len());

    for token in tokenize(html) {
        match token {
            Token::Text(text) => push_text(&mut output, text),
            Token::Comment(_) => {}
            Token::Tag(tag) if allowed.allows_tag(&tag.name) => {
                push_tag(&mut output, &tag, allowed);
            }
            Token::Tag(tag) => {
                log::trace!("Removing disallowed tag <{}>", tag.name);
            }
        }
    }

    output
}

fn push_text(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn push_tag(output: &mut String, tag: &Tag<'_>, allowed: &AllowList) {
    if tag.closing {
        output.push_str("</");
        output.push_str(&tag.name);
        output.push('>');
        return;
    }

    output.push('<');
    output.push_str(&tag.name);

    for caps in ATTR_RE.captures_iter(tag.attrs) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        if !allowed.allows_attribute(&tag.name, &name) {
            continue;
        }

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());

        if URL_ATTRIBUTES.contains(&name.as_str()) && !has_allowed_protocol(value) {
            log::debug!("Removing {name} with disallowed protocol on <{}>", tag.name);
            continue;
        }

        output.push(' ');
        output.push_str(&name);
        output.push_str("=\"");
        output.push_str(&value.replace('"', "&quot;").replace('<', "&lt;"));
        output.push('"');
    }

    if tag.self_closing || tag.is_void() {
        output.push_str(" /");
    }
    output.push('>');
}

/// Decode the character references a browser would resolve in an attribute
/// value. Named references outside the URL-significant set are left as is.
fn decode_char_refs(value: &str) -> String {
    CHAR_REF_RE
        .replace_all(value, |caps: &regex::Captures<'_>| {
            let numeric = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => Some(u32::from_str_radix(hex.as_str(), 16).ok()),
                (None, Some(dec)) => Some(dec.as_str().parse::<u32>().ok()),
                (None, None) => None,
            };
            if let Some(code) = numeric {
                // NUL, surrogates and out-of-range values become U+FFFD.
                return code
                    .filter(|&code| code != 0)
                    .and_then(char::from_u32)
                    .unwrap_or(char::REPLACEMENT_CHARACTER)
                    .to_string();
            }

            let name = caps.get(3).map_or("", |m| m.as_str());
            named_char_ref(name).map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_char_ref(name: &str) -> Option<char> {
    let c = match name {
        "colon" => ':',
        "Tab" => '\t',
        "NewLine" => '\n',
        "sol" => '/',
        "quest" => '?',
        "num" => '#',
        "period" => '.',
        "amp" | "AMP" => '&',
        "lpar" => '(',
        "rpar" => ')',
        _ => return None,
    };
    Some(c)
}

/// Whether a URL is relative or uses an allowed protocol.
///
/// Character references are decoded and whitespace and control characters
/// removed first, as a browser does before resolving the scheme.
fn has_allowed_protocol(url: &str) -> bool {
    let cleaned: String = decode_char_refs(url)
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let scheme_end = cleaned.find(':');
    let path_start = cleaned.find(['/', '?', '#']);

    match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => ALLOWED_PROTOCOLS.contains(&&cleaned[..colon]),
    }
}
