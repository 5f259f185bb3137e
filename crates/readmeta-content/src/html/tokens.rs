//! Minimal HTML tokenizer shared by the balancer and the filter.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([a-zA-Z][a-zA-Z0-9]*)([^<>]*?)(/?)>")
        .expect("TOKEN_RE: hardcoded regex is valid")
});

/// Elements that never take a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A lexical piece of an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data between tags, verbatim.
    Text(&'a str),
    /// An HTML comment, including its delimiters.
    Comment(&'a str),
    /// An opening, closing or self-closing tag.
    Tag(Tag<'a>),
}

/// A single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// The tag exactly as written.
    pub raw: &'a str,
    /// Lower-cased element name.
    pub name: String,
    /// `</name>` form.
    pub closing: bool,
    /// Raw attribute text between the name and the closing bracket.
    pub attrs: &'a str,
    /// `<name/>` form.
    pub self_closing: bool,
}

impl Tag<'_> {
    /// Whether the element can never have content.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

/// Split an HTML fragment into text, comment and tag tokens.
///
/// Anything that does not look like a tag (a lone `<`, a processing
/// instruction) is left inside the surrounding text token.
pub fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(html) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last {
            tokens.push(Token::Text(&html[last..whole.start()]));
        }
        last = whole.end();

        let Some(name) = caps.get(2) else {
            tokens.push(Token::Comment(whole.as_str()));
            continue;
        };

        tokens.push(Token::Tag(Tag {
            raw: whole.as_str(),
            name: name.as_str().to_ascii_lowercase(),
            closing: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
            attrs: caps.get(3).map_or("", |m| m.as_str()),
            self_closing: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
        }));
    }

    if last < html.len() {
        tokens.push(Token::Text(&html[last..]));
    }

    tokens
}
