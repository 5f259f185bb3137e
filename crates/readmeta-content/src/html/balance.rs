//! Tag balancing.

use super::tokens::{tokenize, Tag, Token};

/// Repair the nesting of an HTML fragment.
///
/// - Unclosed elements are closed at the end of the fragment, innermost
///   first.
/// - A closing tag for an element that is open but not innermost first
///   closes the elements nested inside it.
/// - A closing tag with no matching open element is dropped.
/// - Void elements (`br`, `hr`, `img`, ...) are never pushed on the stack.
///
/// # Example
///
/// ```rust
/// use readmeta_content::html::balance::balance_tags;
///
/// assert_eq!(balance_tags("<ul><li>one</ul></b>"), "<ul><li>one</li></ul>");
/// ```
pub fn balance_tags(html: &str) -> String {
    let mut output = String::with_capacity(html.len() + 16);
    let mut open: Vec<String> = Vec::new();

    for token in tokenize(html) {
        match token {
            Token::Text(text) | Token::Comment(text) => output.push_str(text),
            Token::Tag(tag) => balance_tag(&tag, &mut open, &mut output),
        }
    }

    while let Some(name) = open.pop() {
        push_closer(&mut output, &name);
    }

    output
}

fn balance_tag(tag: &Tag<'_>, open: &mut Vec<String>, output: &mut String) {
    if !tag.closing {
        output.push_str(tag.raw);
        if !tag.self_closing && !tag.is_void() {
            open.push(tag.name.clone());
        }
        return;
    }

    if tag.is_void() {
        return;
    }

    let Some(position) = open.iter().rposition(|name| *name == tag.name) else {
        log::debug!("Dropping unmatched closing tag </{}>", tag.name);
        return;
    };

    while open.len() > position + 1 {
        if let Some(inner) = open.pop() {
            push_closer(output, &inner);
        }
    }
    open.pop();
    output.push_str(tag.raw);
}

fn push_closer(output: &mut String, name: &str) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}
