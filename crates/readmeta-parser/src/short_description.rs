//! Short description extraction and finalization.

use readmeta_content::{sanitize_text, strip_tags, trim_length, MarkdownRenderer};

use crate::cursor::LineCursor;

/// Whether a trimmed line is a level-2-or-above heading (`==` or `##`).
fn ends_short_description(trimmed: &str) -> bool {
    trimmed.starts_with("==") || trimmed.starts_with("##")
}

/// Collect the text between the header block and the first section
/// heading. The heading line is left on the cursor.
pub fn extract_short_description(cursor: &mut LineCursor<'_>) -> String {
    let mut text = String::new();

    while let Some(line) = cursor.next_line() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            text.push('\n');
            continue;
        }
        if ends_short_description(trimmed) {
            cursor.push_back();
            break;
        }
        text.push_str(line);
        text.push('\n');
    }

    text.trim().to_string()
}

/// Produce the final plain-text summary.
///
/// Falls back to the first non-blank line of the rendered description when
/// `raw` is empty. The text is then stripped and escaped, rendered, stripped
/// again and trimmed to `length` characters.
pub fn finalize_short_description<R>(
    raw: &str,
    rendered_description: Option<&str>,
    renderer: &R,
    length: usize,
) -> String
where
    R: MarkdownRenderer + ?Sized,
{
    let source = if raw.is_empty() {
        rendered_description
            .and_then(|html| html.lines().find(|line| !line.trim().is_empty()))
            .unwrap_or_default()
    } else {
        raw
    };

    let rendered = renderer.render(&sanitize_text(source));
    trim_length(&strip_tags(&rendered), length)
}
