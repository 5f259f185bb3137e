//! Summary length trimming.

/// Marker appended to text cut by [`trim_length`].
pub const ELLIPSIS: &str = " &hellip;";

/// Trim `text` to at most `length` characters.
///
/// Text within the limit is only whitespace-trimmed. Longer text is cut at
/// `length` characters and [`ELLIPSIS`] is appended. If a sentence ends
/// within the last 20% of the limit, the text is cut back to that full stop
/// instead and no marker is added.
///
/// Lengths are counted in characters, not bytes.
///
/// # Example
///
/// ```rust
/// use readmeta_content::text::trim_length;
///
/// assert_eq!(trim_length("Short enough.", 150), "Short enough.");
/// assert_eq!(trim_length("abcdefghij", 4), "abcd &hellip;");
/// assert_eq!(trim_length("Four. Five six", 5), "Four.");
/// ```
pub fn trim_length(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.trim().to_string();
    }

    let mut trimmed: String = text.chars().take(length).collect();
    trimmed.push_str(ELLIPSIS);

    if !trimmed.ends_with('.') {
        if let Some(position) = trimmed.rfind('.') {
            let chars_before = trimmed[..position].chars().count();
            if chars_before as f64 > 0.8 * length as f64 {
                trimmed.truncate(position + 1);
            }
        }
    }

    trimmed.trim().to_string()
}
