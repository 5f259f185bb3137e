//! Input normalization: raw bytes to logical lines.
//!
//! Decoding never fails. A UTF-8 byte-order mark is dropped, UTF-16 input
//! (either byte order, detected by its mark) is re-decoded, and invalid
//! UTF-8 is decoded lossily. Lossy input is split on ASCII line breaks
//! only; valid text is split on every Unicode line-break sequence.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

static UNICODE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\r\n|[\n\x0B\x0C\r\u{85}\u{2028}\u{2029}]")
        .expect("UNICODE_BREAK_RE: hardcoded regex is valid")
});

static ASCII_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\r\n|[\n\x0B\x0C\r]").expect("ASCII_BREAK_RE: hardcoded regex is valid")
});

/// Decode `bytes` and split them into lines without line terminators.
///
/// Always returns at least one (possibly empty) line.
///
/// # Example
///
/// ```rust
/// use readmeta_parser::normalize::normalize_lines;
///
/// let lines = normalize_lines(b"\xEF\xBB\xBF=== Title ===\r\nTags: a\n");
/// assert_eq!(lines, vec!["=== Title ===", "Tags: a", ""]);
/// ```
pub fn normalize_lines(bytes: &[u8]) -> Vec<String> {
    let (text, unicode) = decode(bytes);
    split_lines(&text, unicode)
}

/// Split decoded text into lines.
///
/// With `unicode` set, `\u{85}`, `\u{2028}` and `\u{2029}` also break
/// lines. `\r\n` always counts as one break.
pub fn split_lines(text: &str, unicode: bool) -> Vec<String> {
    let breaks = if unicode {
        &*UNICODE_BREAK_RE
    } else {
        &*ASCII_BREAK_RE
    };

    breaks.split(text).map(str::to_string).collect()
}

/// Decode raw bytes, reporting whether the text was valid Unicode.
fn decode(bytes: &[u8]) -> (Cow<'_, str>, bool) {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        log::debug!("Re-decoding UTF-16LE input");
        return (Cow::Owned(decode_utf16(rest, u16::from_le_bytes)), true);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        log::debug!("Re-decoding UTF-16BE input");
        return (Cow::Owned(decode_utf16(rest, u16::from_be_bytes)), true);
    }

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), true),
        Err(e) => {
            log::debug!("Input is not valid UTF-8 ({e}), decoding lossily");
            (String::from_utf8_lossy(bytes), false)
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
