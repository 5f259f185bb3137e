//! Byte-level input handling.

use readmeta_parser::{ReadmeParser, Section};

use crate::common::{parse, utf16le, THEME_README};

#[test]
fn test_utf8_bom_is_ignored() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"=== BOM Theme ===\nTags: a\n");
    let readme = ReadmeParser::default().parse(&bytes);

    assert_eq!(readme.name.as_deref(), Some("BOM Theme"));
    assert_eq!(readme.tags, vec!["a"]);
}

#[test]
fn test_utf16_document_matches_utf8() {
    let parser = ReadmeParser::default();
    let from_utf16 = parser.parse(&utf16le(THEME_README));
    let from_utf8 = parse(THEME_README);

    assert_eq!(from_utf16, from_utf8);
}

#[test]
fn test_crlf_document_matches_lf() {
    let crlf = THEME_README.replace('\n', "\r\n");
    assert_eq!(parse(&crlf), parse(THEME_README));
}

#[test]
fn test_invalid_utf8_still_parses() {
    let readme = ReadmeParser::default()
        .parse(b"=== Caf\xE9 ===\nTags: a\n\n== Description ==\nBody \xFF text\n");

    assert_eq!(readme.name.as_deref(), Some("Caf\u{FFFD}"));
    assert_eq!(readme.tags, vec!["a"]);
    assert!(readme.section(Section::Description).unwrap().contains("text"));
}

#[test]
fn test_empty_and_blank_documents() {
    for input in ["", "\n\n", "   \n\t\n"] {
        let readme = parse(input);
        assert_eq!(readme.name, None);
        assert!(readme.sections.is_empty());
        assert!(readme.warnings.is_empty());
    }
}
