//! Title and header field behavior on whole documents.

use readmeta_parser::ReadmeWarning;

use crate::common::{parse, parse_with_ceiling, THEME_README};

#[test]
fn test_minimal_round_trip() {
    let readme =
        parse("=== My Theme ===\nTags: foo, bar\n\nShort desc.\n\n== Description ==\nHello");

    assert_eq!(readme.name.as_deref(), Some("My Theme"));
    assert_eq!(readme.tags, vec!["foo", "bar"]);
    assert!(readme.short_description.contains("Short desc."));
    assert!(readme
        .section(readmeta_parser::Section::Description)
        .unwrap()
        .contains("Hello"));
}

#[test]
fn test_full_theme_headers() {
    let readme = parse(THEME_README);

    assert_eq!(readme.name.as_deref(), Some("Twenty Demo"));
    assert_eq!(readme.contributors, vec!["alice", "bob"]);
    assert_eq!(readme.tags, vec!["blog", "two-columns", "featured"]);
    assert_eq!(readme.requires.as_deref(), Some("5.8"));
    assert_eq!(readme.tested.as_deref(), Some("6.4"));
    assert_eq!(readme.requires_php.as_deref(), Some("7.4"));
    assert_eq!(readme.stable_tag.as_deref(), Some("1.2.3"));
    assert_eq!(readme.license.as_deref(), Some("GPLv2 or later"));
    assert_eq!(
        readme.license_uri.as_deref(),
        Some("https://www.gnu.org/licenses/gpl-2.0.html")
    );
    assert_eq!(readme.donate_link.as_deref(), Some("https://example.com/donate"));
    assert_eq!(readme.short_description, "A clean, fast blog theme.");
    assert!(readme.warnings.is_empty());
}

#[test]
fn test_stable_tag_path_prefix() {
    let readme = parse("=== T ===\nStable tag: tags/1.2.3\n");
    assert_eq!(readme.stable_tag.as_deref(), Some("1.2.3"));
}

#[test]
fn test_tested_above_ceiling_is_ignored() {
    let readme = parse_with_ceiling("=== T ===\nTested up to: WordPress 6.6\n", "6.4");
    assert_eq!(readme.tested, None);
    assert!(readme.has_warning(ReadmeWarning::TestedHeaderIgnored));
}

#[test]
fn test_tested_ceiling_allows_next_release() {
    let readme = parse_with_ceiling("=== T ===\nTested up to: 6.5\n", "6.4");
    assert_eq!(readme.tested.as_deref(), Some("6.5"));
    assert!(readme.warnings.is_empty());
}

#[test]
fn test_tested_ceiling_compares_leading_minor_version() {
    let readme = parse_with_ceiling("=== T ===\nTested up to: WordPress 5.9.9999\n", "5.9");
    assert_eq!(readme.tested.as_deref(), Some("5.9.9999"));
}

#[test]
fn test_malformed_versions_raise_warnings() {
    let readme = parse(
        "=== T ===\nRequires at least: soon\nTested up to: 6\nRequires PHP: 7.x\n\nDesc.",
    );

    assert_eq!(readme.requires, None);
    assert_eq!(readme.tested, None);
    assert_eq!(readme.requires_php, None);
    assert!(readme.has_warning(ReadmeWarning::RequiresHeaderIgnored));
    assert!(readme.has_warning(ReadmeWarning::TestedHeaderIgnored));
    assert!(readme.has_warning(ReadmeWarning::RequiresPhpHeaderIgnored));
    assert_eq!(readme.short_description, "Desc.");
}

#[test]
fn test_headers_wrapped_with_blank_lines() {
    let readme = parse("=== T ===\nTags: a\n\nContributors: me\n\nThe tagline.\n");
    assert_eq!(readme.tags, vec!["a"]);
    assert_eq!(readme.contributors, vec!["me"]);
    assert_eq!(readme.short_description, "The tagline.");
}

#[test]
fn test_placeholder_title_replaced() {
    let readme = parse("=== Plugin Name ===\nAwesome Gallery\nContributors: me\n");
    assert_eq!(readme.name.as_deref(), Some("Awesome Gallery"));
    assert_eq!(readme.contributors, vec!["me"]);
}

#[test]
fn test_placeholder_title_without_replacement() {
    let readme = parse("=== Plugin Name ===\nContributors: me\nTags: a\n\nDesc");
    assert_eq!(readme.name, None);
    assert_eq!(readme.contributors, vec!["me"]);
    assert_eq!(readme.tags, vec!["a"]);
}

#[test]
fn test_markdown_title_with_underline() {
    let readme = parse("My Plugin\n=========\nTags: a\n");
    assert_eq!(readme.name.as_deref(), Some("My Plugin"));
    assert_eq!(readme.tags, vec!["a"]);
}
