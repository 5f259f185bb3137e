//! Section splitting, merging and serialization on whole documents.

use readmeta_parser::Section;

use crate::common::{parse, THEME_README};

#[test]
fn test_full_theme_sections() {
    let readme = parse(THEME_README);

    let keys: Vec<_> = readme.sections.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            Section::Description,
            Section::Installation,
            Section::Faq,
            Section::Changelog
        ]
    );

    let description = readme.section(Section::Description).unwrap();
    assert!(description.contains("<em>minimal</em>"));
    assert!(description.contains("<h3>Features</h3>"));
    assert!(description.contains("<li>Dark mode</li>"));
    assert!(description.contains("<h3>Copyright</h3>"));
    assert!(description.contains("distributed under the terms"));

    let installation = readme.section(Section::Installation).unwrap();
    assert!(installation.starts_with("<ol>"));
    assert!(readme.has_unique_installation_instructions());

    assert!(readme
        .section(Section::Changelog)
        .unwrap()
        .contains("Fix header spacing."));
}

#[test]
fn test_upgrade_notice_moved_out_of_sections() {
    let readme = parse(THEME_README);

    assert!(!readme.sections.contains_key(&Section::UpgradeNotice));
    assert_eq!(readme.upgrade_notice.len(), 1);
    assert_eq!(
        readme.upgrade_notice.get("1.2.3"),
        Some("<p>Recommended bugfix release.</p>")
    );
}

#[test]
fn test_triple_hash_does_not_split() {
    let readme = parse("=== T ===\n\n## Description\nIntro\n### Notes\nMore\n");

    assert_eq!(readme.sections.len(), 1);
    let description = readme.section(Section::Description).unwrap();
    assert!(description.contains("<h3>Notes</h3>"));
    assert!(description.contains("More"));
}

#[test]
fn test_unknown_heading_folded_into_description() {
    let readme = parse("=== T ===\n\nTagline.\n\n== Screenshots ==\n1. The front page.\n");

    assert!(!readme.sections.contains_key(&Section::OtherNotes));
    let description = readme.section(Section::Description).unwrap();
    assert!(description.starts_with("<p>Tagline.</p>"));
    assert!(description.contains("<h3>Screenshots</h3>"));
}

#[test]
fn test_change_log_alias() {
    let readme = parse("=== T ===\n\n== Change Log ==\n* 1.0\n");
    assert!(readme.section(Section::Changelog).unwrap().contains("<li>1.0</li>"));
}

#[test]
fn test_short_description_falls_back_to_description() {
    let readme = parse("=== T ===\n\n== Description ==\nFirst line here.\nSecond line.\n");
    assert_eq!(readme.short_description, "First line here.");
}

#[test]
fn test_long_short_description_truncated() {
    let tagline = "This theme does a great many things. ".repeat(8);
    let readme = parse(&format!("=== T ===\n\n{tagline}\n"));

    assert!(readme.short_description.chars().count() <= 150);
    assert!(readme.short_description.ends_with('.'));
}

#[test]
fn test_default_installation_text_detected() {
    let readme = parse(
        "=== T ===\n\n== Installation ==\n\
         This section describes how to install the plugin and get it working.\n",
    );
    assert!(!readme.has_unique_installation_instructions());
}

#[test]
fn test_scripts_never_survive() {
    let readme = parse(
        "=== T ===\n\n== Description ==\n<script>alert(1)</script>\n\n\
         [click](javascript:alert(1)) <a href=\"https://ok.example\" onclick=\"x\">ok</a>\n",
    );
    let description = readme.section(Section::Description).unwrap();

    assert!(!description.contains("<script"));
    assert!(!description.contains("javascript:"));
    assert!(!description.contains("onclick"));
    assert!(description.contains("<a href=\"https://ok.example\">ok</a>"));
}

#[test]
fn test_entity_encoded_script_links_never_survive() {
    let readme = parse(
        "=== T ===\n\n== Description ==\n\
         <a href=\"javascript&colon;alert(1)\">a</a> <a href=\"java&#115;cript:alert(2)\">b</a>\n",
    );
    let description = readme.section(Section::Description).unwrap();

    assert!(!description.contains("href"));
    assert!(!description.contains("javascript&colon;"));
    assert!(!description.contains("java&#115;cript"));
    assert!(description.contains("<a>a</a>"));
    assert!(description.contains("<a>b</a>"));
}

#[test]
fn test_serializes_sections_in_fixed_order() {
    let readme = parse(THEME_README);
    let json = serde_json::to_string(&readme).unwrap();

    let position = |key: &str| json.find(&format!("\"{key}\":")).unwrap();
    assert!(position("description") < position("installation"));
    assert!(position("installation") < position("faq"));
    assert!(position("faq") < position("changelog"));
    assert!(!json.contains("\"other_notes\""));
}

#[test]
fn test_serializes_warning_names() {
    let readme = parse("=== T ===\nRequires PHP: latest\n");
    let json = serde_json::to_value(&readme).unwrap();
    assert_eq!(json["warnings"], serde_json::json!(["requires_php_header_ignored"]));
}
