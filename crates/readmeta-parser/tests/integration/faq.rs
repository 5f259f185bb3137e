//! FAQ parsing in both heading styles.

use readmeta_parser::Section;

use crate::common::{parse, THEME_README};

#[test]
fn test_heading_style_faq() {
    let readme = parse(THEME_README);

    assert_eq!(
        readme.faq.titles().collect::<Vec<_>>(),
        vec!["Does it support menus?", "Is it free?"]
    );
    assert_eq!(readme.faq.get("Is it free?"), Some("<p>Yes.</p>"));

    let faq = readme.section(Section::Faq).unwrap();
    assert!(faq.starts_with("<dl>"));
    assert!(faq.contains("<dt>Does it support menus?</dt>"));
    assert!(faq.contains("<p>Yes, two of them.</p>"));
    assert!(faq.ends_with("</dl>"));
}

#[test]
fn test_bold_style_faq() {
    let readme = parse(
        "=== Bold ===\n\n== FAQ ==\n\n**How do I start?**\nInstall it.\n\n**Where are the docs?**\nOnline.\n",
    );

    assert_eq!(
        readme.faq.titles().collect::<Vec<_>>(),
        vec!["How do I start?", "Where are the docs?"]
    );
    assert_eq!(readme.faq.get("Where are the docs?"), Some("<p>Online.</p>"));
}

#[test]
fn test_free_form_faq_before_questions() {
    let readme = parse(
        "=== T ===\n\n== Frequently Asked Questions ==\nAsk on the forum.\n\n### Is it fast? ###\nVery.\n",
    );

    assert_eq!(readme.faq.get(""), None);
    assert_eq!(readme.faq.get("Is it fast?"), Some("<p>Very.</p>"));

    let faq = readme.section(Section::Faq).unwrap();
    assert!(faq.starts_with("<p>Ask on the forum.</p>"));
    assert!(faq.contains("<dt>Is it fast?</dt>"));
}

#[test]
fn test_faq_without_questions_is_free_form() {
    let readme = parse("=== T ===\n\n== FAQ ==\nNothing to see.\n");

    assert!(readme.faq.is_empty());
    assert_eq!(
        readme.section(Section::Faq),
        Some("<p>Nothing to see.</p>")
    );
}

#[test]
fn test_faq_serializes_in_question_order() {
    let readme = parse(THEME_README);
    let json = serde_json::to_string(&readme.faq).unwrap();
    let first = json.find("Does it support menus?").unwrap();
    let second = json.find("Is it free?").unwrap();
    assert!(first < second);
}
