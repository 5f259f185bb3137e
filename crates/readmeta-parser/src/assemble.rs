//! Result assembly: merging, rendering and filtering the parsed sections.

use std::collections::BTreeMap;

use readmeta_content::{filter_text, sanitize_text, MarkdownRenderer};
use readmeta_core::{slugify, ParserConfig};

use crate::blocks::parse_sub_list;
use crate::model::{ItemList, ParsedReadme, Section};
use crate::short_description::finalize_short_description;

/// Finish `readme` from the raw short description and raw section text.
///
/// After this returns `sections` holds filtered HTML and never contains
/// [`Section::OtherNotes`] or [`Section::UpgradeNotice`].
pub fn assemble<R>(
    readme: &mut ParsedReadme,
    short_description: &str,
    mut sections: BTreeMap<Section, String>,
    renderer: &R,
    config: &ParserConfig,
) where
    R: MarkdownRenderer + ?Sized,
{
    if !short_description.is_empty() {
        sections
            .entry(Section::Description)
            .or_insert_with(|| short_description.to_string());
    }

    if let Some(notes) = sections.remove(&Section::OtherNotes) {
        let description = sections.entry(Section::Description).or_default();
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str(&notes);
    }

    let mut upgrade_notice = sections
        .remove(&Section::UpgradeNotice)
        .map(|text| parse_sub_list(&text))
        .unwrap_or_default();
    upgrade_notice.map_bodies(sanitize_text);

    let mut faq = sections
        .remove(&Section::Faq)
        .map(|text| parse_sub_list(&text))
        .unwrap_or_default();

    for text in sections.values_mut() {
        *text = renderer.render(text);
    }
    upgrade_notice.map_bodies(|body| renderer.render(body));
    faq.map_bodies(|body| renderer.render(body));

    readme.short_description = finalize_short_description(
        short_description,
        sections.get(&Section::Description).map(String::as_str),
        renderer,
        config.short_description_length,
    );

    if !faq.is_empty() {
        sections.insert(Section::Faq, faq_html(&mut faq));
    }

    for text in sections.values_mut() {
        *text = filter_text(text);
    }
    sections.retain(|_, text| !text.is_empty());
    upgrade_notice.map_bodies(filter_text);
    faq.map_bodies(filter_text);

    readme.sections = sections;
    readme.upgrade_notice = upgrade_notice;
    readme.faq = faq;
}

/// Render FAQ items as a definition list with slug anchors.
///
/// Free-form content kept under the empty title is moved out of `faq` and
/// placed before the list.
fn faq_html(faq: &mut ItemList) -> String {
    let mut html = faq.remove("").unwrap_or_default();
    if faq.is_empty() {
        return html;
    }

    html.push_str("\n<dl>\n");
    for (question, answer) in faq.iter() {
        let slug = slugify(question);
        html.push_str(&format!(
            "<dt id='{slug}'>{question}</dt>\n<dd>{answer}</dd>\n"
        ));
    }
    html.push_str("\n</dl>\n");
    html
}
