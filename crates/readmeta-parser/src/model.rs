//! The parsed readme record and its supporting types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Default-template phrase marking installation text that was never edited.
const DEFAULT_INSTALLATION_PHRASE: &str =
    "This section describes how to install the plugin and get it working.";

/// A named body section of a readme.
///
/// Variants are ordered the way sections are emitted. `UpgradeNotice` and
/// `OtherNotes` only exist while parsing; a finished [`ParsedReadme`] never
/// contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Long description.
    Description,
    /// Installation instructions.
    Installation,
    /// Frequently asked questions.
    Faq,
    /// Release history.
    Changelog,
    /// Bundled resources and their licenses.
    Resources,
    /// Per-version upgrade notices.
    UpgradeNotice,
    /// Content under headings outside the expected set.
    OtherNotes,
}

impl Section {
    /// Every section a readme may declare, in output order.
    pub const EXPECTED: [Section; 7] = [
        Section::Description,
        Section::Installation,
        Section::Faq,
        Section::Changelog,
        Section::Resources,
        Section::UpgradeNotice,
        Section::OtherNotes,
    ];

    /// The snake_case key of this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::Description => "description",
            Section::Installation => "installation",
            Section::Faq => "faq",
            Section::Changelog => "changelog",
            Section::Resources => "resources",
            Section::UpgradeNotice => "upgrade_notice",
            Section::OtherNotes => "other_notes",
        }
    }

    /// Resolve a normalized heading key, applying the section aliases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use readmeta_parser::Section;
    ///
    /// assert_eq!(Section::from_key("change_log"), Some(Section::Changelog));
    /// assert_eq!(Section::from_key("frequently_asked_questions"), Some(Section::Faq));
    /// assert_eq!(Section::from_key("screenshots"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Section> {
        match key {
            "frequently_asked_questions" => Some(Section::Faq),
            "change_log" => Some(Section::Changelog),
            _ => Section::EXPECTED.into_iter().find(|s| s.key() == key),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A soft validation failure. The offending field is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadmeWarning {
    /// `Requires at least` was malformed or above the stable ceiling.
    RequiresHeaderIgnored,
    /// `Tested up to` was malformed or above the stable ceiling.
    TestedHeaderIgnored,
    /// `Requires PHP` was malformed.
    RequiresPhpHeaderIgnored,
}

impl ReadmeWarning {
    /// The flag name.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadmeWarning::RequiresHeaderIgnored => "requires_header_ignored",
            ReadmeWarning::TestedHeaderIgnored => "tested_header_ignored",
            ReadmeWarning::RequiresPhpHeaderIgnored => "requires_php_header_ignored",
        }
    }
}

impl fmt::Display for ReadmeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Titled items kept in encounter order.
///
/// Inserting a title that already exists replaces its body in place.
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<(String, String)>,
}

impl ItemList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, replacing the body of an existing title.
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let title = title.into();
        let body = body.into();
        match self.items.iter_mut().find(|(t, _)| *t == title) {
            Some((_, existing)) => *existing = body,
            None => self.items.push((title, body)),
        }
    }

    /// Body for `title`.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, body)| body.as_str())
    }

    /// Remove and return the body for `title`.
    pub fn remove(&mut self, title: &str) -> Option<String> {
        let index = self.items.iter().position(|(t, _)| t == title)?;
        Some(self.items.remove(index).1)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate `(title, body)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(t, b)| (t.as_str(), b.as_str()))
    }

    /// Titles in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(t, _)| t.as_str())
    }

    /// Replace every body with `f(body)`.
    pub fn map_bodies(&mut self, mut f: impl FnMut(&str) -> String) {
        for (_, body) in &mut self.items {
            *body = f(body);
        }
    }
}

impl<T: Into<String>, B: Into<String>> FromIterator<(T, B)> for ItemList {
    fn from_iter<I: IntoIterator<Item = (T, B)>>(iter: I) -> Self {
        let mut list = ItemList::new();
        for (title, body) in iter {
            list.insert(title, body);
        }
        list
    }
}

impl Serialize for ItemList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (title, body) in &self.items {
            map.serialize_entry(title, body)?;
        }
        map.end()
    }
}

/// Normalized metadata parsed from a readme.
///
/// Built once per parse. Fields that were absent or rejected are `None`
/// or empty; rejected version headers also leave a flag in `warnings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedReadme {
    /// Document title, `None` when it could not be determined.
    pub name: Option<String>,
    /// Declared tags in order, minus ignored ones.
    pub tags: Vec<String>,
    /// Minimum platform version (`x.y` or `x.y.z`).
    pub requires: Option<String>,
    /// Highest platform version tested against (`x.y` or `x.y.z`).
    pub tested: Option<String>,
    /// Minimum PHP version (`x.y` or `x.y.z`).
    pub requires_php: Option<String>,
    /// Released version tag.
    pub stable_tag: Option<String>,
    /// Contributor handles in order.
    pub contributors: Vec<String>,
    /// Donation URL.
    pub donate_link: Option<String>,
    /// License name.
    pub license: Option<String>,
    /// License URL.
    pub license_uri: Option<String>,
    /// Raw `Resources` header value.
    pub resources: Option<String>,
    /// Plain-text summary, at most the configured length plus an ellipsis.
    pub short_description: String,
    /// Filtered HTML for each non-empty section.
    pub sections: BTreeMap<Section, String>,
    /// Upgrade notice HTML keyed by version label.
    pub upgrade_notice: ItemList,
    /// FAQ answer HTML keyed by question.
    pub faq: ItemList,
    /// Soft validation failures.
    pub warnings: BTreeSet<ReadmeWarning>,
}

impl ParsedReadme {
    /// HTML for a section, if present.
    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Whether `warning` was raised.
    pub fn has_warning(&self, warning: ReadmeWarning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Whether the installation section says something beyond the
    /// default readme template.
    pub fn has_unique_installation_instructions(&self) -> bool {
        let Some(installation) = self.section(Section::Installation) else {
            return false;
        };

        !installation
            .to_lowercase()
            .contains(&DEFAULT_INSTALLATION_PHRASE.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Section tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_section_keys_round_trip() {
        for section in Section::EXPECTED {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
    }

    #[test]
    fn test_section_order() {
        assert!(Section::Description < Section::Installation);
        assert!(Section::Faq < Section::Changelog);
        assert!(Section::Resources < Section::UpgradeNotice);
    }

    #[test]
    fn test_section_from_unknown_key() {
        assert_eq!(Section::from_key("Description"), None);
        assert_eq!(Section::from_key(""), None);
    }

    // ------------------------------------------------------------------------
    // ReadmeWarning tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_warning_names() {
        assert_eq!(
            ReadmeWarning::RequiresHeaderIgnored.to_string(),
            "requires_header_ignored"
        );
        assert_eq!(
            ReadmeWarning::TestedHeaderIgnored.to_string(),
            "tested_header_ignored"
        );
        assert_eq!(
            serde_json::to_string(&ReadmeWarning::RequiresPhpHeaderIgnored).unwrap(),
            "\"requires_php_header_ignored\""
        );
    }

    // ------------------------------------------------------------------------
    // ItemList tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_item_list_overwrite_keeps_position() {
        let mut list = ItemList::new();
        list.insert("1.0", "first");
        list.insert("2.0", "second");
        list.insert("1.0", "replaced");

        assert_eq!(list.len(), 2);
        assert_eq!(list.titles().collect::<Vec<_>>(), vec!["1.0", "2.0"]);
        assert_eq!(list.get("1.0"), Some("replaced"));
    }

    #[test]
    fn test_item_list_remove() {
        let mut list: ItemList = [("", "free"), ("Q", "A")].into_iter().collect();
        assert_eq!(list.remove(""), Some("free".to_string()));
        assert_eq!(list.remove(""), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_item_list_map_bodies() {
        let mut list: ItemList = [("a", "x"), ("b", "y")].into_iter().collect();
        list.map_bodies(|b| b.to_uppercase());
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![("a", "X"), ("b", "Y")]);
    }

    #[test]
    fn test_item_list_serializes_in_order() {
        let list: ItemList = [("z", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"{"z":"1","a":"2"}"#);
    }

    // ------------------------------------------------------------------------
    // ParsedReadme tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_unique_installation_missing_section() {
        assert!(!ParsedReadme::default().has_unique_installation_instructions());
    }

    #[test]
    fn test_unique_installation_default_phrase() {
        let mut readme = ParsedReadme::default();
        readme.sections.insert(
            Section::Installation,
            "<p>this section describes how to install the plugin and get it working.</p>"
                .to_string(),
        );
        assert!(!readme.has_unique_installation_instructions());
    }

    #[test]
    fn test_unique_installation_custom_text() {
        let mut readme = ParsedReadme::default();
        readme
            .sections
            .insert(Section::Installation, "<p>Upload and activate.</p>".to_string());
        assert!(readme.has_unique_installation_instructions());
    }

    #[test]
    fn test_parsed_readme_serializes_section_keys() {
        let mut readme = ParsedReadme::default();
        readme
            .sections
            .insert(Section::Changelog, "<p>1.0</p>".to_string());
        let json = serde_json::to_value(&readme).unwrap();
        assert_eq!(json["sections"]["changelog"], "<p>1.0</p>");
        assert!(json["name"].is_null());
    }
}
