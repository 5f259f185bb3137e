//! Shared fixtures for the readme parser integration tests.

use readmeta_core::ParserConfig;
use readmeta_parser::{ParsedReadme, ReadmeParser};

/// A complete theme readme exercising every header and section.
pub const THEME_README: &str = "\
=== Twenty Demo ===
Contributors: alice, bob
Tags: blog, two-columns, featured
Requires at least: WordPress 5.8
Tested up to: 6.4
Requires PHP: 7.4
Stable tag: tags/1.2.3
License: GPLv2 or later - https://www.gnu.org/licenses/gpl-2.0.html
Donate link: https://example.com/donate

A clean, fast blog theme.

== Description ==

Twenty Demo is a *minimal* theme.

### Features

* Dark mode
* Wide blocks

== Installation ==

1. Upload the theme.
2. Activate it.

== Frequently Asked Questions ==

= Does it support menus? =

Yes, two of them.

= Is it free? =

Yes.

== Changelog ==

= 1.2.3 =
* Fix header spacing.

== Upgrade Notice ==

= 1.2.3 =
Recommended <em>bugfix</em> release.

== Copyright ==

Twenty Demo is distributed under the terms of the GNU GPL.
";

/// Parse with the default configuration.
pub fn parse(text: &str) -> ParsedReadme {
    ReadmeParser::default().parse_str(text)
}

/// Parse with a stable version ceiling.
pub fn parse_with_ceiling(text: &str, stable_version: &str) -> ParsedReadme {
    let config = ParserConfig::default().with_stable_version(stable_version);
    ReadmeParser::new(config).parse_str(text)
}

/// Encode `text` as UTF-16LE with a byte-order mark.
pub fn utf16le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}
