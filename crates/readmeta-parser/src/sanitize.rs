//! Field sanitizers for raw header values.
//!
//! Every sanitizer degrades instead of failing: a malformed version header
//! is cleared and reported as a [`ReadmeWarning`], everything else is
//! cleaned up as far as possible and kept.

use std::sync::LazyLock;

use readmeta_core::ParserConfig;
use regex::Regex;

use crate::header::{HeaderField, Headers};
use crate::model::{ParsedReadme, ReadmeWarning};

/// Amount a declared version may exceed the stable ceiling (trunk builds).
const CEILING_ALLOWANCE: f64 = 0.1;

static PLATFORM_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9](\.[0-9]+)?$")
        .expect("PLATFORM_VERSION_RE: hardcoded regex is valid")
});

static PHP_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+){1,2}$").expect("PHP_VERSION_RE: hardcoded regex is valid")
});

static TESTED_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)wordpress|wp").expect("TESTED_NOISE_RE: hardcoded regex is valid")
});

static REQUIRES_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)wordpress|wp|or higher|and above|\+")
        .expect("REQUIRES_NOISE_RE: hardcoded regex is valid")
});

static LEADING_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)")
        .expect("LEADING_FLOAT_RE: hardcoded regex is valid")
});

static TAGS_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^/?tags/").expect("TAGS_PREFIX_RE: hardcoded regex is valid")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("URL_RE: hardcoded regex is valid"));

/// Which platform version header is being sanitized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionHeader {
    /// `Requires at least`
    Requires,
    /// `Tested up to`
    Tested,
}

impl VersionHeader {
    fn warning(self) -> ReadmeWarning {
        match self {
            VersionHeader::Requires => ReadmeWarning::RequiresHeaderIgnored,
            VersionHeader::Tested => ReadmeWarning::TestedHeaderIgnored,
        }
    }

    fn noise(self) -> &'static Regex {
        match self {
            VersionHeader::Requires => &*REQUIRES_NOISE_RE,
            VersionHeader::Tested => &*TESTED_NOISE_RE,
        }
    }
}

/// Split a comma-separated header into trimmed entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// Tags in order, without blank or ignored entries.
pub fn sanitize_tags(raw: &str, config: &ParserConfig) -> Vec<String> {
    split_list(raw)
        .into_iter()
        .filter(|tag| !tag.is_empty() && !config.is_ignored_tag(tag))
        .collect()
}

/// Normalize a stable tag to a bare version-like token.
///
/// # Example
///
/// ```rust
/// use readmeta_parser::sanitize::sanitize_stable_tag;
///
/// assert_eq!(sanitize_stable_tag("\"tags/1.2.3\""), "1.2.3");
/// assert_eq!(sanitize_stable_tag(".9 beta"), "0.9beta");
/// ```
pub fn sanitize_stable_tag(raw: &str) -> String {
    let unquoted = raw.trim().trim_matches(['"', '\'']);
    let stripped = TAGS_PREFIX_RE.replace(unquoted, "");
    let tag: String = stripped
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    if tag.starts_with('.') {
        format!("0{tag}")
    } else {
        tag
    }
}

/// Validate a `Requires PHP` value (`x.y` or `x.y.z`).
pub fn sanitize_requires_php(raw: &str) -> Result<String, ReadmeWarning> {
    let version = raw.trim();
    if PHP_VERSION_RE.is_match(version) {
        Ok(version.to_string())
    } else {
        Err(ReadmeWarning::RequiresPhpHeaderIgnored)
    }
}

/// Validate a platform version header.
///
/// Product-name noise is removed and any `-suffix` dropped before the value
/// must look like `x.y` or `x.y.z`. With a `ceiling`, values whose leading
/// number exceeds the ceiling by more than 0.1 are rejected as well.
///
/// # Example
///
/// ```rust
/// use readmeta_parser::sanitize::{sanitize_version, VersionHeader};
///
/// assert_eq!(
///     sanitize_version(VersionHeader::Tested, "WordPress 6.4-RC1", None).as_deref(),
///     Ok("6.4")
/// );
/// assert!(sanitize_version(VersionHeader::Tested, "7.0", Some("6.4")).is_err());
/// ```
pub fn sanitize_version(
    header: VersionHeader,
    raw: &str,
    ceiling: Option<&str>,
) -> Result<String, ReadmeWarning> {
    let cleaned = header.noise().replace_all(raw.trim(), "");
    let cleaned = cleaned.trim();
    let version = cleaned.split('-').next().unwrap_or_default().trim();

    if !PLATFORM_VERSION_RE.is_match(version) {
        return Err(header.warning());
    }

    if let Some(ceiling) = ceiling {
        match (leading_float(version), leading_float(ceiling)) {
            (Some(value), Some(limit)) if value > limit + CEILING_ALLOWANCE => {
                return Err(header.warning());
            }
            (_, None) => {
                log::warn!("Stable version {ceiling:?} is not numeric, skipping ceiling check");
            }
            _ => {}
        }
    }

    Ok(version.to_string())
}

/// Numeric value of the leading decimal number in `text`.
///
/// Only the first two components of a dotted version count, so `5.9.9999`
/// is `5.9`.
pub fn leading_float(text: &str) -> Option<f64> {
    LEADING_FLOAT_RE
        .find(text)
        .and_then(|m| m.as_str().trim().parse().ok())
}

/// Split a URL embedded in a license value out into the license URI.
///
/// Only applies when no explicit URI was given. Returns the cleaned license
/// name and the URI to use.
pub fn split_license(license: &str, license_uri: Option<&str>) -> (String, Option<String>) {
    if license_uri.is_some() {
        return (license.to_string(), license_uri.map(str::to_string));
    }

    match URL_RE.find(license) {
        Some(url) => {
            let name = license
                .replace(url.as_str(), "")
                .trim_matches([' ', '-', '*', '\t', '\n', '\r'])
                .to_string();
            (name, Some(url.as_str().to_string()))
        }
        None => (license.to_string(), None),
    }
}

/// Fill the header-derived fields of `readme`, recording warnings.
pub fn apply_headers(readme: &mut ParsedReadme, headers: &Headers, config: &ParserConfig) {
    let ceiling = config.stable_version.as_deref();

    if let Some(raw) = headers.get(HeaderField::Tags) {
        readme.tags = sanitize_tags(raw, config);
    }

    let versions = [
        (HeaderField::Requires, VersionHeader::Requires),
        (HeaderField::Tested, VersionHeader::Tested),
    ];
    for (field, kind) in versions {
        let Some(raw) = headers.get(field) else {
            continue;
        };
        match sanitize_version(kind, raw, ceiling) {
            Ok(version) => match kind {
                VersionHeader::Requires => readme.requires = Some(version),
                VersionHeader::Tested => readme.tested = Some(version),
            },
            Err(warning) => record_warning(readme, warning, raw),
        }
    }

    if let Some(raw) = headers.get(HeaderField::RequiresPhp) {
        match sanitize_requires_php(raw) {
            Ok(version) => readme.requires_php = Some(version),
            Err(warning) => record_warning(readme, warning, raw),
        }
    }

    if let Some(raw) = headers.get(HeaderField::Contributors) {
        readme.contributors = split_list(raw);
    }

    if let Some(raw) = headers.get(HeaderField::StableTag) {
        readme.stable_tag = non_empty(sanitize_stable_tag(raw));
    }

    readme.donate_link = headers.get(HeaderField::DonateLink).map(str::to_string);
    readme.resources = headers.get(HeaderField::Resources).map(str::to_string);

    let explicit_uri = headers.get(HeaderField::LicenseUri);
    match headers.get(HeaderField::License) {
        Some(license) => {
            let (name, uri) = split_license(license, explicit_uri);
            readme.license = non_empty(name);
            readme.license_uri = uri;
        }
        None => readme.license_uri = explicit_uri.map(str::to_string),
    }
}

fn record_warning(readme: &mut ParsedReadme, warning: ReadmeWarning, raw: &str) {
    log::warn!("{warning}: ignoring header value {raw:?}");
    readme.warnings.insert(warning);
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
