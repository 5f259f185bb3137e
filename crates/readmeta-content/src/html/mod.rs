//! HTML utilities for untrusted readme content.
//!
//! - [`strip`]: Remove markup and escape text
//! - [`balance`]: Repair unbalanced tag nesting
//! - [`filter`]: Keep only allow-listed tags and attributes
//!
//! Scanning is done with a small regex tokenizer ([`tokens`]) rather than a
//! full HTML parser. Input is rendered Markdown plus whatever inline HTML a
//! readme author typed, so tags are expected to be simple.

pub mod balance;
pub mod filter;
pub mod strip;
pub mod tokens;

pub use balance::balance_tags;
pub use filter::{filter_html, AllowList};
pub use strip::{escape_html, sanitize_text, strip_tags};

/// Final cleanup applied to every rendered section: trim, balance tags,
/// filter against the default [`AllowList`], trim again.
///
/// # Example
///
/// ```rust
/// use readmeta_content::html::filter_text;
///
/// let html = "  <p>Open <strong>bold <script>x</script>\n";
/// assert_eq!(filter_text(html), "<p>Open <strong>bold x</strong></p>");
/// ```
pub fn filter_text(html: &str) -> String {
    let balanced = balance_tags(html.trim());
    filter_html(&balanced, &AllowList::default())
        .trim()
        .to_string()
}
