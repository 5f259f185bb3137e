//! Markdown rendering, HTML filtering, and text utilities.
//!
//! This crate provides the content-processing collaborators the readme
//! parser relies on. It has no readme-specific logic: each function takes
//! text and returns text.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown to HTML rendering behind a [`MarkdownRenderer`] trait
//! - [`html`]: HTML utilities
//!   - [`html::strip`]: Tag stripping and entity-preserving escaping
//!   - [`html::balance`]: Closing unclosed tags, dropping stray closers
//!   - [`html::filter`]: Allow-list filtering of tags and attributes
//! - [`text`]: Length trimming for summaries
//!
//! # Example
//!
//! ```rust
//! use readmeta_content::{filter_text, CommonMarkRenderer, MarkdownRenderer};
//!
//! let renderer = CommonMarkRenderer::default();
//! let html = renderer.render("Some *emphasis* and <span>markup</span>");
//! assert_eq!(filter_text(&html), "<p>Some <em>emphasis</em> and markup</p>");
//! ```

pub mod html;
pub mod markdown;
pub mod text;

// Re-export commonly used types
pub use html::{
    balance_tags, escape_html, filter_html, filter_text, sanitize_text, strip_tags, AllowList,
};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use text::{trim_length, ELLIPSIS};
