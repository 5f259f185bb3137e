//! Markdown rendering.
//!
//! The readme parser only needs one operation from a Markdown engine:
//! turn a block of text into HTML. [`MarkdownRenderer`] captures that seam;
//! [`CommonMarkRenderer`] implements it with `pulldown-cmark`.
//!
//! Renderers hold no per-call state, so a single instance can be built once
//! and shared by every parse.
//!
//! # Example
//!
//! ```rust
//! use readmeta_content::markdown::{CommonMarkRenderer, MarkdownRenderer};
//!
//! let renderer = CommonMarkRenderer::default();
//! assert_eq!(renderer.render("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
//! ```

pub mod render;

pub use render::{CommonMarkRenderer, MarkdownRenderer};
