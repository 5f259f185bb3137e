//! Markdown to HTML rendering with `pulldown-cmark`.

use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown text to HTML.
///
/// Implementations must be pure: the same input always renders the same
/// output and no state is carried between calls.
pub trait MarkdownRenderer: Send + Sync {
    /// Render `text` to an HTML fragment.
    fn render(&self, text: &str) -> String;
}

/// CommonMark renderer with the extensions readme authors commonly use:
/// tables, footnotes, strikethrough and definition lists.
///
/// Raw inline HTML passes through untouched; callers filter the output.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl CommonMarkRenderer {
    /// Create a renderer with an explicit set of extensions.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::with_options(
            Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_DEFINITION_LIST,
        )
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let parser = Parser::new_ext(text, self.options);
        let mut output = String::with_capacity(text.len() + text.len() / 2);
        html::push_html(&mut output, parser);
        output
    }
}

// ============================================================================
// Tests
// ============================================================================
