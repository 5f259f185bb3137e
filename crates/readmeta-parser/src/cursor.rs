//! A forward cursor over the normalized lines.
//!
//! Each parsing stage advances the same cursor. A stage that reads one line
//! too far steps back with [`LineCursor::push_back`] so the next stage sees
//! it; the line sequence itself is never modified.

/// Cursor over an immutable line sequence.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    position: usize,
}

impl<'a> LineCursor<'a> {
    /// Start at the first line.
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, position: 0 }
    }

    /// Consume and return the next line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.position)?;
        self.position += 1;
        Some(line.as_str())
    }

    /// Consume lines until one is not blank and return it.
    ///
    /// Blank lines skipped on the way stay consumed.
    pub fn next_non_blank(&mut self) -> Option<&'a str> {
        while let Some(line) = self.next_line() {
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
        None
    }

    /// The next line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).map(String::as_str)
    }

    /// Un-consume the most recently consumed line.
    pub fn push_back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> &'a [String] {
        self.lines.get(self.position..).unwrap_or_default()
    }

    /// Index of the next line.
    pub fn position(&self) -> usize {
        self.position
    }
}
