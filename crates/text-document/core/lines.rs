//! Line storage with a lazily cached width
//!
//! `LineStore` owns the ordered lines of a document. It always holds at least
//! one line. The longest-line width is memoized behind a dirty flag: every
//! structural mutation marks it stale and the next [`LineStore::width`] call
//! rescans all lines.

use crate::core::config::LineEndingPolicy;
use crate::core::position::Position;
use crate::utils::char_len;
use core::cell::Cell;
use core::fmt;
use log::trace;

/// Ordered sequence of lines with a cached longest-line width
#[derive(Debug, Clone)]
pub struct LineStore {
    /// Line contents without terminators
    lines: Vec<String>,

    /// Length of the longest line, valid only while `dirty` is false
    width: Cell<usize>,

    /// Set by every mutation, cleared by recomputation
    dirty: Cell<bool>,
}

impl LineStore {
    /// Build the store from raw text split by `policy`
    #[must_use]
    pub fn from_text(text: &str, policy: LineEndingPolicy) -> Self {
        Self::from_lines(policy.split(text))
    }

    /// Build the store from already split lines
    ///
    /// An empty vector becomes a single empty line.
    #[must_use]
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            width: Cell::new(0),
            dirty: Cell::new(true),
        }
    }

    /// Line content, or `""` for rows outside the document
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map_or("", String::as_str)
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; a document has at least one line
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Length of a line in characters, 0 for rows outside the document
    #[must_use]
    pub fn line_length(&self, row: usize) -> usize {
        char_len(self.line(row))
    }

    /// Iterate over line contents in row order
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Position just past the last character of the last line
    #[must_use]
    pub fn end_position(&self) -> Position {
        let last = self.lines.len().saturating_sub(1);
        Position::new(last, self.line_length(last))
    }

    /// Length of the longest line in characters
    ///
    /// Served from cache unless a mutation happened since the last call.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.dirty.get() {
            let width = self.lines.iter().map(|l| char_len(l)).max().unwrap_or(0);
            trace!("recomputed width {width} over {} lines", self.lines.len());
            self.width.set(width);
            self.dirty.set(false);
        }
        self.width.get()
    }

    /// Whether the cached width is stale
    #[must_use]
    pub fn is_width_stale(&self) -> bool {
        self.dirty.get()
    }

    /// Mutable access to the raw lines; marks the width cache stale
    ///
    /// Callers must leave at least one line behind.
    pub(crate) fn edit(&mut self) -> &mut Vec<String> {
        self.dirty.set(true);
        &mut self.lines
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::from_lines(Vec::new())
    }
}

impl fmt::Display for LineStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        let store = LineStore::from_text("", LineEndingPolicy::Unified);
        assert_eq!(store.len(), 1);
        assert_eq!(store.line(0), "");
        assert!(!store.is_empty());
        assert_eq!(LineStore::default().len(), 1);
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let store = LineStore::from_text("abc\ndef", LineEndingPolicy::Unified);
        assert_eq!(store.line(1), "def");
        assert_eq!(store.line(2), "");
        assert_eq!(store.line(usize::MAX), "");
        assert_eq!(store.line_length(9), 0);
    }

    #[test]
    fn display_joins_with_newline() {
        let store = LineStore::from_text("a\r\nb\rc", LineEndingPolicy::Unified);
        assert_eq!(store.to_string(), "a\nb\nc");
    }

    #[test]
    fn width_is_cached_until_edit() {
        let mut store = LineStore::from_text("ab\nabcd\nx", LineEndingPolicy::Unified);
        assert!(store.is_width_stale());
        assert_eq!(store.width(), 4);
        assert!(!store.is_width_stale());

        store.edit().push("0123456789".to_owned());
        assert!(store.is_width_stale());
        assert_eq!(store.width(), 10);
    }

    #[test]
    fn width_counts_characters() {
        let store = LineStore::from_text("ééé\nab", LineEndingPolicy::Unified);
        assert_eq!(store.width(), 3);
    }

    #[test]
    fn end_position_points_past_last_line() {
        let store = LineStore::from_text("abc\nde", LineEndingPolicy::Unified);
        assert_eq!(store.end_position(), Position::new(1, 2));
    }
}
