//! Editable text document
//!
//! `TextDocument` owns a [`LineStore`] and a [`ChangeNotifier`]. Every public
//! edit validates its arguments up front, applies the whole mutation, and only
//! then fires exactly one change event. A failed edit leaves the lines
//! untouched and fires nothing.

use crate::core::brackets;
use crate::core::config::DocumentConfig;
use crate::core::errors::{DocumentError, Result};
use crate::core::lines::LineStore;
use crate::core::position::{Position, Range};
use crate::events::{ChangeEvent, ChangeListener, ChangeNotifier, NotifierStats};
use crate::utils::{byte_offset, char_len, char_slice};
use core::fmt;
use log::debug;

/// Line-oriented document with change notification
///
/// # Example
///
/// ```
/// use text_document::{Position, Range, TextDocument};
///
/// let mut doc = TextDocument::new("abcdef");
/// let range = Range::new(Position::new(0, 0), Position::new(0, 3)).unwrap();
/// assert_eq!(doc.remove(range).unwrap(), Position::new(0, 0));
/// assert_eq!(doc.line(0), "def");
/// ```
#[derive(Debug)]
pub struct TextDocument {
    /// Document content
    lines: LineStore,

    /// Listeners fired after each edit
    notifier: ChangeNotifier,

    /// Splitting and logging settings
    config: DocumentConfig,
}

impl TextDocument {
    /// Create a document from raw text using the default configuration
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_config(text, DocumentConfig::default())
    }

    /// Create a document from raw text with an explicit configuration
    #[must_use]
    pub fn with_config(text: &str, config: DocumentConfig) -> Self {
        Self {
            lines: LineStore::from_text(text, config.line_endings),
            notifier: ChangeNotifier::new(),
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Read-only view of the lines
    #[must_use]
    pub const fn lines(&self) -> &LineStore {
        &self.lines
    }

    /// Line content, or `""` for rows outside the document
    #[must_use]
    pub fn line(&self, row: usize) -> &str {
        self.lines.line(row)
    }

    /// Number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in characters, 0 for rows outside the document
    #[must_use]
    pub fn line_length(&self, row: usize) -> usize {
        self.lines.line_length(row)
    }

    /// Length of the longest line, recomputed only after edits
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.width()
    }

    /// Position just past the last character of the document
    #[must_use]
    pub fn end_position(&self) -> Position {
        self.lines.end_position()
    }

    /// Register a listener fired after every edit
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ChangeListener + 'static,
    {
        self.notifier.subscribe(listener);
    }

    /// Dispatch statistics of the change notifier
    #[must_use]
    pub fn notifier_stats(&self) -> NotifierStats {
        self.notifier.stats()
    }

    /// Text between two positions, rows joined with `'\n'`
    ///
    /// Columns are clamped to their line's length.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] for a reversed range and
    /// [`DocumentError::PositionOutOfBounds`] if either row is missing
    pub fn text_range(&self, range: Range) -> Result<String> {
        range.validate()?;
        self.check_row(range.start.row)?;
        self.check_row(range.end.row)?;

        let (start, end) = (range.start, range.end);
        if start.row == end.row {
            return Ok(char_slice(self.line(start.row), start.column, end.column).to_owned());
        }

        let mut parts = Vec::with_capacity(end.row - start.row + 1);
        parts.push(char_slice(self.line(start.row), start.column, usize::MAX));
        parts.extend((start.row + 1..end.row).map(|row| self.line(row)));
        parts.push(char_slice(self.line(end.row), 0, end.column));
        Ok(parts.join("\n"))
    }

    /// Insert `text` at `position`, returning the position after it
    ///
    /// # Errors
    /// Returns [`DocumentError::PositionOutOfBounds`] for a missing row and
    /// [`DocumentError::InvalidPosition`] for a column past the line's end
    pub fn insert(&mut self, position: Position, text: &str) -> Result<Position> {
        let end = self.insert_lines(position, text)?;
        let event = if end.row == position.row {
            ChangeEvent::bounded(position.row, position.row)
        } else {
            ChangeEvent::to_end(position.row)
        };
        self.fire("insert", event);
        Ok(end)
    }

    /// Remove the text in `range`, returning `range.start`
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] for a reversed range, or a
    /// position error if either endpoint is outside the document
    pub fn remove(&mut self, range: Range) -> Result<Position> {
        self.remove_lines(range)?;
        let event = if range.is_single_row() {
            ChangeEvent::bounded(range.start.row, range.start.row)
        } else {
            ChangeEvent::to_end(range.start.row)
        };
        self.fire("remove", event);
        Ok(range.start)
    }

    /// Replace the text in `range` with `text`, returning the end of the new
    /// text
    ///
    /// Fires a single event. It is bounded to the last removed row when that
    /// row is also the row the new text ends on; a range ending at column 0
    /// counts the row before its end as the last removed row.
    ///
    /// # Errors
    /// Same as [`TextDocument::remove`]
    pub fn replace(&mut self, range: Range, text: &str) -> Result<Position> {
        self.remove_lines(range)?;
        let end = if text.is_empty() {
            range.start
        } else {
            self.insert_lines(range.start, text)?
        };

        let last_removed = if range.end.column == 0 {
            range.end.row.checked_sub(1)
        } else {
            Some(range.end.row)
        };
        let event = match last_removed {
            Some(row) if row == end.row => ChangeEvent::bounded(range.start.row, row),
            _ => ChangeEvent::to_end(range.start.row),
        };
        self.fire("replace", event);
        Ok(end)
    }

    /// Prepend `indent` to every row from `range.start.row` to
    /// `range.end.row` inclusive
    ///
    /// Rows past the end of the document are created as empty lines first.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] for a reversed range
    pub fn indent_rows(&mut self, range: Range, indent: &str) -> Result<()> {
        range.validate()?;
        let (first, last) = (range.start.row, range.end.row);

        let lines = self.lines.edit();
        if lines.len() <= last {
            lines.resize(last + 1, String::new());
        }
        for line in &mut lines[first..=last] {
            line.insert_str(0, indent);
        }

        self.fire("indent", ChangeEvent::bounded(first, last));
        Ok(())
    }

    /// Strip `indent` from every row in the range, all or nothing
    ///
    /// Returns the number of characters removed per row, or `0` without
    /// touching the document if any row does not start with `indent`.
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] for a reversed range
    pub fn outdent_rows(&mut self, range: Range, indent: &str) -> Result<usize> {
        range.validate()?;
        let (first, last) = (range.start.row, range.end.row);

        if let Some(row) = (first..=last).find(|&row| !self.line(row).starts_with(indent)) {
            if self.config.enable_logging {
                debug!("outdent of rows {first}..={last} aborted: row {row} lacks indent");
            }
            return Ok(0);
        }

        for line in self.lines.edit().iter_mut().take(last + 1).skip(first) {
            line.replace_range(..indent.len(), "");
        }

        self.fire("outdent", ChangeEvent::bounded(first, last));
        Ok(char_len(indent))
    }

    /// Find the bracket matching the one just before `position`
    #[must_use]
    pub fn find_matching_bracket(&self, position: Position) -> Option<Position> {
        brackets::find_matching_bracket(&self.lines, position)
    }

    /// Splice `text` into the lines without notifying
    fn insert_lines(&mut self, position: Position, text: &str) -> Result<Position> {
        let offset = self.byte_position(position)?;
        let policy = self.config.line_endings;
        let row = position.row;
        let lines = self.lines.edit();

        if policy.is_single_terminator(text) {
            let tail = lines[row].split_off(offset);
            lines.insert(row + 1, tail);
            return Ok(Position::new(row + 1, 0));
        }

        let mut segments = policy.split(text);
        if segments.len() == 1 {
            lines[row].insert_str(offset, text);
            return Ok(Position::new(row, position.column + char_len(text)));
        }

        let inserted = segments.len();
        let mut last = segments.pop().unwrap_or_default();
        let end_column = char_len(&last);

        let mut interior = segments.into_iter();
        let head = interior.next().unwrap_or_default();
        let tail = lines[row].split_off(offset);
        lines[row].push_str(&head);
        last.push_str(&tail);

        lines.splice(row + 1..row + 1, interior.chain(core::iter::once(last)));
        Ok(Position::new(row + inserted - 1, end_column))
    }

    /// Join the start row's prefix with the end row's suffix without
    /// notifying
    fn remove_lines(&mut self, range: Range) -> Result<()> {
        range.validate()?;
        let start = self.byte_position(range.start)?;
        let end = self.byte_position(range.end)?;
        let (first, last) = (range.start.row, range.end.row);

        let lines = self.lines.edit();
        let suffix = lines[last].split_off(end);
        lines[first].truncate(start);
        lines[first].push_str(&suffix);
        lines.drain(first + 1..=last);
        Ok(())
    }

    /// Byte offset of a position that must exist in the document
    fn byte_position(&self, position: Position) -> Result<usize> {
        self.check_row(position.row)?;
        let line = self.line(position.row);
        byte_offset(line, position.column).ok_or_else(|| DocumentError::InvalidPosition {
            row: position.row,
            column: position.column,
            line_length: char_len(line),
        })
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.lines.len() {
            return Err(DocumentError::PositionOutOfBounds {
                row,
                line_count: self.lines.len(),
            });
        }
        Ok(())
    }

    fn fire(&mut self, operation: &str, event: ChangeEvent) {
        if self.config.enable_logging {
            debug!(
                "{operation}: {event} ({} lines after edit)",
                self.lines.len()
            );
        }
        self.notifier.notify(event, &self.lines);
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.lines, f)
    }
}
