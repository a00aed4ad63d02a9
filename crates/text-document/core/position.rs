//! Position and range types for document editing
//!
//! Positions address a character slot within a line by 0-indexed row and
//! column. Columns count Unicode scalar values, and a column equal to the
//! line's length denotes end-of-line.

use crate::core::errors::{DocumentError, Result};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row/column address into a document
///
/// Ordering is by row, then by column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// 0-indexed line number
    pub row: usize,
    /// 0-indexed character offset within the line
    pub column: usize,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Create a position at the start of the document
    #[must_use]
    pub const fn start() -> Self {
        Self { row: 0, column: 0 }
    }

    /// Check if this position is at the start of its line
    #[must_use]
    pub const fn is_line_start(&self) -> bool {
        self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A span between two positions
///
/// Well-formed iff `start` is not after `end`. [`Range::new`] enforces this;
/// the fields stay public so editing operations re-check it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Range {
    /// Create a new range
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] if `start` is after `end`
    pub fn new(start: Position, end: Position) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Create an empty range at position
    #[must_use]
    pub const fn empty(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Create a range covering whole rows `first..=last`, addressed by their
    /// first column
    ///
    /// The rows are swapped if given in reverse order.
    #[must_use]
    pub const fn rows(first: usize, last: usize) -> Self {
        let (first, last) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        Self {
            start: Position::new(first, 0),
            end: Position::new(last, 0),
        }
    }

    /// Check if range is empty (start == end)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if the range stays on one row
    #[must_use]
    pub const fn is_single_row(&self) -> bool {
        self.start.row == self.end.row
    }

    /// Check that `start` is not after `end`
    ///
    /// # Errors
    /// Returns [`DocumentError::InvalidRange`] for a reversed range
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(DocumentError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Check if range contains a position
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
