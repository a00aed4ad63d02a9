//! Error types for the text-document crate
//!
//! Provides the `DocumentError` enum used by every fallible document
//! operation. Errors carry the offending coordinates so callers can report
//! them without re-deriving context. Lenient reads and the outdent sentinel
//! never produce errors.

use crate::core::position::Position;
use thiserror::Error;

/// Main error type for document operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Column past the end of its line at an edit site
    #[error("Invalid position: row {row}, column {column} (line length: {line_length})")]
    InvalidPosition {
        row: usize,
        column: usize,
        line_length: usize,
    },

    /// Row that does not exist in the document
    #[error("Position out of bounds: row {row} (document has {line_count} lines)")]
    PositionOutOfBounds { row: usize, line_count: usize },

    /// Range whose start is after its end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: Position, end: Position },
}

impl DocumentError {
    /// Check if this is a position-related error
    #[must_use]
    pub const fn is_position_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPosition { .. } | Self::PositionOutOfBounds { .. }
        )
    }

    /// Check if this is a range-ordering error
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}

/// Result type alias for document operations
pub type Result<T> = core::result::Result<T, DocumentError>;
