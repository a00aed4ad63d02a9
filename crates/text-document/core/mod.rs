//! Core types and structures for the text document
//!
//! This module contains the fundamental building blocks of the buffer:
//! - `TextDocument`: the editable document owning lines and listeners
//! - `LineStore`: line storage with the lazily cached width
//! - Position and range types for row/column addressing
//! - Error and configuration types shared by every operation

pub mod brackets;
pub mod config;
pub mod document;
pub mod errors;
pub mod lines;
pub mod position;

// Re-export commonly used types
pub use brackets::{find_matching_bracket, Bracket};
pub use config::{DocumentConfig, LineEndingPolicy};
pub use document::TextDocument;
pub use errors::{DocumentError, Result};
pub use lines::LineStore;
pub use position::{Position, Range};
