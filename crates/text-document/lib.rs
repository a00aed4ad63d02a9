//! Line-oriented text buffer for editor front-ends
//!
//! `text-document` stores document content as discrete lines and exposes
//! row/column addressing, structural edits and change notification to the
//! rendering layer that sits on top of it.
//!
//! # Features
//!
//! - **Line storage**: every line is a `String` without terminators; a document
//!   always has at least one line
//! - **Structural edits**: insert, remove, replace, indent and outdent, each
//!   followed by exactly one change notification
//! - **Lazy width**: the longest-line width is cached and recomputed on demand
//! - **Bracket matching**: depth-counted search across line boundaries
//!
//! # Example
//!
//! ```
//! use text_document::{ChangeEvent, LastRow, Position, TextDocument};
//!
//! let mut doc = TextDocument::new("abc\ndef");
//! doc.subscribe(|event: &ChangeEvent, _lines: &text_document::LineStore| {
//!     assert_eq!(event.last_row, LastRow::Bounded(0));
//! });
//!
//! let end = doc.insert(Position::new(0, 3), "X").unwrap();
//! assert_eq!(end, Position::new(0, 4));
//! assert_eq!(doc.to_string(), "abcX\ndef");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]

pub mod core;
pub mod events;
pub mod utils;

pub use self::core::{
    find_matching_bracket, Bracket, DocumentConfig, DocumentError, LineEndingPolicy, LineStore,
    Position, Range, Result, TextDocument,
};
pub use self::events::{ChangeEvent, ChangeListener, ChangeNotifier, LastRow, NotifierStats};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
