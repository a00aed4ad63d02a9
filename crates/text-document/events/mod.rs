//! Change notification for document edits
//!
//! Provides `ChangeEvent` describing the rows touched by an edit and
//! `ChangeNotifier` for distributing events to listeners. Dispatch is
//! synchronous and runs in registration order, after the triggering edit has
//! fully applied.

use crate::core::LineStore;
use core::fmt;
use core::ops::RangeInclusive;
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Last row affected by a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LastRow {
    /// The change ends at this row (inclusive)
    Bounded(usize),

    /// The change runs through the end of the document as it exists when the
    /// event fires
    ToEndOfDocument,
}

/// Rows affected by a single edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChangeEvent {
    /// First affected row
    pub first_row: usize,
    /// Last affected row, or the end-of-document marker
    pub last_row: LastRow,
}

impl ChangeEvent {
    /// Change covering `first..=last`
    #[must_use]
    pub const fn bounded(first_row: usize, last_row: usize) -> Self {
        Self {
            first_row,
            last_row: LastRow::Bounded(last_row),
        }
    }

    /// Change from `first_row` through the end of the document
    #[must_use]
    pub const fn to_end(first_row: usize) -> Self {
        Self {
            first_row,
            last_row: LastRow::ToEndOfDocument,
        }
    }

    /// Whether the change names an explicit last row
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        matches!(self.last_row, LastRow::Bounded(_))
    }

    /// Concrete affected rows for a document of `line_count` lines
    #[must_use]
    pub fn resolve(&self, line_count: usize) -> RangeInclusive<usize> {
        let last = match self.last_row {
            LastRow::Bounded(row) => row,
            LastRow::ToEndOfDocument => line_count.saturating_sub(1),
        };
        self.first_row..=last
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_row {
            LastRow::Bounded(last) => write!(f, "rows {}..={last}", self.first_row),
            LastRow::ToEndOfDocument => write!(f, "rows {}..", self.first_row),
        }
    }
}

/// Observer of document changes
///
/// Receives the event together with a read-only view of the lines after the
/// edit. Any `FnMut(&ChangeEvent, &LineStore)` closure is a listener.
pub trait ChangeListener {
    /// Handle a change event
    fn on_change(&mut self, event: &ChangeEvent, lines: &LineStore);
}

impl<F> ChangeListener for F
where
    F: FnMut(&ChangeEvent, &LineStore),
{
    fn on_change(&mut self, event: &ChangeEvent, lines: &LineStore) {
        self(event, lines);
    }
}

/// Statistics about event dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifierStats {
    /// Total number of events dispatched
    pub events_dispatched: usize,
    /// Number of listeners currently registered
    pub listeners_count: usize,
}

/// Ordered registry of change listeners
#[derive(Default)]
pub struct ChangeNotifier {
    /// Listeners in registration order
    listeners: Vec<Box<dyn ChangeListener>>,

    /// Number of events fired so far
    events_dispatched: usize,
}

impl ChangeNotifier {
    /// Create an empty notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener; duplicates are not detected
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ChangeListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Fire `event` to every listener in registration order
    pub fn notify(&mut self, event: ChangeEvent, lines: &LineStore) {
        self.events_dispatched += 1;
        trace!("dispatching {event} to {} listeners", self.listeners.len());
        for listener in &mut self.listeners {
            listener.on_change(&event, lines);
        }
    }

    /// Number of registered listeners
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch statistics
    #[must_use]
    pub fn stats(&self) -> NotifierStats {
        NotifierStats {
            events_dispatched: self.events_dispatched,
            listeners_count: self.listeners.len(),
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .field("events_dispatched", &self.events_dispatched)
            .finish()
    }
}
