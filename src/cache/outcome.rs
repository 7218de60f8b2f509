//! Write Outcome Module
//!
//! Result values for `add`, `update` and `upsert`. A rejected write is an
//! expected outcome, not an error.

use crate::cache::Entry;

// == Write Outcome ==
/// Outcome of a write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<V> {
    /// The entry was written
    Stored {
        /// The key written to
        key: String,
        /// The entry as stored, including fresh timestamps
        entry: Entry<V>,
    },
    /// `add` found the key already present; nothing changed
    AlreadyExists,
    /// `update` found no such key; nothing changed
    NotFound,
}

impl<V> WriteOutcome<V> {
    /// Creates a Stored outcome
    pub fn stored(key: impl Into<String>, entry: Entry<V>) -> Self {
        Self::Stored {
            key: key.into(),
            entry,
        }
    }

    /// Returns true if the write was applied.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Stored { .. })
    }

    /// Returns the stored entry, if the write was applied.
    pub fn entry(&self) -> Option<&Entry<V>> {
        match self {
            Self::Stored { entry, .. } => Some(entry),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the stored entry, if any.
    pub fn into_entry(self) -> Option<Entry<V>> {
        match self {
            Self::Stored { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
