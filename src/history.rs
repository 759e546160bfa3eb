//! Action history (undo stack).
//!
//! The history holds free-text descriptions only. Popping an entry removes
//! the text and nothing else: the registry, roster and queue keep whatever
//! state the recorded action left behind.

use crate::types::Action;

/// LIFO log of completed-action descriptions
#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    entries: Vec<String>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Push a description of a completed action
    pub fn record(&mut self, description: impl Into<String>) {
        self.entries.push(description.into());
    }

    /// Push the rendered text of a typed action
    pub fn record_action(&mut self, action: Action) {
        self.record(action.to_string());
    }

    /// Pop the most recent description
    ///
    /// # Returns
    ///
    /// `None` when the history is empty
    pub fn undo_last(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Most recent description, if any
    pub fn peek(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
