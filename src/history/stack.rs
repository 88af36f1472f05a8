//! Turn-scoped undo stack.

use serde::{Deserialize, Serialize};

use super::action::ReversibleAction;

/// LIFO log of the current turn's reversible actions.
///
/// Cleared when a turn starts, so undo never crosses a turn boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<ReversibleAction>,
}

impl HistoryStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed action.
    pub fn push(&mut self, action: ReversibleAction) {
        self.entries.push(action);
    }

    /// Remove and return the most recent action.
    pub fn pop(&mut self) -> Option<ReversibleAction> {
        self.entries.pop()
    }

    /// The most recent action.
    #[must_use]
    pub fn last(&self) -> Option<&ReversibleAction> {
        self.entries.last()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &ReversibleAction> {
        self.entries.iter()
    }
}
