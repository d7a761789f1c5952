//! Capacity snapshot for status displays.

use std::fmt;

/// Point-in-time view of the history's size and limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Total stored items, pinned included
    pub total: usize,
    /// Pinned items
    pub pinned: usize,
    /// Non-pinned cap
    pub max_items: usize,
    /// Free non-pinned slots
    pub remaining: usize,
    /// Where the history is persisted
    pub location: String,
}

impl Status {
    pub fn is_full(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} items - {} pinned",
            self.total, self.max_items, self.pinned
        )
    }
}
