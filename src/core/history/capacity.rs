//! Capacity limits, eviction and introspection.
//!
//! The cap counts non-pinned items only. Pinned items never block an insert
//! and are kept first when the cap shrinks.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{History, State};
use crate::core::constants;
use crate::core::domain::{Item, Status};
use crate::error::Result;

/// Clamp a requested cap into `[MIN_MAX_ITEMS, MAX_MAX_ITEMS]`.
pub fn clamp_max_items(requested: usize) -> usize {
    let clamped = requested.clamp(constants::MIN_MAX_ITEMS, constants::MAX_MAX_ITEMS);
    if clamped != requested {
        debug!(requested, clamped, "max items clamped");
    }
    clamped
}

/// Trim `items` to `max_items`, keeping pinned items first.
///
/// Pinned and non-pinned items are separated (each keeping its order), the
/// newest non-pinned items fill whatever capacity the pinned ones leave, and
/// the result is pinned-then-non-pinned. Everything else is dropped for good.
///
/// If pinned items alone exceed the cap, only the first `max_items` of them
/// survive. That only happens when the cap is lowered below the pinned count.
pub fn enforce_limit(items: Vec<Item>, max_items: usize) -> Vec<Item> {
    if items.len() <= max_items {
        return items;
    }

    let before = items.len();
    let (mut pinned, mut unpinned): (Vec<Item>, Vec<Item>) =
        items.into_iter().partition(|i| i.is_pinned());

    if pinned.len() > max_items {
        warn!(
            pinned = pinned.len(),
            max_items, "pinned items exceed the cap; dropping the oldest pinned items"
        );
        pinned.truncate(max_items);
    }

    unpinned.truncate(max_items - pinned.len());

    pinned.append(&mut unpinned);
    debug!(before, after = pinned.len(), "limit enforced");
    pinned
}

impl History {
    /// Apply a new cap, evicting if needed, and persist.
    ///
    /// Out-of-range values are clamped rather than rejected.
    ///
    /// # Returns
    ///
    /// The cap actually applied.
    pub fn set_max_items(&self, requested: usize) -> Result<usize> {
        let max_items = clamp_max_items(requested);
        let mut state = self.write();
        self.apply_max_items(&mut state, max_items)?;
        Ok(max_items)
    }

    /// Adopt a saved cap at startup. Never evicts and never writes.
    pub(crate) fn configure_max_items(&self, requested: usize) -> usize {
        let max_items = clamp_max_items(requested);
        self.write().max_items = max_items;
        max_items
    }

    fn apply_max_items(&self, state: &mut State, max_items: usize) -> Result<()> {
        let previous_max = state.max_items;
        let evicting = state.items.len() > max_items;
        // Eviction is rare; only then is a copy kept for rollback
        let previous = evicting.then(|| state.items.clone());

        state.max_items = max_items;
        if evicting {
            let items = std::mem::take(&mut state.items);
            state.items = enforce_limit(items, max_items);
        }

        self.commit(state, |s| {
            s.max_items = previous_max;
            if let Some(items) = previous {
                s.items = items;
            }
        })?;

        debug!(max_items, items = state.items.len(), "max items set");
        Ok(())
    }

    /// Current non-pinned cap.
    pub fn max_items(&self) -> usize {
        self.read().max_items
    }

    /// True if no non-pinned slot is free.
    pub fn is_full(&self) -> bool {
        let state = self.read();
        state.unpinned_count() >= state.max_items
    }

    /// True if at most [`constants::WARN_THRESHOLD`] non-pinned slots remain.
    pub fn is_near_limit(&self) -> bool {
        self.remaining_slots() <= constants::WARN_THRESHOLD
    }

    /// Free non-pinned slots.
    pub fn remaining_slots(&self) -> usize {
        let state = self.read();
        state.max_items.saturating_sub(state.unpinned_count())
    }

    /// Total stored items, pinned included.
    pub fn item_count(&self) -> usize {
        self.read().items.len()
    }

    pub fn pinned_count(&self) -> usize {
        self.read().items.iter().filter(|i| i.is_pinned()).count()
    }

    /// Consistent snapshot of all counters.
    pub fn status(&self) -> Status {
        let state = self.read();
        let unpinned = state.unpinned_count();
        Status {
            total: state.items.len(),
            pinned: state.items.len() - unpinned,
            max_items: state.max_items,
            remaining: state.max_items.saturating_sub(unpinned),
            location: self.backend.location(),
        }
    }

    /// Register the callback run when an insert leaves few or no slots.
    ///
    /// Called with the remaining count, or 0 when an insert was refused.
    pub fn set_on_limit_warn(&self, callback: impl Fn(usize) + Send + Sync + 'static) {
        self.write().on_limit_warn = Some(Arc::new(callback));
    }
}
