//! Item operations.
//!
//! Insert, duplicate promotion, lookup, pinning and removal.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::History;
use crate::core::cipher::Cipher;
use crate::core::constants;
use crate::core::domain::{content_hash, AddOutcome, Advisory, Item, ItemKind};
use crate::error::{Result, StoreError};

impl History {
    /// Submit clipboard content.
    ///
    /// 1. Content over [`constants::MAX_ITEM_SIZE`] is rejected.
    /// 2. Content already stored with the same kind moves to the front with a
    ///    fresh timestamp and keeps its id.
    /// 3. With no free non-pinned slot, the insert is refused (`LimitFull`).
    /// 4. Otherwise a new unpinned item is inserted at the front.
    /// 5. If at most [`constants::WARN_THRESHOLD`] slots remain afterwards,
    ///    the outcome also carries `LimitWarning`.
    ///
    /// Every change is persisted before returning. The limit callback, if
    /// set, runs after the lock is released.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SizeExceeded` for oversized content, or any
    /// encrypt/write failure (the in-memory state is then left unchanged).
    pub fn add_item(&self, kind: ItemKind, content: &[u8]) -> Result<AddOutcome> {
        if content.len() > constants::MAX_ITEM_SIZE {
            return Err(StoreError::SizeExceeded {
                size: content.len(),
                max: constants::MAX_ITEM_SIZE,
            }
            .into());
        }

        let hash = content_hash(content);

        let (outcome, callback) = {
            let mut state = self.write();

            if let Some(pos) = state.items.iter().position(|i| i.matches(&hash, kind)) {
                let mut item = state.items.remove(pos);
                let previous = item.timestamp();
                item.touch();
                let id = item.id().to_string();
                state.items.insert(0, item);

                self.commit(&mut state, |s| {
                    let mut item = s.items.remove(0);
                    item.restore_timestamp(previous);
                    s.items.insert(pos, item);
                })?;

                debug!(id = %id, kind = %kind, from = pos, "duplicate promoted");
                return Ok(AddOutcome::promoted(id));
            }

            let unpinned = state.unpinned_count();
            if unpinned >= state.max_items {
                debug!(kind = %kind, max_items = state.max_items, "history full, insert refused");
                (AddOutcome::refused(), state.on_limit_warn.clone())
            } else {
                let envelope = self.cipher.encrypt(content)?;
                let id = state.next_id();
                state
                    .items
                    .insert(0, Item::new(id.clone(), kind, envelope, content.len(), hash));

                self.commit(&mut state, |s| {
                    s.items.remove(0);
                })?;

                let remaining = state.max_items - (unpinned + 1);
                let advisory = (remaining <= constants::WARN_THRESHOLD)
                    .then_some(Advisory::LimitWarning { remaining });

                debug!(id = %id, kind = %kind, size = content.len(), remaining, "item added");

                let callback = advisory.and(state.on_limit_warn.clone());
                (AddOutcome::inserted(id, advisory), callback)
            }
        };

        if let (Some(callback), Some(advisory)) = (callback, outcome.advisory) {
            trace!(remaining = advisory.remaining(), "limit callback");
            callback(advisory.remaining());
        }

        Ok(outcome)
    }

    /// Look up an item and decrypt its payload.
    ///
    /// # Returns
    ///
    /// A metadata snapshot and the plaintext, wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or a cipher error if
    /// the payload fails to authenticate.
    pub fn get_item(&self, id: &str) -> Result<(Item, Zeroizing<Vec<u8>>)> {
        let state = self.read();
        let item = state
            .items
            .iter()
            .find(|i| i.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let plaintext = self.open_payload(item)?;
        Ok((item.clone(), plaintext))
    }

    /// Flip an item's pinned flag.
    ///
    /// # Returns
    ///
    /// The new pinned state.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub fn toggle_pin(&self, id: &str) -> Result<bool> {
        let mut state = self.write();
        let pos = state
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let pinned = state.items[pos].toggle_pin();
        self.commit(&mut state, |s| {
            s.items[pos].toggle_pin();
        })?;

        debug!(id, pinned, "pin toggled");
        Ok(pinned)
    }

    /// Remove an item permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub fn delete_item(&self, id: &str) -> Result<()> {
        let mut state = self.write();
        let pos = state
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = state.items.remove(pos);
        self.commit(&mut state, |s| s.items.insert(pos, removed))?;

        debug!(id, "item deleted");
        Ok(())
    }

    /// Remove every item, pinned included.
    pub fn clear_all(&self) -> Result<()> {
        let mut state = self.write();
        let previous = std::mem::take(&mut state.items);
        let count = previous.len();
        self.commit(&mut state, |s| s.items = previous)?;

        debug!(removed = count, "history cleared");
        Ok(())
    }

    /// Metadata of every item in display order: pinned first, then the rest,
    /// each group in storage (recency) order.
    pub fn get_all_items(&self) -> Vec<Item> {
        let state = self.read();
        let (pinned, unpinned): (Vec<&Item>, Vec<&Item>) =
            state.items.iter().partition(|i| i.is_pinned());
        pinned.into_iter().chain(unpinned).cloned().collect()
    }

    /// Metadata of every item in storage order, newest first.
    pub fn storage_order(&self) -> Vec<Item> {
        self.read().items.clone()
    }
}
