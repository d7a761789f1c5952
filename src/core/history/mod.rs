//! The primary interface for pano operations.
//!
//! `History` owns the ordered item collection and is the only code that
//! mutates it. One instance is built per process and shared (`Arc<History>`)
//! between the clipboard monitor and the control surface.
//!
//! ## Locking
//!
//! A single `RwLock` guards all state. Queries take the read lock. Every
//! mutation holds the write lock for its whole duration, including the
//! synchronous full-collection persist, so readers never see a half-applied
//! change and saves never interleave. If a persist fails the mutation is
//! undone before the lock is released.

mod capacity;
mod items;
mod lifecycle;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::{AesGcm, Cipher};
use crate::core::constants;
use crate::core::domain::Item;
use crate::core::keys::MachineKey;
use crate::core::store::Persistence;
use crate::core::types::ItemId;
use crate::error::{Result, StoreError};

pub use capacity::{clamp_max_items, enforce_limit};

/// Callback invoked with the remaining slot count (0 when full).
pub type LimitCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Everything behind the lock.
pub(super) struct State {
    /// Storage order, newest first
    items: Vec<Item>,
    max_items: usize,
    last_id: i64,
    on_limit_warn: Option<LimitCallback>,
}

/// Encrypted, capacity-bounded clipboard history.
pub struct History {
    state: RwLock<State>,
    cipher: AesGcm,
    backend: Box<dyn Persistence>,
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("History")
            .field("items", &state.items.len())
            .field("max_items", &state.max_items)
            .field("cipher", &self.cipher.name())
            .field("backend", &self.backend.location())
            .finish()
    }
}

impl History {
    /// Open a history persisted in `backend`, encrypted under `key`.
    ///
    /// A missing blob yields an empty history.
    ///
    /// # Errors
    ///
    /// Any read, decrypt or parse failure is returned. The history is never
    /// silently reset to empty, since that would hide data loss.
    pub fn open(key: &MachineKey, backend: impl Persistence + 'static) -> Result<Self> {
        Self::open_with_key(key.as_bytes(), backend)
    }

    /// Like [`History::open`] with a raw 32-byte key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyLength` for a wrongly sized key, plus
    /// everything [`History::open`] returns.
    pub fn open_with_key(key: &[u8], backend: impl Persistence + 'static) -> Result<Self> {
        let history = Self {
            state: RwLock::new(State {
                items: Vec::new(),
                max_items: constants::DEFAULT_MAX_ITEMS,
                last_id: 0,
                on_limit_warn: None,
            }),
            cipher: AesGcm::new(key)?,
            backend: Box::new(backend),
        };
        history.load()?;
        Ok(history)
    }

    /// Where the history is persisted.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    // The state is only ever replaced whole, so a panic elsewhere cannot
    // leave it torn; recover the guard instead of propagating poison.
    pub(super) fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize, encrypt and write the whole collection.
    ///
    /// Caller must hold the write lock.
    pub(super) fn persist(&self, state: &State) -> Result<()> {
        let json = Zeroizing::new(serde_json::to_vec(&state.items).map_err(StoreError::Serialize)?);
        let envelope = self.cipher.encrypt(&json)?;
        self.backend.write(&envelope)?;
        debug!(items = state.items.len(), "history persisted");
        Ok(())
    }

    /// Persist, running `undo` on the in-memory state if the write fails.
    pub(super) fn commit(&self, state: &mut State, undo: impl FnOnce(&mut State)) -> Result<()> {
        if let Err(e) = self.persist(state) {
            undo(state);
            return Err(e);
        }
        Ok(())
    }

    /// Decrypt an item's payload.
    pub(super) fn open_payload(&self, item: &Item) -> Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(self.cipher.decrypt(item.envelope())?))
    }
}

impl State {
    /// Next item id: current time in nanoseconds, strictly above the last one.
    fn next_id(&mut self) -> ItemId {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id.to_string()
    }

    fn unpinned_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_pinned()).count()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    /// Replace the collection, keeping future ids above the loaded ones.
    fn replace_items(&mut self, items: Vec<Item>) {
        self.last_id = items
            .iter()
            .filter_map(|i| i.id().parse::<i64>().ok())
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        self.items = items;
    }
}
