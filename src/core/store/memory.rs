//! In-memory persistence.
//!
//! Keeps the envelope in process memory. Used by tests and by callers that
//! want an ephemeral history.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::Persistence;
use crate::error::{Result, StoreError};

/// Shared in-memory blob. Clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    slot: Arc<Mutex<Option<String>>>,
    writes: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current blob, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the blob directly, bypassing the store.
    pub fn replace(&self, contents: impl Into<String>) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(contents.into());
    }

    /// Make subsequent writes fail until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Persistence for Memory {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, envelope: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed(io::Error::other("memory store set to fail")).into());
        }
        self.replace(envelope);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
