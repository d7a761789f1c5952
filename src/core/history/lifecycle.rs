//! Loading, saving and opening the default on-disk history.

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::History;
use crate::core::cipher::Cipher;
use crate::core::config::Settings;
use crate::core::domain::Item;
use crate::core::keys::MachineKey;
use crate::core::paths;
use crate::core::store::Filesystem;
use crate::error::{Result, StoreError};

impl History {
    /// Replace the in-memory collection with the persisted one.
    ///
    /// A missing blob leaves the history empty.
    ///
    /// # Errors
    ///
    /// Returns the read, decrypt or parse failure. The in-memory state is
    /// untouched in that case.
    pub fn load(&self) -> Result<()> {
        let mut state = self.write();

        let Some(envelope) = self.backend.read()? else {
            debug!(location = %self.backend.location(), "no stored history");
            state.replace_items(Vec::new());
            return Ok(());
        };

        let json = Zeroizing::new(self.cipher.decrypt(&envelope)?);
        let items: Vec<Item> = serde_json::from_slice(&json).map_err(StoreError::Parse)?;

        debug!(items = items.len(), "history loaded");
        state.replace_items(items);
        Ok(())
    }

    /// Persist the current collection.
    ///
    /// Mutations already persist themselves; this is for explicit flushes.
    pub fn save(&self) -> Result<()> {
        let state = self.write();
        self.persist(&state)
    }

    /// Open the history in the data directory with the host's machine key,
    /// applying the saved settings.
    ///
    /// # Errors
    ///
    /// Fails if the data directory, machine identity or settings cannot be
    /// resolved, or if an existing history cannot be decrypted.
    pub fn open_default() -> Result<Self> {
        let settings = Settings::load()?;
        Self::open_with_settings(&settings)
    }

    /// Like [`History::open_default`] with already-loaded settings.
    pub fn open_with_settings(settings: &Settings) -> Result<Self> {
        let key = MachineKey::for_host()?;
        let backend = Filesystem::new(paths::database_path()?);
        let history = Self::open(&key, backend)?;
        history.configure_max_items(settings.max_items);

        info!(
            items = history.item_count(),
            max_items = history.max_items(),
            key = %key.fingerprint(),
            cipher = history.cipher.name(),
            "history opened"
        );
        Ok(history)
    }
}
