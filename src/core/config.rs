//! Settings file management.
//!
//! Handles reading and writing `config.toml` in the data directory. A missing
//! file means defaults; out-of-range values are clamped on load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::history::clamp_max_items;
use crate::core::paths;
use crate::error::{ConfigError, Result};

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cap on non-pinned items
    pub max_items: usize,
    /// Clipboard poll interval for `watch`
    pub poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_items: constants::DEFAULT_MAX_ITEMS,
            poll_interval_ms: constants::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Load settings from the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved or the file
    /// exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(paths::settings_path()?)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading settings");

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadFile(e).into()),
        };

        let mut settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        settings.max_items = clamp_max_items(settings.max_items);
        if settings.poll_interval_ms == 0 {
            settings.poll_interval_ms = constants::DEFAULT_POLL_INTERVAL_MS;
        }

        debug!(
            max_items = settings.max_items,
            poll_interval_ms = settings.poll_interval_ms,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Save settings to the data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(paths::settings_path()?)
    }

    /// Save settings to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "saving settings");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::WriteFile)?;
        Ok(())
    }
}
