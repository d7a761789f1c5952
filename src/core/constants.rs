//! Constants used throughout pano.
//!
//! Centralizes file names, limits, and environment variable names.

/// History database file name inside the data directory.
pub const DATABASE_FILE: &str = "clipboard.db";

/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Data directory name under the platform data dir.
pub const APP_DIR: &str = "pano";

/// Application id mixed into the machine key derivation.
pub const APP_ID: &str = "pano-clipboard";

/// Default cap on non-pinned items.
pub const DEFAULT_MAX_ITEMS: usize = 100;

/// Lowest accepted cap; smaller values are clamped up.
pub const MIN_MAX_ITEMS: usize = 10;

/// Highest accepted cap; larger values are clamped down.
pub const MAX_MAX_ITEMS: usize = 500;

/// Largest plaintext accepted by `add_item` (20 MiB).
pub const MAX_ITEM_SIZE: usize = 20 * 1024 * 1024;

/// Remaining-slot count at or below which inserts carry a warning.
pub const WARN_THRESHOLD: usize = 10;

/// Default monitor poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// Overrides the data directory.
pub const HOME_ENV: &str = "PANO_HOME";

/// Overrides the machine identity used for key derivation.
pub const MACHINE_ID_ENV: &str = "PANO_MACHINE_ID";

/// Log filter for the binary.
pub const LOG_ENV: &str = "PANO_LOG";
