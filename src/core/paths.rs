//! Data directory resolution.
//!
//! The store never computes its own location; callers resolve it here and
//! hand the path to [`crate::core::store::Filesystem`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Directory holding the history and settings files.
///
/// `$PANO_HOME` if set, otherwise `<platform data dir>/pano`. The directory
/// is created (mode 0700 on Unix) if missing.
///
/// # Errors
///
/// Returns `StoreError::NoDataDir` if no platform data dir exists, or
/// `StoreError::WriteFailed` if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os(constants::HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::data_dir()
            .ok_or(StoreError::NoDataDir)?
            .join(constants::APP_DIR),
    };
    ensure_dir(&dir)?;
    debug!(path = %dir.display(), "data dir resolved");
    Ok(dir)
}

/// Full path of the history database.
pub fn database_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(constants::DATABASE_FILE))
}

/// Full path of the settings file.
pub fn settings_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(constants::SETTINGS_FILE))
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(StoreError::WriteFailed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
            .map_err(StoreError::WriteFailed)?;
    }

    Ok(())
}
