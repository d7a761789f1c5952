//! Filesystem persistence.
//!
//! Stores the envelope in a single file, rewritten in place on every save.
//! The file is restricted to the owning account (0600 on Unix).

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Persistence;
use crate::error::{Result, StoreError};

/// Validate file permissions (Unix only).
#[cfg(unix)]
fn has_mode(path: &Path, expected_mode: u32) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o777 == expected_mode)
        .unwrap_or(false)
}

/// File-backed history storage.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    /// Store at an explicit path, typically [`crate::core::paths::database_path`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_for_write(&self) -> std::io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options.open(&self.path)
    }
}

impl Persistence for Filesystem {
    fn read(&self) -> Result<Option<String>> {
        debug!(path = %self.path.display(), "reading history");

        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                #[cfg(unix)]
                {
                    if !has_mode(&self.path, 0o600) {
                        warn!(path = %self.path.display(), "history file is readable by other accounts");
                    }
                }
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e).into()),
        }
    }

    fn write(&self, envelope: &str) -> Result<()> {
        debug!(path = %self.path.display(), bytes = envelope.len(), "writing history");

        let mut file = self.open_for_write().map_err(StoreError::WriteFailed)?;
        file.write_all(envelope.as_bytes())
            .map_err(StoreError::WriteFailed)?;
        file.sync_all().map_err(StoreError::WriteFailed)?;

        // `mode` only applies on creation; tighten files that predate us
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if !has_mode(&self.path, 0o600) {
                fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                    .map_err(StoreError::WriteFailed)?;
            }
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
