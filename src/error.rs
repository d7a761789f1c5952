//! Error types.
//!
//! One enum per layer, folded into [`Error`] so every public operation can
//! return the crate-wide [`Result`].

use thiserror::Error;

use crate::core::types::ItemId;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Cipher codec failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: authentication tag mismatch (wrong key or tampered data)")]
    DecryptionFailed,

    #[error("malformed envelope encoding: {0}")]
    Decode(String),

    #[error("envelope too short: {len} bytes, need at least {min}")]
    Truncated { len: usize, min: usize },
}

/// Machine identity and key derivation failures.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("machine identity unavailable: {0}")]
    MachineIdUnavailable(String),
}

/// Item store and persistence failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("item size ({size} bytes) exceeds maximum ({max} bytes)")]
    SizeExceeded { size: usize, max: usize },

    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse history: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to read history: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write history: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("unable to determine a data directory (set PANO_HOME)")]
    NoDataDir,
}

/// Settings file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write settings: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Clipboard monitor setup failures.
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("no clipboard reader found on PATH")]
    NoSource,

    #[error("invalid clipboard command: {0:?}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True when the error came from authenticating or decoding ciphertext.
    pub fn is_decryption(&self) -> bool {
        matches!(
            self,
            Error::Cipher(
                CipherError::DecryptionFailed
                    | CipherError::Decode(_)
                    | CipherError::Truncated { .. }
            )
        )
    }
}
