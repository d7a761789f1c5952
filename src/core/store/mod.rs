//! Persistence gateway.
//!
//! Whole-blob storage for the encrypted history envelope. The gateway never
//! sees plaintext: it reads and writes the text envelope produced by the
//! cipher codec.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Persistence` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Storage for the single history envelope.
pub trait Persistence: Send + Sync {
    /// Read the stored envelope.
    ///
    /// # Returns
    ///
    /// `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the blob exists but cannot be read.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored envelope.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` on any I/O failure.
    fn write(&self, envelope: &str) -> Result<()>;

    /// Human-readable location, for status output and logs.
    fn location(&self) -> String;
}
