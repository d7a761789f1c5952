//! Authenticated encryption of opaque byte payloads.
//!
//! Every payload is sealed into a self-contained, text-safe [`Envelope`]:
//! `base64(nonce ∥ ciphertext ∥ tag)`. The same envelope format protects a
//! single clipboard item and the whole serialized history file.
//!
//! ## Backends
//!
//! - **AES-256-GCM** ([`AesGcm`]): the only backend. 32-byte key, 12-byte
//!   random nonce per call, 16-byte tag.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `chacha.rs`)
//! 3. Re-export from this module

use crate::core::types::Envelope;
use crate::error::Result;

mod aes;

pub use aes::{AesGcm, KEY_LEN, NONCE_LEN, TAG_LEN};

/// Symmetric AEAD codec over byte buffers.
pub trait Cipher {
    /// Seal a plaintext into an envelope.
    ///
    /// Each call draws a fresh nonce, so sealing the same plaintext twice
    /// yields different envelopes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the AEAD refuses the input.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Envelope>;

    /// Open an envelope and return the authenticated plaintext.
    ///
    /// # Errors
    ///
    /// - `CipherError::Decode` if the envelope is not valid base64
    /// - `CipherError::Truncated` if it cannot hold a nonce and tag
    /// - `CipherError::DecryptionFailed` on any authentication failure
    fn decrypt(&self, envelope: &str) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt `plaintext` under a raw key.
///
/// Convenience wrapper around [`AesGcm`].
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` unless `key` is exactly
/// [`KEY_LEN`] bytes.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<Envelope> {
    AesGcm::new(key)?.encrypt(plaintext)
}

/// Decrypt an envelope under a raw key.
///
/// Convenience wrapper around [`AesGcm`].
///
/// # Errors
///
/// Returns `CipherError::InvalidKeyLength` for a wrongly sized key, or any
/// of the [`Cipher::decrypt`] errors.
pub fn decrypt(envelope: &str, key: &[u8]) -> Result<Vec<u8>> {
    AesGcm::new(key)?.decrypt(envelope)
}
