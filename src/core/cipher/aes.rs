//! AES-256-GCM backend.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::trace;

use super::Cipher;
use crate::core::types::Envelope;
use crate::error::{CipherError, Result};

/// Required key length in bytes.
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes, prepended to every ciphertext.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes, appended by GCM.
pub const TAG_LEN: usize = 16;

/// AES-256-GCM codec bound to one key.
#[derive(Clone)]
pub struct AesGcm {
    inner: Aes256Gcm,
}

impl AesGcm {
    /// Build a codec from a raw key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyLength` unless `key` is exactly
    /// [`KEY_LEN`] bytes; shorter and longer keys are both refused.
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = Aes256Gcm::new_from_slice(key).map_err(|_| CipherError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        })?;
        Ok(Self { inner })
    }
}

impl std::fmt::Debug for AesGcm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcm").finish_non_exhaustive()
    }
}

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Envelope> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .inner
            .encrypt(&nonce, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        trace!(sealed_len = sealed.len(), "encrypted");

        Ok(STANDARD.encode(sealed))
    }

    fn decrypt(&self, envelope: &str) -> Result<Vec<u8>> {
        trace!(envelope_len = envelope.len(), "decrypting");

        let data = STANDARD
            .decode(envelope.trim())
            .map_err(|e| CipherError::Decode(e.to_string()))?;

        let min = NONCE_LEN + TAG_LEN;
        if data.len() < min {
            return Err(CipherError::Truncated {
                len: data.len(),
                min,
            }
            .into());
        }

        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        let plaintext = self
            .inner
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CipherError::DecryptionFailed)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");

        Ok(plaintext)
    }
}
