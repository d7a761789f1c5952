//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Item identifier (decimal nanosecond timestamp, unique per store).
pub type ItemId = String;

/// Lowercase hex SHA-256 of an item's plaintext.
///
/// Used for duplicate detection only.
pub type ContentHash = String;

/// A base64 envelope of nonce, ciphertext and tag.
pub type Envelope = String;
