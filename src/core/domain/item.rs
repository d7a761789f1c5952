//! Clipboard item type.
//!
//! One stored entry: an encrypted payload plus the metadata needed to order,
//! deduplicate and display it. Plaintext never lives on an `Item`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::types::{ContentHash, Envelope, ItemId};

/// What an item's payload holds. The store never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Text,
    Image,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            other => Err(format!("unknown item kind '{}': expected text or image", other)),
        }
    }
}

/// A stored clipboard entry.
///
/// Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    #[serde(rename = "type")]
    kind: ItemKind,
    /// Envelope of the plaintext
    content: Envelope,
    timestamp: DateTime<Utc>,
    pinned: bool,
    /// Plaintext length in bytes
    size: usize,
    hash: ContentHash,
}

impl Item {
    /// Create a new unpinned item from an already-encrypted payload.
    pub fn new(
        id: ItemId,
        kind: ItemKind,
        content: Envelope,
        size: usize,
        hash: ContentHash,
    ) -> Self {
        Self {
            id,
            kind,
            content,
            timestamp: Utc::now(),
            pinned: false,
            size,
            hash,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Encrypted payload.
    pub fn envelope(&self) -> &str {
        &self.content
    }

    /// Creation time, or the last time identical content was re-submitted.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Plaintext size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// True if this item holds `hash` content of `kind`.
    pub(crate) fn matches(&self, hash: &str, kind: ItemKind) -> bool {
        self.kind == kind && self.hash == hash
    }

    pub(crate) fn touch(&mut self) {
        self.timestamp = Utc::now();
    }

    pub(crate) fn restore_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    pub(crate) fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }
}

/// Hex SHA-256 of a payload, the deduplication key.
pub fn content_hash(content: &[u8]) -> ContentHash {
    hex::encode(Sha256::digest(content))
}

/// Format a byte count for listings (`512 B`, `1.5 KB`, `2.0 MB`).
pub fn format_size(bytes: usize) -> String {
    const UNIT: f64 = 1024.0;
    let b = bytes as f64;
    if b < UNIT {
        format!("{} B", bytes)
    } else if b < UNIT * UNIT {
        format!("{:.1} KB", b / UNIT)
    } else {
        format!("{:.1} MB", b / (UNIT * UNIT))
    }
}
