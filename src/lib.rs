//! Pano - encrypted, capacity-bounded clipboard history.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── items         # add, list, get, pin, rm, clear
//! │   ├── limit         # Show or change the item cap
//! │   ├── status        # Counts and location
//! │   ├── watch         # Foreground clipboard monitor
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AES-256-GCM envelope codec
//!     ├── keys          # Machine-bound key derivation
//!     ├── store/        # Persistence backends (file, memory)
//!     ├── history/      # Item store: ordering, dedup, limits, eviction
//!     ├── monitor       # Clipboard poller
//!     ├── config        # config.toml settings
//!     └── paths         # Data directory resolution
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pano::core::domain::ItemKind;
//! use pano::core::store::Memory;
//! use pano::History;
//!
//! let history = History::open_with_key(&[7u8; 32], Memory::new())?;
//! let outcome = history.add_item(ItemKind::Text, b"hello")?;
//! let (_, plaintext) = history.get_item(outcome.id().unwrap_or_default())?;
//! assert_eq!(plaintext.as_slice(), b"hello");
//! # Ok::<(), pano::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::history::History;
