//! Domain types.

mod item;
mod outcome;
mod status;

pub use item::{content_hash, format_size, Item, ItemKind};
pub use outcome::{AddOutcome, Advisory, Disposition};
pub use status::Status;
