//! Result of submitting content to the history.
//!
//! Whether the mutation happened and whether capacity is running low are
//! reported separately, so a warning never masks a successful insert.

use crate::core::types::ItemId;

/// What `add_item` did with the submitted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// A new item was created.
    Inserted(ItemId),
    /// Identical content was already stored; it moved to the front.
    Promoted(ItemId),
    /// The history is full; nothing changed.
    Refused,
}

/// Capacity signal riding alongside a disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Insert succeeded with only `remaining` non-pinned slots left.
    LimitWarning { remaining: usize },
    /// No free slot; the insert was refused.
    LimitFull,
}

impl Advisory {
    /// Slot count reported to limit callbacks (0 when full).
    pub fn remaining(&self) -> usize {
        match self {
            Self::LimitWarning { remaining } => *remaining,
            Self::LimitFull => 0,
        }
    }
}

/// Outcome of `History::add_item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub disposition: Disposition,
    pub advisory: Option<Advisory>,
}

impl AddOutcome {
    pub(crate) fn inserted(id: ItemId, advisory: Option<Advisory>) -> Self {
        Self {
            disposition: Disposition::Inserted(id),
            advisory,
        }
    }

    pub(crate) fn promoted(id: ItemId) -> Self {
        Self {
            disposition: Disposition::Promoted(id),
            advisory: None,
        }
    }

    pub(crate) fn refused() -> Self {
        Self {
            disposition: Disposition::Refused,
            advisory: Some(Advisory::LimitFull),
        }
    }

    /// True if the history now holds the content.
    pub fn stored(&self) -> bool {
        !matches!(self.disposition, Disposition::Refused)
    }

    /// Id of the stored item, if any.
    pub fn id(&self) -> Option<&str> {
        match &self.disposition {
            Disposition::Inserted(id) | Disposition::Promoted(id) => Some(id),
            Disposition::Refused => None,
        }
    }
}
