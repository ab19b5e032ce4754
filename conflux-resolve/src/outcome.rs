//! Resolution and apply outcomes.

use conflux_types::{ItemId, PartyId, Priority, Property, Value};
use serde::Serialize;

/// A proposal that passed validation. `value` is normalized to the item's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedProposal {
    pub contributor: PartyId,
    pub property: Property,
    pub value: Value,
    pub priority: Priority,
}

/// A proposal that failed validation. Diagnostic only, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub contributor: PartyId,
    pub property: Property,
    /// The value as proposed.
    pub value: Value,
    pub priority: Priority,
    pub reason: String,
}

/// Result of resolving one item. Both lists follow tie-break order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResolutionOutcome {
    pub accepted: Vec<AcceptedProposal>,
    pub winner: Option<AcceptedProposal>,
    pub rejected: Vec<Rejection>,
}

/// Where an item ended up after one apply pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    /// A winner was written back and the revision advanced.
    Accepted,
    /// Every proposal was rejected; nothing changed.
    RejectedOnly,
    /// A winner existed but the host refused it; nothing changed.
    WriteFailed,
}

/// Per-item record produced by an apply pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemOutcome {
    pub item: ItemId,
    pub state: ItemState,
    pub winner: Option<AcceptedProposal>,
    pub accepted: Vec<AcceptedProposal>,
    pub rejected: Vec<Rejection>,
    /// Descriptor revision after the pass.
    pub revision: u64,
    /// True if the auto-hide flag was written for this item.
    pub hidden_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_error: Option<String>,
}

/// Everything one `apply_all_owned_by` call did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub owner: PartyId,
    /// One entry per owned item that had proposals, in identifier order.
    pub outcomes: Vec<ItemOutcome>,
}

impl ApplyReport {
    #[must_use]
    pub fn outcome(&self, item: &ItemId) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|o| &o.item == item)
    }

    /// Number of items whose winner was committed.
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == ItemState::Accepted)
            .count()
    }

    /// Total rejected proposals across all items.
    #[must_use]
    pub fn rejection_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.rejected.len()).sum()
    }
}
