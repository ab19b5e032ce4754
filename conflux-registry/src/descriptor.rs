use crate::Constraints;
use conflux_types::{ItemId, PartyId, ValueKind};
use serde::Serialize;

/// Metadata of one exposed item.
///
/// Identity, owner, kind, constraints and flags are fixed at exposure.
/// Only the apply pass mutates a descriptor, through [`record_win`] and
/// [`set_hidden`], so `revision` can never decrease.
///
/// [`record_win`]: ItemDescriptor::record_win
/// [`set_hidden`]: ItemDescriptor::set_hidden
#[derive(Debug, Clone, Serialize)]
pub struct ItemDescriptor {
    id: ItemId,
    owner: PartyId,
    kind: ValueKind,
    constraints: Constraints,
    read_only: bool,
    auto_hide_on_change: bool,
    original_hidden: bool,
    hidden: bool,
    last_winner: Option<PartyId>,
    revision: u64,
}

impl ItemDescriptor {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: ItemId,
        owner: PartyId,
        kind: ValueKind,
        constraints: Constraints,
        read_only: bool,
        auto_hide_on_change: bool,
        original_hidden: bool,
    ) -> Self {
        Self {
            id,
            owner,
            kind,
            constraints,
            read_only,
            auto_hide_on_change,
            original_hidden,
            hidden: original_hidden,
            last_winner: None,
            revision: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn owner(&self) -> &PartyId {
        &self.owner
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[must_use]
    pub fn auto_hide_on_change(&self) -> bool {
        self.auto_hide_on_change
    }

    /// Host-side visibility captured at exposure time.
    #[must_use]
    pub fn original_hidden(&self) -> bool {
        self.original_hidden
    }

    /// Visibility as last set by an apply pass.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn last_winner(&self) -> Option<&PartyId> {
        self.last_winner.as_ref()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records a successful apply won by `winner`.
    pub fn record_win(&mut self, winner: PartyId) {
        self.last_winner = Some(winner);
        self.revision += 1;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// True if re-exposing with these parameters would change nothing.
    pub(crate) fn same_exposure(
        &self,
        owner: &PartyId,
        kind: ValueKind,
        constraints: &Constraints,
        read_only: bool,
        auto_hide_on_change: bool,
    ) -> bool {
        &self.owner == owner
            && self.kind == kind
            && &self.constraints == constraints
            && self.read_only == read_only
            && self.auto_hide_on_change == auto_hide_on_change
    }
}
