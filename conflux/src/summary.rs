use conflux_registry::{ProposalStore, Registry};
use conflux_types::PartyId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-owner counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OwnerSummary {
    pub exposed: usize,
    pub pending_proposals: usize,
}

/// Read-only statistics over the registry and pending proposals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of exposed items.
    pub exposed: usize,
    /// Number of items with at least one pending proposal.
    pub with_pending: usize,
    pub by_owner: BTreeMap<PartyId, OwnerSummary>,
}

impl Summary {
    pub(crate) fn collect(registry: &Registry, proposals: &ProposalStore) -> Self {
        let mut by_owner: BTreeMap<PartyId, OwnerSummary> = BTreeMap::new();
        for descriptor in registry.iter() {
            by_owner.entry(descriptor.owner().clone()).or_default().exposed += 1;
        }
        for item in proposals.pending_items() {
            if let Some(descriptor) = registry.lookup(item) {
                by_owner
                    .entry(descriptor.owner().clone())
                    .or_default()
                    .pending_proposals += proposals.proposals_for(item).len();
            }
        }

        Self {
            exposed: registry.len(),
            with_pending: proposals.pending_items().count(),
            by_owner,
        }
    }
}
