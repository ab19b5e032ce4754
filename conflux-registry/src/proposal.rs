//! Pending proposals, grouped by item.

use crate::{Registry, RegistryError, RegistryResult};
use conflux_types::{ItemId, PartyId, Priority, Property, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// One contributor's request to set a facet of an item.
///
/// Proposals are never mutated after creation; resolution only reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    pub item: ItemId,
    pub contributor: PartyId,
    pub property: Property,
    pub value: Value,
    pub priority: Priority,
}

/// Arguments of [`ProposalStore::propose`].
#[derive(Debug, Clone)]
pub struct ProposalRequest {
    pub item: ItemId,
    pub contributor: PartyId,
    pub property: Property,
    pub value: Value,
    pub priority: Priority,
}

impl ProposalRequest {
    /// A value proposal at the default priority.
    #[must_use]
    pub fn new(item: ItemId, contributor: PartyId, value: Value) -> Self {
        Self {
            item,
            contributor,
            property: Property::Value,
            value,
            priority: Priority::DEFAULT,
        }
    }

    #[must_use]
    pub fn property(mut self, property: Property) -> Self {
        self.property = property;
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Priority::new(priority);
        self
    }
}

/// Unordered collection of proposals per item.
///
/// Every proposal is kept, including repeated ones from the same
/// contributor; resolution decides which one takes effect.
#[derive(Debug, Clone, Default)]
pub struct ProposalStore {
    pending: BTreeMap<ItemId, Vec<Proposal>>,
}

impl ProposalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a proposal against an exposed, writable item.
    pub fn propose(&mut self, registry: &Registry, request: ProposalRequest) -> RegistryResult<()> {
        let descriptor = registry
            .lookup(&request.item)
            .ok_or_else(|| RegistryError::NotExposed(request.item.to_string()))?;
        if descriptor.is_read_only() {
            return Err(RegistryError::ReadOnly(request.item.to_string()));
        }

        debug!(
            item = %request.item,
            contributor = %request.contributor,
            property = %request.property,
            priority = %request.priority,
            "proposal filed"
        );
        let ProposalRequest {
            item,
            contributor,
            property,
            value,
            priority,
        } = request;
        self.pending.entry(item.clone()).or_default().push(Proposal {
            item,
            contributor,
            property,
            value,
            priority,
        });
        Ok(())
    }

    /// Proposals for `item`, possibly empty.
    #[must_use]
    pub fn proposals_for(&self, item: &ItemId) -> &[Proposal] {
        self.pending.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    /// Removes and returns the proposals for `item`. Used once the item has
    /// been resolved, so nothing carries over into a later pass.
    pub fn drain(&mut self, item: &ItemId) -> Vec<Proposal> {
        self.pending.remove(item).unwrap_or_default()
    }

    /// Items with at least one pending proposal.
    pub fn pending_items(&self) -> impl Iterator<Item = &ItemId> {
        self.pending
            .iter()
            .filter(|(_, proposals)| !proposals.is_empty())
            .map(|(item, _)| item)
    }

    /// Every pending proposal, grouped by item in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Proposal> {
        self.pending.values().flatten()
    }

    /// Total number of pending proposals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
