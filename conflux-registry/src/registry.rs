//! Exposed item registry.

use crate::{Constraints, ItemDescriptor, RegistryError, RegistryResult};
use conflux_host::HostEnvironment;
use conflux_types::{ItemId, PartyId, ValueKind};
use std::collections::BTreeMap;
use tracing::debug;

/// Everything an owner declares when exposing an item.
#[derive(Debug, Clone)]
pub struct ExposeRequest {
    pub item: ItemId,
    pub owner: PartyId,
    /// Detected from the host when `None`.
    pub kind: Option<ValueKind>,
    pub constraints: Constraints,
    pub read_only: bool,
    pub auto_hide_on_change: bool,
}

impl ExposeRequest {
    #[must_use]
    pub fn new(item: ItemId, owner: PartyId) -> Self {
        Self {
            item,
            owner,
            kind: None,
            constraints: Constraints::default(),
            read_only: false,
            auto_hide_on_change: false,
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn auto_hide_on_change(mut self, auto_hide: bool) -> Self {
        self.auto_hide_on_change = auto_hide;
        self
    }
}

/// Maps item identifiers to their descriptors.
///
/// Iteration follows identifier order, so it is stable within a run and
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    items: BTreeMap<ItemId, ItemDescriptor>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exposes an item for proposals.
    ///
    /// Re-exposing with identical parameters by the same owner is a no-op.
    /// Nothing is stored unless every check passes.
    pub fn expose(
        &mut self,
        request: ExposeRequest,
        host: &dyn HostEnvironment,
    ) -> RegistryResult<&ItemDescriptor> {
        let ExposeRequest {
            item,
            owner,
            kind,
            constraints,
            read_only,
            auto_hide_on_change,
        } = request;

        let kind = match kind {
            Some(kind) if host.exists(&item, kind) => kind,
            Some(_) => return Err(RegistryError::UnknownItem(item.to_string())),
            None => host
                .detect_kind(&item)
                .ok_or_else(|| RegistryError::UnknownItem(item.to_string()))?,
        };

        check_constraints(&item, kind, &constraints)?;

        let existing = self.items.get(&item).map(|d| {
            (
                d.same_exposure(&owner, kind, &constraints, read_only, auto_hide_on_change),
                d.owner().clone(),
            )
        });
        match existing {
            Some((true, _)) => {
                debug!(item = %item, owner = %owner, "re-exposure ignored");
                return Ok(&self.items[&item]);
            }
            Some((false, current_owner)) => {
                return Err(RegistryError::AlreadyExposed {
                    item: item.to_string(),
                    owner: current_owner.to_string(),
                });
            }
            None => {}
        }

        let original_hidden = host.is_hidden(&item);
        debug!(item = %item, owner = %owner, kind = %kind, read_only, "item exposed");
        let descriptor = ItemDescriptor::new(
            item.clone(),
            owner,
            kind,
            constraints,
            read_only,
            auto_hide_on_change,
            original_hidden,
        );
        Ok(self.items.entry(item).or_insert(descriptor))
    }

    #[must_use]
    pub fn lookup(&self, item: &ItemId) -> Option<&ItemDescriptor> {
        self.items.get(item)
    }

    pub fn lookup_mut(&mut self, item: &ItemId) -> Option<&mut ItemDescriptor> {
        self.items.get_mut(item)
    }

    /// Items exposed by `owner`, in identifier order.
    pub fn items_owned_by<'a>(
        &'a self,
        owner: &'a PartyId,
    ) -> impl Iterator<Item = &'a ItemDescriptor> + 'a {
        self.items.values().filter(move |d| d.owner() == owner)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDescriptor> {
        self.items.values()
    }

    #[must_use]
    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains_key(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn check_constraints(item: &ItemId, kind: ValueKind, c: &Constraints) -> RegistryResult<()> {
    let invalid = |reason: String| RegistryError::InvalidConstraint {
        item: item.to_string(),
        reason,
    };

    if c.has_range() && !kind.is_numeric() {
        return Err(invalid(format!("minimum/maximum require a numeric kind, item is {kind}")));
    }
    for bound in [c.minimum, c.maximum].into_iter().flatten() {
        if !bound.is_finite() {
            return Err(invalid(format!("bound {bound} is not finite")));
        }
    }
    if let (Some(min), Some(max)) = (c.minimum, c.maximum) {
        if min > max {
            return Err(invalid(format!("minimum {min} exceeds maximum {max}")));
        }
    }
    Ok(())
}
