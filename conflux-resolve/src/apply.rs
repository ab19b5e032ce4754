//! Apply engine - commits resolved winners for one owner's items.
//!
//! For every item owned by the caller that has pending proposals, the
//! engine resolves them, writes the winner back to the host, bumps the
//! descriptor revision and applies the auto-hide policy. Items of other
//! owners are never touched.

use crate::{ApplyReport, ItemOutcome, ItemState, resolve};
use conflux_host::HostEnvironment;
use conflux_registry::{ItemDescriptor, Proposal, ProposalStore, Registry};
use conflux_types::{ItemId, PartyId, Property, Value};
use tracing::{debug, info, warn};

/// Runs apply passes.
#[derive(Debug, Clone, Default)]
pub struct ApplyEngine {
    warn_on_rejection: bool,
}

impl ApplyEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs rejected proposals at `warn` instead of `debug`.
    #[must_use]
    pub fn warn_on_rejection(mut self, warn: bool) -> Self {
        self.warn_on_rejection = warn;
        self
    }

    /// Resolves and commits every pending proposal for items owned by `owner`.
    ///
    /// Proposals of processed items are consumed. A rejected proposal or a
    /// refused write never stops the pass.
    ///
    /// Only one proposal wins per item, whatever its property. Proposals for
    /// properties other than the value skip validation, so the host is the
    /// only judge of them: if such a proposal wins and the host refuses it,
    /// the item ends as [`ItemState::WriteFailed`] and the losing value
    /// proposals are consumed with it.
    pub fn apply_all_owned_by(
        &self,
        owner: &PartyId,
        registry: &mut Registry,
        proposals: &mut ProposalStore,
        host: &mut dyn HostEnvironment,
    ) -> ApplyReport {
        let owned: Vec<ItemId> = registry
            .items_owned_by(owner)
            .map(|d| d.id().clone())
            .collect();
        debug!(owner = %owner, items = owned.len(), "apply pass started");

        let mut outcomes = Vec::new();
        for item in owned {
            let pending = proposals.drain(&item);
            if pending.is_empty() {
                continue;
            }
            let Some(descriptor) = registry.lookup_mut(&item) else {
                continue;
            };
            outcomes.push(self.apply_item(descriptor, &pending, host));
        }

        info!(owner = %owner, resolved = outcomes.len(), "apply pass finished");
        ApplyReport {
            owner: owner.clone(),
            outcomes,
        }
    }

    fn apply_item(
        &self,
        descriptor: &mut ItemDescriptor,
        pending: &[Proposal],
        host: &mut dyn HostEnvironment,
    ) -> ItemOutcome {
        let item = descriptor.id().clone();
        let resolution = resolve(descriptor, pending);

        for rejection in &resolution.rejected {
            if self.warn_on_rejection {
                warn!(
                    item = %item,
                    contributor = %rejection.contributor,
                    property = %rejection.property,
                    value = %rejection.value,
                    reason = %rejection.reason,
                    "proposal rejected"
                );
            } else {
                debug!(
                    item = %item,
                    contributor = %rejection.contributor,
                    property = %rejection.property,
                    value = %rejection.value,
                    reason = %rejection.reason,
                    "proposal rejected"
                );
            }
        }

        let mut outcome = ItemOutcome {
            item: item.clone(),
            state: ItemState::RejectedOnly,
            winner: resolution.winner.clone(),
            accepted: resolution.accepted,
            rejected: resolution.rejected,
            revision: descriptor.revision(),
            hidden_applied: false,
            write_error: None,
        };

        let Some(winner) = resolution.winner else {
            return outcome;
        };

        if let Err(err) = host.write_back(&item, &winner.property, winner.value.clone()) {
            warn!(item = %item, contributor = %winner.contributor, error = %err, "write-back failed");
            outcome.state = ItemState::WriteFailed;
            outcome.write_error = Some(err.to_string());
            return outcome;
        }

        if winner.property == Property::Hidden {
            if let Some(hidden) = winner.value.as_bool() {
                descriptor.set_hidden(hidden);
            }
        }
        descriptor.record_win(winner.contributor.clone());
        info!(
            item = %item,
            contributor = %winner.contributor,
            property = %winner.property,
            value = %winner.value,
            revision = descriptor.revision(),
            "proposal applied"
        );

        if descriptor.auto_hide_on_change() {
            match host.write_back(&item, &Property::Hidden, Value::Boolean(true)) {
                Ok(()) => {
                    descriptor.set_hidden(true);
                    outcome.hidden_applied = true;
                }
                Err(err) => {
                    warn!(item = %item, error = %err, "auto-hide write failed");
                    outcome.write_error = Some(err.to_string());
                }
            }
        }

        outcome.state = ItemState::Accepted;
        outcome.revision = descriptor.revision();
        outcome
    }
}
