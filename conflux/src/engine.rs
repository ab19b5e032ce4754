//! The contributor-facing engine.

use crate::{EngineConfig, EngineError, EngineResult, ExposeConfig, ProposeOptions, Summary};
use conflux_host::HostEnvironment;
use conflux_registry::{
    ExposeRequest, ItemDescriptor, Proposal, ProposalRequest, ProposalStore, Registry,
};
use conflux_resolve::{ApplyEngine, ApplyReport};
use conflux_types::{ItemId, PartyId, Value};
use tracing::debug;

/// Owns the registry, the pending proposals and the host for one run.
///
/// Every operation takes the calling party's identity as a raw string,
/// resolved by whatever layer drives the phases. The engine itself never
/// guesses who is calling.
pub struct Engine<H> {
    host: H,
    registry: Registry,
    proposals: ProposalStore,
    config: EngineConfig,
    applier: ApplyEngine,
}

impl<H: HostEnvironment> Engine<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, EngineConfig::default())
    }

    pub fn with_config(host: H, config: EngineConfig) -> Self {
        let applier = ApplyEngine::new().warn_on_rejection(config.warn_on_rejection);
        Self {
            host,
            registry: Registry::new(),
            proposals: ProposalStore::new(),
            config,
            applier,
        }
    }

    /// Exposes the caller's item `raw_local_name` for proposals.
    ///
    /// Returns the item's global identifier, `caller-raw_local_name`.
    pub fn expose(
        &mut self,
        caller: &str,
        raw_local_name: &str,
        config: ExposeConfig,
    ) -> EngineResult<ItemId> {
        let owner = resolve_caller(caller)?;
        let item = ItemId::compose(&owner, raw_local_name)?;

        let mut request = ExposeRequest::new(item.clone(), owner)
            .constraints(config.constraints())
            .read_only(config.read_only)
            .auto_hide_on_change(config.auto_hide_on_change);
        request.kind = config.kind;

        self.registry.expose(request, &self.host)?;
        Ok(item)
    }

    /// Files the caller's proposal for `owner`'s item `raw_local_name`.
    pub fn propose(
        &mut self,
        caller: &str,
        owner: &str,
        raw_local_name: &str,
        value: Value,
        options: ProposeOptions,
    ) -> EngineResult<()> {
        let contributor = resolve_caller(caller)?;
        let owner = PartyId::parse(owner)?;
        let item = ItemId::compose(&owner, raw_local_name)?;

        let request = ProposalRequest {
            item,
            contributor,
            property: options.property,
            value,
            priority: options.priority.unwrap_or(self.config.default_priority),
        };
        self.proposals.propose(&self.registry, request)?;
        Ok(())
    }

    /// Resolves and commits every pending proposal on the caller's items.
    pub fn apply_all_owned(&mut self, caller: &str) -> EngineResult<ApplyReport> {
        let owner = resolve_caller(caller)?;
        Ok(self.applier.apply_all_owned_by(
            &owner,
            &mut self.registry,
            &mut self.proposals,
            &mut self.host,
        ))
    }

    // ── Diagnostics ──────────────────────────────────────────────

    /// Every exposed item, in identifier order.
    #[must_use]
    pub fn registry_dump(&self) -> Vec<&ItemDescriptor> {
        self.registry.iter().collect()
    }

    /// Every pending proposal, grouped by item.
    #[must_use]
    pub fn proposal_dump(&self) -> Vec<&Proposal> {
        self.proposals.iter().collect()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::collect(&self.registry, &self.proposals)
    }

    // ── Accessors ────────────────────────────────────────────────

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn proposals(&self) -> &ProposalStore {
        &self.proposals
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

fn resolve_caller(caller: &str) -> EngineResult<PartyId> {
    PartyId::parse(caller).map_err(|err| {
        debug!(caller, error = %err, "caller unresolvable");
        EngineError::CallerUnresolvable(caller.to_string())
    })
}
