//! Deterministic configuration-override engine.
//!
//! Owners expose configuration items they control; any contributor may
//! propose values for them; each owner then applies, and exactly one
//! proposal per item wins, after validation against the owner's constraints.
//!
//! ```text
//!   expose ──► Registry ─┐
//!                        ├─► resolve ─► ApplyEngine ─► HostEnvironment::write_back
//!   propose ─► ProposalStore ┘
//! ```
//!
//! [`Engine`] is the entry point. It owns all state explicitly and takes
//! the calling party's identity as a parameter on every call.

mod config;
mod engine;
mod error;
mod summary;

pub use config::{ConfigError, EngineConfig, ExposeConfig, ProposeOptions};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use summary::{OwnerSummary, Summary};

pub use conflux_host::{HostEnvironment, HostError, HostRecord, InMemoryHost};
pub use conflux_registry::{
    Constraints, CustomValidator, ItemDescriptor, Proposal, Registry, RegistryError,
};
pub use conflux_resolve::{
    AcceptedProposal, ApplyReport, ItemOutcome, ItemState, Rejection, ResolutionOutcome,
};
pub use conflux_types::{ItemId, PartyId, Priority, Property, Value, ValueKind};
