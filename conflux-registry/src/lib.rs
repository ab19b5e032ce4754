//! Registry of exposed items and their pending proposals.
//!
//! - [`Registry`] maps item identifiers to [`ItemDescriptor`]s, populated
//!   by owners through [`Registry::expose`].
//! - [`ProposalStore`] maps item identifiers to the [`Proposal`]s filed by
//!   any contributor.
//! - [`validate`] checks one candidate value against a descriptor's
//!   [`Constraints`].
//!
//! Both stores are plain values owned by whoever drives the phases; there
//! is no ambient global state.

mod constraints;
mod descriptor;
mod error;
mod proposal;
mod registry;
mod validator;

pub use constraints::{Constraints, CustomValidator};
pub use descriptor::ItemDescriptor;
pub use error::{RegistryError, RegistryResult};
pub use proposal::{Proposal, ProposalRequest, ProposalStore};
pub use registry::{ExposeRequest, Registry};
pub use validator::{Verdict, validate};
