//! Core type definitions for conflux.
//!
//! This crate defines the small, closed vocabulary shared by every other
//! crate in the workspace:
//! - Party and item identifiers ([`PartyId`], [`ItemId`])
//! - Tagged configuration values ([`Value`]) and their kinds ([`ValueKind`])
//! - The facet a proposal targets ([`Property`])
//! - Proposal ranking ([`Priority`])
//!
//! Nothing here knows about registries or resolution; those live in
//! `conflux-registry` and `conflux-resolve`.

mod ids;
mod priority;
mod property;
mod value;

pub use ids::{ITEM_ID_SEPARATOR, ItemId, PartyId};
pub use priority::Priority;
pub use property::Property;
pub use value::{Value, ValueKind};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing core types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    #[error("unknown value kind: {0}")]
    UnknownKind(String),
}
