//! Error types for registry and proposal operations.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Structural errors. Each aborts only the call that raised it and leaves
/// the registry and proposal store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The host has no such item (or none of the declared kind).
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The item is already exposed with different parameters or by another owner.
    #[error("item {item} already exposed by {owner}")]
    AlreadyExposed { item: String, owner: String },

    /// The declared constraints cannot apply to the item.
    #[error("invalid constraint on {item}: {reason}")]
    InvalidConstraint { item: String, reason: String },

    /// Nobody exposed the item.
    #[error("item not exposed: {0}")]
    NotExposed(String),

    /// The item does not accept proposals.
    #[error("item is read-only: {0}")]
    ReadOnly(String),
}
