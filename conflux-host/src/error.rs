//! Error types for host interaction.

use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors a host can report on write-back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The item does not exist on the host.
    #[error("unknown host item: {0}")]
    UnknownItem(String),

    /// The host refused the write.
    #[error("host refused write to {item}: {reason}")]
    Refused { item: String, reason: String },
}
