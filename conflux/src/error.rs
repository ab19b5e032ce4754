//! Error types for the engine facade.

use conflux_registry::RegistryError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced to callers of [`crate::Engine`].
///
/// Validation failures are not errors; they are reported in each
/// [`crate::ItemOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The orchestration layer could not tell who is calling.
    #[error("caller could not be resolved: {0:?}")]
    CallerUnresolvable(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Identifier(#[from] conflux_types::Error),
}
