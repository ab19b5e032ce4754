//! Host environment interface for conflux.
//!
//! The override engine never owns the configuration items it manages. A
//! host (a game, an application settings layer, a test fixture) owns them,
//! and the engine talks to it through the narrow [`HostEnvironment`] trait:
//! - probe whether an item exists, and with which kind
//! - read current visibility and values
//! - write back a final accepted value
//!
//! [`InMemoryHost`] is a complete host backed by a `BTreeMap`, used by the
//! CLI and by tests.

mod error;
mod memory;

pub use error::{HostError, HostResult};
pub use memory::{HostRecord, InMemoryHost};

use conflux_types::{ItemId, Property, Value, ValueKind};

/// Everything the override engine needs from its host.
pub trait HostEnvironment {
    /// Returns true if the host has an item `item` of the given kind.
    fn exists(&self, item: &ItemId, kind: ValueKind) -> bool;

    /// Detects an item's kind by probing [`ValueKind::PROBE_ORDER`].
    /// The first kind for which the item exists wins.
    fn detect_kind(&self, item: &ItemId) -> Option<ValueKind> {
        ValueKind::PROBE_ORDER
            .into_iter()
            .find(|kind| self.exists(item, *kind))
    }

    /// Current host-side visibility. Unknown items report not hidden.
    fn is_hidden(&self, item: &ItemId) -> bool;

    /// Reads the current value of one facet of an item.
    fn read(&self, item: &ItemId, property: &Property) -> Option<Value>;

    /// Commits a value for one facet of an item.
    fn write_back(&mut self, item: &ItemId, property: &Property, value: Value) -> HostResult<()>;
}
