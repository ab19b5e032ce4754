//! In-memory host backed by an ordered map.

use crate::{HostEnvironment, HostError, HostResult};
use conflux_types::{ItemId, Property, Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One item as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    pub kind: ValueKind,
    pub value: Value,
    #[serde(default)]
    pub hidden: bool,
    /// Facets other than value and visibility (ordering hints and so on).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, Value>,
}

impl HostRecord {
    /// Creates a visible record whose kind is taken from `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            kind: value.kind(),
            value,
            hidden: false,
            extras: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// A host whose items live in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryHost {
    records: BTreeMap<ItemId, HostRecord>,
}

impl InMemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an item.
    pub fn insert(&mut self, item: ItemId, record: HostRecord) {
        self.records.insert(item, record);
    }

    #[must_use]
    pub fn record(&self, item: &ItemId) -> Option<&HostRecord> {
        self.records.get(item)
    }

    /// Enumerates every known item with its current state.
    pub fn items(&self) -> impl Iterator<Item = (&ItemId, &HostRecord)> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(ItemId, HostRecord)> for InMemoryHost {
    fn from_iter<I: IntoIterator<Item = (ItemId, HostRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl HostEnvironment for InMemoryHost {
    fn exists(&self, item: &ItemId, kind: ValueKind) -> bool {
        self.records.get(item).is_some_and(|r| r.kind == kind)
    }

    fn is_hidden(&self, item: &ItemId) -> bool {
        self.records.get(item).is_some_and(|r| r.hidden)
    }

    fn read(&self, item: &ItemId, property: &Property) -> Option<Value> {
        let record = self.records.get(item)?;
        match property {
            Property::Value => Some(record.value.clone()),
            Property::Hidden => Some(Value::Boolean(record.hidden)),
            other => record.extras.get(other.as_str()).cloned(),
        }
    }

    fn write_back(&mut self, item: &ItemId, property: &Property, value: Value) -> HostResult<()> {
        let record = self
            .records
            .get_mut(item)
            .ok_or_else(|| HostError::UnknownItem(item.to_string()))?;

        match property {
            Property::Value => {
                if value.kind() != record.kind {
                    return Err(HostError::Refused {
                        item: item.to_string(),
                        reason: format!("expected {}, got {}", record.kind, value.kind()),
                    });
                }
                record.value = value;
            }
            Property::Hidden => {
                record.hidden = value.as_bool().ok_or_else(|| HostError::Refused {
                    item: item.to_string(),
                    reason: format!("hidden flag must be boolean, got {}", value.kind()),
                })?;
            }
            other => {
                record.extras.insert(other.as_str().to_string(), value);
            }
        }

        debug!(item = %item, property = %property, "host write-back committed");
        Ok(())
    }
}
