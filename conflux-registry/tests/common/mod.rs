use conflux_host::{HostRecord, InMemoryHost};
use conflux_registry::{Constraints, ExposeRequest, ItemDescriptor, Registry};
use conflux_types::{ItemId, PartyId, Value, ValueKind};

pub fn party(s: &str) -> PartyId {
    PartyId::parse(s).unwrap()
}

pub fn item(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

fn sample_value(kind: ValueKind) -> Value {
    match kind {
        ValueKind::Boolean => Value::Boolean(false),
        ValueKind::Integer => Value::Integer(0),
        ValueKind::Real => Value::Real(1.0),
        ValueKind::String => Value::from("normal"),
    }
}

/// Exposes a single item `P-x` of `kind` and returns its descriptor.
pub fn descriptor(kind: ValueKind, constraints: Constraints) -> ItemDescriptor {
    let id = item("P-x");
    let mut host = InMemoryHost::new();
    host.insert(id.clone(), HostRecord::new(sample_value(kind)));
    let mut registry = Registry::new();
    registry
        .expose(
            ExposeRequest::new(id, party("P")).kind(kind).constraints(constraints),
            &host,
        )
        .unwrap()
        .clone()
}
