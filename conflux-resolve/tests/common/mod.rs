use conflux_host::{HostRecord, InMemoryHost};
use conflux_registry::{Constraints, ExposeRequest, ItemDescriptor, Proposal, Registry};
use conflux_types::{ItemId, PartyId, Priority, Property, Value, ValueKind};

pub fn party(s: &str) -> PartyId {
    PartyId::parse(s).unwrap()
}

pub fn item(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

pub fn proposal(contributor: &str, priority: i64, value: Value) -> Proposal {
    Proposal {
        item: item("P-x"),
        contributor: party(contributor),
        property: Property::Value,
        value,
        priority: Priority::new(priority),
    }
}

/// A real-valued item `P-x` with the given constraints.
pub fn real_descriptor(constraints: Constraints) -> ItemDescriptor {
    let mut host = InMemoryHost::new();
    host.insert(item("P-x"), HostRecord::new(Value::Real(1.0)));
    let mut registry = Registry::new();
    registry
        .expose(
            ExposeRequest::new(item("P-x"), party("P"))
                .kind(ValueKind::Real)
                .constraints(constraints),
            &host,
        )
        .unwrap()
        .clone()
}
