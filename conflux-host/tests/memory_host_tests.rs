use conflux_host::{HostEnvironment, HostError, HostRecord, InMemoryHost};
use conflux_types::{ItemId, Property, Value, ValueKind};
use pretty_assertions::assert_eq;

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

fn sample_host() -> InMemoryHost {
    [
        (id("P-ratio"), HostRecord::new(Value::Real(1.0))),
        (id("P-enabled"), HostRecord::new(Value::Boolean(true)).hidden(true)),
        (id("P-mode"), HostRecord::new(Value::from("normal"))),
    ]
    .into_iter()
    .collect()
}

// ── Probing ──────────────────────────────────────────────────────

#[test]
fn exists_checks_kind() {
    let host = sample_host();
    assert!(host.exists(&id("P-ratio"), ValueKind::Real));
    assert!(!host.exists(&id("P-ratio"), ValueKind::Integer));
    assert!(!host.exists(&id("P-missing"), ValueKind::Real));
}

#[test]
fn detect_kind_probes_in_order() {
    let host = sample_host();
    assert_eq!(host.detect_kind(&id("P-enabled")), Some(ValueKind::Boolean));
    assert_eq!(host.detect_kind(&id("P-mode")), Some(ValueKind::String));
    assert_eq!(host.detect_kind(&id("P-missing")), None);
}

#[test]
fn detect_kind_prefers_earlier_kinds() {
    struct Everything;
    impl HostEnvironment for Everything {
        fn exists(&self, _: &ItemId, kind: ValueKind) -> bool {
            kind != ValueKind::Boolean
        }
        fn is_hidden(&self, _: &ItemId) -> bool {
            false
        }
        fn read(&self, _: &ItemId, _: &Property) -> Option<Value> {
            None
        }
        fn write_back(&mut self, _: &ItemId, _: &Property, _: Value) -> conflux_host::HostResult<()> {
            Ok(())
        }
    }
    assert_eq!(Everything.detect_kind(&id("x")), Some(ValueKind::Integer));
}

#[test]
fn visibility() {
    let host = sample_host();
    assert!(host.is_hidden(&id("P-enabled")));
    assert!(!host.is_hidden(&id("P-ratio")));
    assert!(!host.is_hidden(&id("P-missing")));
}

// ── Write-back ───────────────────────────────────────────────────

#[test]
fn write_value() {
    let mut host = sample_host();
    host.write_back(&id("P-ratio"), &Property::Value, Value::Real(0.85)).unwrap();
    assert_eq!(host.read(&id("P-ratio"), &Property::Value), Some(Value::Real(0.85)));
}

#[test]
fn write_value_of_wrong_kind_is_refused() {
    let mut host = sample_host();
    let err = host
        .write_back(&id("P-ratio"), &Property::Value, Value::from("x"))
        .unwrap_err();
    assert!(matches!(err, HostError::Refused { .. }));
    assert_eq!(host.read(&id("P-ratio"), &Property::Value), Some(Value::Real(1.0)));
}

#[test]
fn write_hidden_flag() {
    let mut host = sample_host();
    host.write_back(&id("P-ratio"), &Property::Hidden, Value::Boolean(true)).unwrap();
    assert!(host.is_hidden(&id("P-ratio")));
    assert!(host.write_back(&id("P-ratio"), &Property::Hidden, Value::Integer(1)).is_err());
}

#[test]
fn write_extra_facet() {
    let mut host = sample_host();
    host.write_back(&id("P-mode"), &Property::Order, Value::from("b")).unwrap();
    assert_eq!(host.read(&id("P-mode"), &Property::Order), Some(Value::from("b")));
    assert_eq!(host.read(&id("P-ratio"), &Property::Order), None);
}

#[test]
fn write_unknown_item() {
    let mut host = sample_host();
    let err = host
        .write_back(&id("P-missing"), &Property::Value, Value::Integer(1))
        .unwrap_err();
    assert_eq!(err, HostError::UnknownItem("P-missing".into()));
}

#[test]
fn items_enumerates_in_id_order() {
    let host = sample_host();
    let ids: Vec<&str> = host.items().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["P-enabled", "P-mode", "P-ratio"]);
    assert_eq!(host.len(), 3);
}
