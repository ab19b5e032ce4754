use conflux::{EngineConfig, ItemId, ItemState, Value, ValueKind};
use conflux_cli::{Scenario, run};
use pretty_assertions::assert_eq;
use std::io::Write;

const SCENARIO: &str = r#"
apply = ["P", "nobody"]

[[item]]
id = "P-ratio"
kind = "real"
value = 1

[[item]]
id = "P-difficulty"
value = "normal"

[[item]]
id = "P-locked"
value = true
hidden = true

[[expose]]
caller = "P"
name = "ratio"
type = "real"
minValue = 0.1
maxValue = 10.0
autoHideOnChange = true

[[expose]]
caller = "P"
name = "difficulty"
allowed_values = ["easy", "normal", "hard"]

[[expose]]
caller = "P"
name = "locked"
read_only = true

[[expose]]
caller = "P"
name = "ghost"

[[propose]]
caller = "Q"
owner = "P"
name = "ratio"
value = 0.75
priority = 50

[[propose]]
caller = "R"
owner = "P"
name = "ratio"
value = 0.85
priority = 10

[[propose]]
caller = "Q"
owner = "P"
name = "difficulty"
value = "extreme"

[[propose]]
caller = "Q"
owner = "P"
name = "locked"
value = false
"#;

fn id(s: &str) -> ItemId {
    ItemId::new(s).unwrap()
}

#[test]
fn full_scenario_run() {
    let scenario = Scenario::from_toml_str(SCENARIO).unwrap();
    let report = run(&scenario, EngineConfig::default()).unwrap();

    // One report for P; "nobody" owns nothing and yields an empty report.
    assert_eq!(report.reports.len(), 2);
    let p = &report.reports[0];
    assert_eq!(p.outcome(&id("P-ratio")).unwrap().state, ItemState::Accepted);
    assert_eq!(p.outcome(&id("P-difficulty")).unwrap().state, ItemState::RejectedOnly);
    assert!(report.reports[1].outcomes.is_empty());

    let ratio = &report.items[&id("P-ratio")];
    assert_eq!(ratio.value, Value::Real(0.85));
    assert!(ratio.hidden);
    assert_eq!(report.items[&id("P-difficulty")].value, Value::from("normal"));

    let steps: Vec<&str> = report.errors.iter().map(|e| e.step.as_str()).collect();
    assert_eq!(steps, vec!["expose[3] P/ghost", "propose[3] Q -> P/locked"]);
    assert!(report.errors[1].message.contains("read-only"));

    assert_eq!(report.summary.exposed, 3);
    assert_eq!(report.summary.with_pending, 0);
}

#[test]
fn integer_seed_is_widened_for_real_items() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[item]]
        id = "P-x"
        kind = "real"
        value = 2
        "#,
    )
    .unwrap();
    let report = run(&scenario, EngineConfig::default()).unwrap();
    assert_eq!(report.items[&id("P-x")].value, Value::Real(2.0));
}

#[test]
fn seed_accepts_type_key_like_expose() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[item]]
        id = "P-x"
        type = "real"
        value = 3
        "#,
    )
    .unwrap();
    assert_eq!(scenario.items[0].kind, Some(ValueKind::Real));
    let report = run(&scenario, EngineConfig::default()).unwrap();
    assert_eq!(report.items[&id("P-x")].value, Value::Real(3.0));
}

#[test]
fn mismatched_seed_is_an_error() {
    let scenario = Scenario::from_toml_str(
        r#"
        [[item]]
        id = "P-x"
        kind = "boolean"
        value = "yes"
        "#,
    )
    .unwrap();
    assert!(run(&scenario, EngineConfig::default()).is_err());
}

#[test]
fn unresolvable_apply_caller_is_reported() {
    let scenario = Scenario::from_toml_str(r#"apply = [""]"#).unwrap();
    let report = run(&scenario, EngineConfig::default()).unwrap();
    assert!(report.reports.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("caller could not be resolved"));
}

#[test]
fn load_from_file_and_serialize() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();
    let scenario = Scenario::load(file.path()).unwrap();
    let report = run(&scenario, EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["items"]["P-ratio"]["value"], 0.85);
    assert_eq!(json["reports"][0]["owner"], "P");
}

#[test]
fn missing_scenario_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Scenario::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.to_string().contains("failed to read scenario"));
}
