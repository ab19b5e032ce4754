//! Scenario runner shared by the `confluxctl` binary and its tests.
//!
//! A scenario is a TOML document describing host items, exposures,
//! proposals and the order in which owners apply:
//!
//! ```toml
//! apply = ["P"]
//!
//! [[item]]
//! id = "P-ratio"
//! kind = "real"
//! value = 1.0
//!
//! [[expose]]
//! caller = "P"
//! name = "ratio"
//! minValue = 0.1
//! maxValue = 10.0
//!
//! [[propose]]
//! caller = "Q"
//! owner = "P"
//! name = "ratio"
//! value = 0.75
//! priority = 50
//! ```

use anyhow::{Context, Result, anyhow};
use conflux::{
    ApplyReport, Engine, EngineConfig, ExposeConfig, HostRecord, InMemoryHost, ItemId,
    ProposeOptions, Summary, Value, ValueKind,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// A host item seeded before anything is exposed.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSeed {
    pub id: String,
    /// Taken from `value` when absent.
    #[serde(default, alias = "type")]
    pub kind: Option<ValueKind>,
    pub value: Value,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExposeStep {
    pub caller: String,
    pub name: String,
    #[serde(flatten)]
    pub config: ExposeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProposeStep {
    pub caller: String,
    pub owner: String,
    pub name: String,
    pub value: Value,
    #[serde(flatten)]
    pub options: ProposeOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemSeed>,
    #[serde(default)]
    pub expose: Vec<ExposeStep>,
    #[serde(default)]
    pub propose: Vec<ProposeStep>,
    /// Owners, in the order they apply.
    #[serde(default)]
    pub apply: Vec<String>,
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse scenario")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_toml_str(&text)
    }
}

/// A structural error raised by one scenario step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepError {
    pub step: String,
    pub message: String,
}

/// Everything a scenario run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub reports: Vec<ApplyReport>,
    pub errors: Vec<StepError>,
    pub summary: Summary,
    /// Final host state.
    pub items: BTreeMap<ItemId, HostRecord>,
}

/// Runs every step of `scenario`. Step failures are collected, not fatal.
pub fn run(scenario: &Scenario, config: EngineConfig) -> Result<RunReport> {
    let host = seed_host(&scenario.items)?;
    let mut engine = Engine::with_config(host, config);
    let mut errors = Vec::new();

    for (i, step) in scenario.expose.iter().enumerate() {
        if let Err(err) = engine.expose(&step.caller, &step.name, step.config.clone()) {
            warn!(caller = %step.caller, name = %step.name, error = %err, "expose failed");
            errors.push(StepError {
                step: format!("expose[{i}] {}/{}", step.caller, step.name),
                message: err.to_string(),
            });
        }
    }

    for (i, step) in scenario.propose.iter().enumerate() {
        if let Err(err) = engine.propose(
            &step.caller,
            &step.owner,
            &step.name,
            step.value.clone(),
            step.options.clone(),
        ) {
            warn!(caller = %step.caller, owner = %step.owner, name = %step.name, error = %err, "propose failed");
            errors.push(StepError {
                step: format!("propose[{i}] {} -> {}/{}", step.caller, step.owner, step.name),
                message: err.to_string(),
            });
        }
    }

    let mut reports = Vec::new();
    for owner in &scenario.apply {
        match engine.apply_all_owned(owner) {
            Ok(report) => {
                info!(
                    owner = %owner,
                    accepted = report.accepted_count(),
                    rejected = report.rejection_count(),
                    "owner applied"
                );
                reports.push(report);
            }
            Err(err) => errors.push(StepError {
                step: format!("apply {owner}"),
                message: err.to_string(),
            }),
        }
    }

    let summary = engine.summary();
    let items = engine
        .into_host()
        .items()
        .map(|(id, record)| (id.clone(), record.clone()))
        .collect();

    Ok(RunReport {
        reports,
        errors,
        summary,
        items,
    })
}

fn seed_host(seeds: &[ItemSeed]) -> Result<InMemoryHost> {
    let mut host = InMemoryHost::new();
    for seed in seeds {
        let id = ItemId::new(seed.id.clone())?;
        let kind = seed.kind.unwrap_or_else(|| seed.value.kind());
        let value = kind
            .admit(&seed.value)
            .ok_or_else(|| anyhow!("item {id}: value {} is not a {kind}", seed.value))?;
        let mut record = HostRecord::new(value).hidden(seed.hidden);
        record.kind = kind;
        host.insert(id, record);
    }
    Ok(host)
}
