//! Engine configuration and per-call options.

use conflux_registry::{Constraints, CustomValidator};
use conflux_types::{Priority, Property, Value, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine-wide settings, usually read from a TOML file.
///
/// ```toml
/// default_priority = 100
/// warn_on_rejection = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Priority for proposals that do not name one.
    pub default_priority: Priority,
    /// Log rejected proposals at `warn` rather than `debug`.
    pub warn_on_rejection: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::DEFAULT,
            warn_on_rejection: false,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Options an owner passes when exposing an item.
///
/// Field names follow the wire names (`type`, `minValue`, ...) as aliases
/// so contributor-side configuration can be deserialized directly.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExposeConfig {
    /// Detected from the host when absent.
    #[serde(rename = "type")]
    pub kind: Option<ValueKind>,
    #[serde(alias = "readOnly")]
    pub read_only: bool,
    #[serde(alias = "minValue")]
    pub min_value: Option<f64>,
    #[serde(alias = "maxValue")]
    pub max_value: Option<f64>,
    #[serde(alias = "allowedValues")]
    pub allowed_values: Option<Vec<Value>>,
    #[serde(alias = "autoHideOnChange")]
    pub auto_hide_on_change: bool,
    #[serde(skip)]
    pub validator: Option<Arc<dyn CustomValidator>>,
}

impl ExposeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn range(mut self, min: impl Into<Option<f64>>, max: impl Into<Option<f64>>) -> Self {
        self.min_value = min.into();
        self.max_value = max.into();
        self
    }

    #[must_use]
    pub fn allowed_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.allowed_values = Some(values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn auto_hide_on_change(mut self) -> Self {
        self.auto_hide_on_change = true;
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl CustomValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub(crate) fn constraints(&self) -> Constraints {
        Constraints {
            minimum: self.min_value,
            maximum: self.max_value,
            allowed_values: self.allowed_values.clone(),
            custom: self.validator.clone(),
        }
    }
}

impl fmt::Debug for ExposeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposeConfig")
            .field("kind", &self.kind)
            .field("read_only", &self.read_only)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("allowed_values", &self.allowed_values)
            .field("auto_hide_on_change", &self.auto_hide_on_change)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Options a contributor passes when proposing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProposeOptions {
    /// Facet to change. Defaults to the item's value.
    pub property: Property,
    /// Falls back to [`EngineConfig::default_priority`].
    pub priority: Option<Priority>,
}

impl ProposeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn property(mut self, property: impl Into<Property>) -> Self {
        self.property = property.into();
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(Priority::new(priority));
        self
    }
}
