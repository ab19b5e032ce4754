//! Owner-declared value constraints.

use conflux_types::Value;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Owner-supplied validation hook, run after every built-in check passed.
///
/// Return `Err(Some(message))` to reject with a specific reason, or
/// `Err(None)` to reject with a generic one.
pub trait CustomValidator: Send + Sync {
    fn check(&self, value: &Value) -> Result<(), Option<String>>;
}

impl<F> CustomValidator for F
where
    F: Fn(&Value) -> Result<(), Option<String>> + Send + Sync,
{
    fn check(&self, value: &Value) -> Result<(), Option<String>> {
        self(value)
    }
}

/// Constraints a candidate value must satisfy.
#[derive(Clone, Default, Serialize)]
pub struct Constraints {
    /// Inclusive lower bound. Numeric kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound. Numeric kinds only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<Value>>,
    #[serde(skip)]
    pub custom: Option<Arc<dyn CustomValidator>>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_allowed_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.allowed_values = Some(values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_custom(mut self, validator: impl CustomValidator + 'static) -> Self {
        self.custom = Some(Arc::new(validator));
        self
    }

    /// Returns true if a custom validator is installed.
    #[must_use]
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    #[must_use]
    pub fn has_range(&self) -> bool {
        self.minimum.is_some() || self.maximum.is_some()
    }
}

impl PartialEq for Constraints {
    fn eq(&self, other: &Self) -> bool {
        let same_custom = match (&self.custom, &other.custom) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.minimum == other.minimum
            && self.maximum == other.maximum
            && self.allowed_values == other.allowed_values
            && same_custom
    }
}

impl fmt::Debug for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraints")
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("allowed_values", &self.allowed_values)
            .field("custom", &self.has_custom())
            .finish()
    }
}
