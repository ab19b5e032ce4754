//! Tagged configuration values.
//!
//! Items declare a [`ValueKind`] once, at exposure time. Proposals carry a
//! [`Value`], which is checked against that kind by exhaustive matching.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The kind of value an item stores. Fixed when the item is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[serde(alias = "bool")]
    Boolean,
    #[serde(alias = "int")]
    Integer,
    #[serde(alias = "float", alias = "number")]
    Real,
    String,
}

impl ValueKind {
    /// Order in which kinds are probed when an owner does not declare one.
    pub const PROBE_ORDER: [ValueKind; 4] = [
        ValueKind::Boolean,
        ValueKind::Integer,
        ValueKind::Real,
        ValueKind::String,
    ];

    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::String => "string",
        }
    }

    /// Returns `value` normalized to this kind, or `None` if it is not a
    /// member of the kind.
    ///
    /// Integer items accept a real only when it is exactly integral and
    /// fits in an `i64`; real items widen integers.
    #[must_use]
    pub fn admit(self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::Boolean, Value::Boolean(_))
            | (Self::Integer, Value::Integer(_))
            | (Self::Real, Value::Real(_))
            | (Self::String, Value::String(_)) => Some(value.clone()),
            (Self::Integer, Value::Real(x)) => exact_i64(*x).map(Value::Integer),
            (Self::Real, Value::Integer(i)) => Some(Value::Real(*i as f64)),
            _ => None,
        }
    }
}

/// Converts `x` to an `i64` only if no information is lost.
fn exact_i64(x: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if !x.is_finite() || x.fract() != 0.0 || x >= LIMIT || x < -LIMIT {
        return None;
    }
    Some(x as i64)
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boolean" | "bool" => Ok(Self::Boolean),
            "integer" | "int" => Ok(Self::Integer),
            "real" | "float" | "number" => Ok(Self::Real),
            "string" => Ok(Self::String),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

/// A configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Numeric view used for bound checks.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Real(x) => Some(*x),
            Self::Boolean(_) | Self::String(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Total order over all values: by kind first, then by payload.
    ///
    /// Reals use [`f64::total_cmp`], so the order is defined even for NaN.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Real(a), Self::Real(b)) => a.total_cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
