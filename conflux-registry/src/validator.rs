//! Candidate value validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! property relevance, type, allowed values, minimum, maximum, custom.
//! The order keeps rejection reasons reproducible.

use crate::ItemDescriptor;
use conflux_types::{Property, Value};

/// Outcome of validating one candidate value.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The value passed; carries it normalized to the item's kind.
    Accepted(Value),
    Rejected(String),
}

impl Verdict {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Validates `value` proposed for `property` of the described item.
#[must_use]
pub fn validate(descriptor: &ItemDescriptor, property: &Property, value: &Value) -> Verdict {
    if !property.affects_value() {
        return Verdict::Accepted(value.clone());
    }

    let kind = descriptor.kind();
    let Some(admitted) = kind.admit(value) else {
        return Verdict::Rejected(format!(
            "type mismatch: expected {kind}, got {}",
            value.kind()
        ));
    };

    let constraints = descriptor.constraints();

    if let Some(allowed) = &constraints.allowed_values {
        let member = allowed
            .iter()
            .any(|a| a == value || kind.admit(a).as_ref() == Some(&admitted));
        if !member {
            let listed = allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Verdict::Rejected(format!("value {value} not in allowed values [{listed}]"));
        }
    }

    if let Some(min) = constraints.minimum {
        if below(&admitted, min) {
            return Verdict::Rejected(format!("value {value} below minimum {min}"));
        }
    }
    if let Some(max) = constraints.maximum {
        if above(&admitted, max) {
            return Verdict::Rejected(format!("value {value} above maximum {max}"));
        }
    }

    if let Some(custom) = &constraints.custom {
        if let Err(message) = custom.check(&admitted) {
            return Verdict::Rejected(
                message.unwrap_or_else(|| "custom validation failed".to_string()),
            );
        }
    }

    Verdict::Accepted(admitted)
}

// Integers are compared against the bound rounded toward them, in i128, so
// values beyond 2^53 are not rounded onto the bound. `as` saturates infinite
// bounds, which keeps the comparison correct for them.

fn below(value: &Value, min: f64) -> bool {
    match value {
        Value::Integer(_) if min.is_nan() => false,
        Value::Integer(i) => i128::from(*i) < min.ceil() as i128,
        other => other.as_f64().is_some_and(|x| x.is_nan() || x < min),
    }
}

fn above(value: &Value, max: f64) -> bool {
    match value {
        Value::Integer(_) if max.is_nan() => false,
        Value::Integer(i) => i128::from(*i) > max.floor() as i128,
        other => other.as_f64().is_some_and(|x| x.is_nan() || x > max),
    }
}
