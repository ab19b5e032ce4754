//! The facet of an item a proposal targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which facet of an item a proposal affects.
///
/// Only [`Property::Value`] carries the item's stored value; every other
/// facet (visibility, ordering hints, host-specific extras) bypasses type
/// and constraint checks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Property {
    #[default]
    Value,
    Hidden,
    Order,
    Other(String),
}

impl Property {
    /// Returns true when proposals for this facet change the stored value.
    #[must_use]
    pub fn affects_value(&self) -> bool {
        matches!(self, Self::Value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value => "value",
            Self::Hidden => "hidden",
            Self::Order => "order",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Property {
    fn from(s: &str) -> Self {
        match s {
            "value" => Self::Value,
            "hidden" => Self::Hidden,
            "order" => Self::Order,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Property {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Property> for String {
    fn from(p: Property) -> Self {
        p.as_str().to_string()
    }
}

impl FromStr for Property {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
