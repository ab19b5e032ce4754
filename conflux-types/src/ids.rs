//! Identifier types for parties and configuration items.
//!
//! A party is anyone who exposes items or proposes values for them. An
//! item's global identifier is composed from its owner and a raw local
//! name, joined by [`ITEM_ID_SEPARATOR`]. Contributors address each
//! other's items with that composed form, so the rule must never change.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Joins an owner and a raw local name into a global item identifier.
pub const ITEM_ID_SEPARATOR: &str = "-";

/// Identifier of a party (item owner or proposal contributor).
///
/// Ordering is plain lexicographic ordering of the underlying string; the
/// resolver relies on it to break priority ties.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyId(String);

impl PartyId {
    /// Parses a party identifier. Fails on empty input or whitespace.
    pub fn parse(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidIdentifier {
                id,
                reason: "party id must not be empty".into(),
            });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(Error::InvalidIdentifier {
                id,
                reason: "party id must not contain whitespace".into(),
            });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PartyId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PartyId> for String {
    fn from(id: PartyId) -> Self {
        id.0
    }
}

/// Globally unique identifier of a configuration item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Composes the global identifier `owner-raw_local_name`.
    pub fn compose(owner: &PartyId, raw_local_name: &str) -> Result<Self, Error> {
        if raw_local_name.is_empty() {
            return Err(Error::InvalidIdentifier {
                id: format!("{owner}{ITEM_ID_SEPARATOR}"),
                reason: "local item name must not be empty".into(),
            });
        }
        Ok(Self(format!("{owner}{ITEM_ID_SEPARATOR}{raw_local_name}")))
    }

    /// Wraps an already-composed global identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::InvalidIdentifier {
                id,
                reason: "item id must not be empty".into(),
            });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}
