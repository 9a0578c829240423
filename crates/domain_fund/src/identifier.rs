//! Strongly-typed fund identifier
//!
//! A newtype wrapper around a UUID prevents accidental mixing with other
//! string values. The wire and file formats carry the canonical hyphenated
//! UUID string, so `Display` produces exactly that.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a fund, assigned at creation and immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundId(Uuid);

impl FundId {
    /// Creates a new random identifier.
    ///
    /// Uniqueness is probabilistic (128-bit random value); no collision
    /// detection is performed.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FundId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for FundId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<FundId> for Uuid {
    fn from(id: FundId) -> Uuid {
        id.0
    }
}
