//! Strong type definitions for Quotebook.
//!
//! Identifiers are newtypes so a raw integer from a request path cannot be
//! handed to a store without going through parsing first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A store-assigned quote identifier.
///
/// Ids are positive and handed out in strictly increasing order by a single
/// store. They are never reused within a process lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct QuoteId(u64);

impl QuoteId {
    /// The first id a fresh store assigns.
    pub const FIRST: Self = Self(1);

    /// Create an id from a raw value. Returns `None` for zero.
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Get the raw value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuoteId({})", self.0)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuoteId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s.parse()?;
        Self::new(raw).ok_or(CoreError::ZeroId)
    }
}

impl TryFrom<u64> for QuoteId {
    type Error = CoreError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(CoreError::ZeroId)
    }
}

impl From<QuoteId> for u64 {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}
