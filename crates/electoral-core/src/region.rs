//! # Regions
//!
//! Census-style geographic grouping of jurisdictions. The District of
//! Columbia is its own region so that every jurisdiction belongs to exactly
//! one region without special-casing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ElectoralError;

/// A geographic region of the United States.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
    District,
}

impl Region {
    /// Returns all regions in canonical order.
    pub fn all() -> &'static [Region] {
        &[
            Self::Northeast,
            Self::Midwest,
            Self::South,
            Self::West,
            Self::District,
        ]
    }

    /// Returns the snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Northeast => "northeast",
            Self::Midwest => "midwest",
            Self::South => "south",
            Self::West => "west",
            Self::District => "district",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ElectoralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|r| r.as_str() == s)
            .copied()
            .ok_or_else(|| ElectoralError::Config(format!("unknown region: {s:?}")))
    }
}
