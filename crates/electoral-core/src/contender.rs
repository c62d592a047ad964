//! # Contenders
//!
//! The closed set of party slates that can win a jurisdiction. The
//! declaration order is the stable enumeration order used by winner
//! determination: if two contenders ever both reach the majority
//! threshold, the earlier variant takes precedence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ElectoralError;

/// A political party slate competing for electoral votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Contender {
    /// Democratic Party.
    #[serde(rename = "DEM")]
    Democratic,
    /// Republican Party.
    #[serde(rename = "REP")]
    Republican,
    /// Independent slate.
    #[serde(rename = "IND")]
    Independent,
    /// Green Party.
    #[serde(rename = "GRN")]
    Green,
    /// Libertarian Party.
    #[serde(rename = "LIB")]
    Libertarian,
}

impl Contender {
    /// Returns every contender in stable enumeration order.
    pub fn all() -> &'static [Contender] {
        &[
            Self::Democratic,
            Self::Republican,
            Self::Independent,
            Self::Green,
            Self::Libertarian,
        ]
    }

    /// Returns the three-letter party code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Democratic => "DEM",
            Self::Republican => "REP",
            Self::Independent => "IND",
            Self::Green => "GRN",
            Self::Libertarian => "LIB",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Democratic => "Democrat",
            Self::Republican => "Republican",
            Self::Independent => "Independent",
            Self::Green => "Green",
            Self::Libertarian => "Libertarian",
        }
    }
}

impl std::fmt::Display for Contender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Contender {
    type Err = ElectoralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEM" => Ok(Self::Democratic),
            "REP" => Ok(Self::Republican),
            "IND" => Ok(Self::Independent),
            "GRN" => Ok(Self::Green),
            "LIB" => Ok(Self::Libertarian),
            other => Err(ElectoralError::InvalidContender {
                offending: vec![other.to_string()],
            }),
        }
    }
}
