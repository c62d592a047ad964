//! # Jurisdictions: The Closed Set of 51
//!
//! Defines the `Jurisdiction` enum: the 50 states plus the District of
//! Columbia. Every jurisdiction that awards electoral votes is a variant;
//! there is no open-ended string form inside the engine. Raw identifiers
//! only exist at the parsing boundary ([`Jurisdiction::from_str`]).
//!
//! The canonical textual form is the two-letter postal code. It is the
//! `Display`, `FromStr` and serde representation, and parsing is
//! case-sensitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ElectoralError;

/// A jurisdiction that awards electoral votes.
///
/// Variants are declared in alphabetical order of display name, which is
/// also the `Ord` order used for deterministic iteration everywhere in the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "AL")]
    Alabama,
    #[serde(rename = "AK")]
    Alaska,
    #[serde(rename = "AZ")]
    Arizona,
    #[serde(rename = "AR")]
    Arkansas,
    #[serde(rename = "CA")]
    California,
    #[serde(rename = "CO")]
    Colorado,
    #[serde(rename = "CT")]
    Connecticut,
    #[serde(rename = "DE")]
    Delaware,
    #[serde(rename = "DC")]
    DistrictOfColumbia,
    #[serde(rename = "FL")]
    Florida,
    #[serde(rename = "GA")]
    Georgia,
    #[serde(rename = "HI")]
    Hawaii,
    #[serde(rename = "ID")]
    Idaho,
    #[serde(rename = "IL")]
    Illinois,
    #[serde(rename = "IN")]
    Indiana,
    #[serde(rename = "IA")]
    Iowa,
    #[serde(rename = "KS")]
    Kansas,
    #[serde(rename = "KY")]
    Kentucky,
    #[serde(rename = "LA")]
    Louisiana,
    #[serde(rename = "ME")]
    Maine,
    #[serde(rename = "MD")]
    Maryland,
    #[serde(rename = "MA")]
    Massachusetts,
    #[serde(rename = "MI")]
    Michigan,
    #[serde(rename = "MN")]
    Minnesota,
    #[serde(rename = "MS")]
    Mississippi,
    #[serde(rename = "MO")]
    Missouri,
    #[serde(rename = "MT")]
    Montana,
    #[serde(rename = "NE")]
    Nebraska,
    #[serde(rename = "NV")]
    Nevada,
    #[serde(rename = "NH")]
    NewHampshire,
    #[serde(rename = "NJ")]
    NewJersey,
    #[serde(rename = "NM")]
    NewMexico,
    #[serde(rename = "NY")]
    NewYork,
    #[serde(rename = "NC")]
    NorthCarolina,
    #[serde(rename = "ND")]
    NorthDakota,
    #[serde(rename = "OH")]
    Ohio,
    #[serde(rename = "OK")]
    Oklahoma,
    #[serde(rename = "OR")]
    Oregon,
    #[serde(rename = "PA")]
    Pennsylvania,
    #[serde(rename = "RI")]
    RhodeIsland,
    #[serde(rename = "SC")]
    SouthCarolina,
    #[serde(rename = "SD")]
    SouthDakota,
    #[serde(rename = "TN")]
    Tennessee,
    #[serde(rename = "TX")]
    Texas,
    #[serde(rename = "UT")]
    Utah,
    #[serde(rename = "VT")]
    Vermont,
    #[serde(rename = "VA")]
    Virginia,
    #[serde(rename = "WA")]
    Washington,
    #[serde(rename = "WV")]
    WestVirginia,
    #[serde(rename = "WI")]
    Wisconsin,
    #[serde(rename = "WY")]
    Wyoming,
}

/// Number of jurisdictions that award electoral votes.
pub const JURISDICTION_COUNT: usize = 51;

impl Jurisdiction {
    /// Returns all 51 jurisdictions in canonical order.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::Alabama,
            Self::Alaska,
            Self::Arizona,
            Self::Arkansas,
            Self::California,
            Self::Colorado,
            Self::Connecticut,
            Self::Delaware,
            Self::DistrictOfColumbia,
            Self::Florida,
            Self::Georgia,
            Self::Hawaii,
            Self::Idaho,
            Self::Illinois,
            Self::Indiana,
            Self::Iowa,
            Self::Kansas,
            Self::Kentucky,
            Self::Louisiana,
            Self::Maine,
            Self::Maryland,
            Self::Massachusetts,
            Self::Michigan,
            Self::Minnesota,
            Self::Mississippi,
            Self::Missouri,
            Self::Montana,
            Self::Nebraska,
            Self::Nevada,
            Self::NewHampshire,
            Self::NewJersey,
            Self::NewMexico,
            Self::NewYork,
            Self::NorthCarolina,
            Self::NorthDakota,
            Self::Ohio,
            Self::Oklahoma,
            Self::Oregon,
            Self::Pennsylvania,
            Self::RhodeIsland,
            Self::SouthCarolina,
            Self::SouthDakota,
            Self::Tennessee,
            Self::Texas,
            Self::Utah,
            Self::Vermont,
            Self::Virginia,
            Self::Washington,
            Self::WestVirginia,
            Self::Wisconsin,
            Self::Wyoming,
        ]
    }

    /// Returns the two-letter postal code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Alabama => "AL",
            Self::Alaska => "AK",
            Self::Arizona => "AZ",
            Self::Arkansas => "AR",
            Self::California => "CA",
            Self::Colorado => "CO",
            Self::Connecticut => "CT",
            Self::Delaware => "DE",
            Self::DistrictOfColumbia => "DC",
            Self::Florida => "FL",
            Self::Georgia => "GA",
            Self::Hawaii => "HI",
            Self::Idaho => "ID",
            Self::Illinois => "IL",
            Self::Indiana => "IN",
            Self::Iowa => "IA",
            Self::Kansas => "KS",
            Self::Kentucky => "KY",
            Self::Louisiana => "LA",
            Self::Maine => "ME",
            Self::Maryland => "MD",
            Self::Massachusetts => "MA",
            Self::Michigan => "MI",
            Self::Minnesota => "MN",
            Self::Mississippi => "MS",
            Self::Missouri => "MO",
            Self::Montana => "MT",
            Self::Nebraska => "NE",
            Self::Nevada => "NV",
            Self::NewHampshire => "NH",
            Self::NewJersey => "NJ",
            Self::NewMexico => "NM",
            Self::NewYork => "NY",
            Self::NorthCarolina => "NC",
            Self::NorthDakota => "ND",
            Self::Ohio => "OH",
            Self::Oklahoma => "OK",
            Self::Oregon => "OR",
            Self::Pennsylvania => "PA",
            Self::RhodeIsland => "RI",
            Self::SouthCarolina => "SC",
            Self::SouthDakota => "SD",
            Self::Tennessee => "TN",
            Self::Texas => "TX",
            Self::Utah => "UT",
            Self::Vermont => "VT",
            Self::Virginia => "VA",
            Self::Washington => "WA",
            Self::WestVirginia => "WV",
            Self::Wisconsin => "WI",
            Self::Wyoming => "WY",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alabama => "Alabama",
            Self::Alaska => "Alaska",
            Self::Arizona => "Arizona",
            Self::Arkansas => "Arkansas",
            Self::California => "California",
            Self::Colorado => "Colorado",
            Self::Connecticut => "Connecticut",
            Self::Delaware => "Delaware",
            Self::DistrictOfColumbia => "District of Columbia",
            Self::Florida => "Florida",
            Self::Georgia => "Georgia",
            Self::Hawaii => "Hawaii",
            Self::Idaho => "Idaho",
            Self::Illinois => "Illinois",
            Self::Indiana => "Indiana",
            Self::Iowa => "Iowa",
            Self::Kansas => "Kansas",
            Self::Kentucky => "Kentucky",
            Self::Louisiana => "Louisiana",
            Self::Maine => "Maine",
            Self::Maryland => "Maryland",
            Self::Massachusetts => "Massachusetts",
            Self::Michigan => "Michigan",
            Self::Minnesota => "Minnesota",
            Self::Mississippi => "Mississippi",
            Self::Missouri => "Missouri",
            Self::Montana => "Montana",
            Self::Nebraska => "Nebraska",
            Self::Nevada => "Nevada",
            Self::NewHampshire => "New Hampshire",
            Self::NewJersey => "New Jersey",
            Self::NewMexico => "New Mexico",
            Self::NewYork => "New York",
            Self::NorthCarolina => "North Carolina",
            Self::NorthDakota => "North Dakota",
            Self::Ohio => "Ohio",
            Self::Oklahoma => "Oklahoma",
            Self::Oregon => "Oregon",
            Self::Pennsylvania => "Pennsylvania",
            Self::RhodeIsland => "Rhode Island",
            Self::SouthCarolina => "South Carolina",
            Self::SouthDakota => "South Dakota",
            Self::Tennessee => "Tennessee",
            Self::Texas => "Texas",
            Self::Utah => "Utah",
            Self::Vermont => "Vermont",
            Self::Virginia => "Virginia",
            Self::Washington => "Washington",
            Self::WestVirginia => "West Virginia",
            Self::Wisconsin => "Wisconsin",
            Self::Wyoming => "Wyoming",
        }
    }

    /// Whether this jurisdiction may divide its votes by congressional
    /// district instead of awarding them winner-take-all.
    pub fn is_split_vote(&self) -> bool {
        matches!(self, Self::Maine | Self::Nebraska)
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = ElectoralError;

    /// Parse a jurisdiction from its postal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|j| j.code() == s)
            .copied()
            .ok_or_else(|| ElectoralError::UnknownJurisdiction(s.to_string()))
    }
}
