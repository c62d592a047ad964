//! # Reference Dataset
//!
//! The immutable apportionment table the engine aggregates against: for
//! every jurisdiction its display name, electoral votes, congressional
//! district count and region, plus the per-region membership lists and the
//! swing / historical-leaning classifications.
//!
//! ## Invariants
//!
//! A dataset is only usable by the engine once [`ReferenceDataset::validate`]
//! passes:
//!
//! 1. Every jurisdiction of the closed set has an entry.
//! 2. Weights sum to [`TOTAL_ELECTORAL_VOTES`].
//! 3. Every weight is at least [`MIN_JURISDICTION_VOTES`].
//! 4. Every weight equals congressional districts plus two.
//! 5. Every jurisdiction appears in exactly one region list, and that list
//!    agrees with the entry's region tag.
//!
//! Construction (`builtin`, `new`, `from_yaml`) never validates; the engine
//! does, and refuses to start on failure.
//!
//! ## Lookup policy
//!
//! Lookups never default. A jurisdiction without an entry is an
//! [`ElectoralError::UnknownJurisdiction`], whichever accessor is used.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::contender::Contender;
use crate::error::{ConfigurationError, DatasetViolation, ElectoralError};
use crate::jurisdiction::Jurisdiction;
use crate::region::Region;

/// Fixed number of electoral votes across all jurisdictions.
pub const TOTAL_ELECTORAL_VOTES: u32 = 538;

/// Votes needed to win outright: floor(total / 2) + 1.
pub const MAJORITY_THRESHOLD: u32 = TOTAL_ELECTORAL_VOTES / 2 + 1;

/// Smallest weight any jurisdiction may carry.
pub const MIN_JURISDICTION_VOTES: u32 = 3;

/// Reference data for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionInfo {
    /// Display name.
    pub name: String,
    /// Electoral votes awarded.
    pub votes: u32,
    /// Congressional districts (House seats).
    pub congressional_districts: u32,
    /// Region tag.
    pub region: Region,
}

/// Aggregate statistics for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: Region,
    pub jurisdictions: usize,
    pub electoral_votes: u32,
    pub swing_jurisdictions: usize,
}

/// The apportionment table and its classifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDataset {
    entries: BTreeMap<Jurisdiction, JurisdictionInfo>,
    regions: BTreeMap<Region, Vec<Jurisdiction>>,
    #[serde(default)]
    swing: BTreeSet<Jurisdiction>,
    #[serde(default)]
    leanings: BTreeMap<Jurisdiction, Contender>,
}

impl ReferenceDataset {
    /// The built-in 2024–2028 apportionment.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        let mut regions: BTreeMap<Region, Vec<Jurisdiction>> = BTreeMap::new();
        for &(jurisdiction, votes, districts, region) in builtin::APPORTIONMENT {
            entries.insert(
                jurisdiction,
                JurisdictionInfo {
                    name: jurisdiction.name().to_string(),
                    votes,
                    congressional_districts: districts,
                    region,
                },
            );
            regions.entry(region).or_default().push(jurisdiction);
        }
        Self {
            entries,
            regions,
            swing: builtin::SWING.iter().copied().collect(),
            leanings: builtin::HISTORICAL_LEANINGS.iter().copied().collect(),
        }
    }

    /// Build a dataset from explicit entries and region lists, with no
    /// classifications. Not validated.
    pub fn new(
        entries: BTreeMap<Jurisdiction, JurisdictionInfo>,
        regions: BTreeMap<Region, Vec<Jurisdiction>>,
    ) -> Self {
        Self {
            entries,
            regions,
            swing: BTreeSet::new(),
            leanings: BTreeMap::new(),
        }
    }

    /// Load a dataset from YAML. Not validated.
    ///
    /// ```yaml
    /// entries:
    ///   CA: { name: California, votes: 54, congressional_districts: 52, region: west }
    /// regions:
    ///   west: [CA]
    /// swing: [AZ]
    /// leanings: { CA: DEM }
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ElectoralError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replace (or add) one jurisdiction's entry.
    pub fn with_entry(mut self, jurisdiction: Jurisdiction, info: JurisdictionInfo) -> Self {
        self.entries.insert(jurisdiction, info);
        self
    }

    /// Drop one jurisdiction's entry.
    pub fn without_entry(mut self, jurisdiction: Jurisdiction) -> Self {
        self.entries.remove(&jurisdiction);
        self
    }

    /// Replace one region's membership list.
    pub fn with_region(mut self, region: Region, members: Vec<Jurisdiction>) -> Self {
        self.regions.insert(region, members);
        self
    }

    /// Replace the swing classification.
    pub fn with_swing(mut self, swing: impl IntoIterator<Item = Jurisdiction>) -> Self {
        self.swing = swing.into_iter().collect();
        self
    }

    /// Replace the historical-leaning classification.
    pub fn with_leanings(
        mut self,
        leanings: impl IntoIterator<Item = (Jurisdiction, Contender)>,
    ) -> Self {
        self.leanings = leanings.into_iter().collect();
        self
    }

    /// Check every dataset invariant, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut violations = Vec::new();

        for jurisdiction in Jurisdiction::all() {
            if !self.entries.contains_key(jurisdiction) {
                violations.push(DatasetViolation::MissingJurisdiction(
                    jurisdiction.code().to_string(),
                ));
            }
        }

        let total = self.total_votes();
        if total != TOTAL_ELECTORAL_VOTES {
            violations.push(DatasetViolation::TotalMismatch {
                expected: TOTAL_ELECTORAL_VOTES,
                actual: total,
            });
        }

        for (jurisdiction, info) in &self.entries {
            if info.votes < MIN_JURISDICTION_VOTES {
                violations.push(DatasetViolation::BelowMinimum {
                    jurisdiction: jurisdiction.code().to_string(),
                    votes: info.votes,
                    minimum: MIN_JURISDICTION_VOTES,
                });
            }
            if info.congressional_districts.checked_add(2) != Some(info.votes) {
                violations.push(DatasetViolation::DistrictMismatch {
                    jurisdiction: jurisdiction.code().to_string(),
                    votes: info.votes,
                    districts: info.congressional_districts,
                });
            }
        }

        let mut listed: BTreeMap<Jurisdiction, Vec<Region>> = BTreeMap::new();
        for (region, members) in &self.regions {
            for member in members {
                listed.entry(*member).or_default().push(*region);
            }
        }
        for jurisdiction in Jurisdiction::all() {
            match listed.get(jurisdiction).map(Vec::as_slice) {
                None | Some([]) => violations.push(DatasetViolation::Unassigned(
                    jurisdiction.code().to_string(),
                )),
                Some([region]) => {
                    if let Some(info) = self.entries.get(jurisdiction) {
                        if info.region != *region {
                            violations.push(DatasetViolation::RegionTagMismatch {
                                jurisdiction: jurisdiction.code().to_string(),
                                tagged: info.region.to_string(),
                                listed: region.to_string(),
                            });
                        }
                    }
                }
                Some(_) => violations.push(DatasetViolation::DuplicateAssignment(
                    jurisdiction.code().to_string(),
                )),
            }
        }

        if violations.is_empty() {
            tracing::debug!(total, "reference dataset validated");
            return Ok(());
        }
        for violation in &violations {
            tracing::warn!(%violation, "reference dataset violation");
        }
        Err(ConfigurationError { violations })
    }

    /// Full reference entry for a jurisdiction.
    pub fn info(&self, jurisdiction: Jurisdiction) -> Result<&JurisdictionInfo, ElectoralError> {
        self.entries
            .get(&jurisdiction)
            .ok_or_else(|| ElectoralError::UnknownJurisdiction(jurisdiction.code().to_string()))
    }

    /// Electoral votes for a jurisdiction.
    pub fn votes(&self, jurisdiction: Jurisdiction) -> Result<u32, ElectoralError> {
        self.info(jurisdiction).map(|info| info.votes)
    }

    /// Region tag for a jurisdiction.
    pub fn region_of(&self, jurisdiction: Jurisdiction) -> Result<Region, ElectoralError> {
        self.info(jurisdiction).map(|info| info.region)
    }

    /// Every jurisdiction with an entry, in canonical order.
    pub fn jurisdictions(&self) -> impl Iterator<Item = Jurisdiction> + '_ {
        self.entries.keys().copied()
    }

    /// Sum of all registered weights, saturating at `u32::MAX`.
    pub fn total_votes(&self) -> u32 {
        self.entries
            .values()
            .fold(0u32, |total, info| total.saturating_add(info.votes))
    }

    /// Majority threshold derived from the fixed total.
    pub fn majority_threshold(&self) -> u32 {
        MAJORITY_THRESHOLD
    }

    /// Membership list for a region (empty if the region has none).
    pub fn jurisdictions_in_region(&self, region: Region) -> &[Jurisdiction] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_swing(&self, jurisdiction: Jurisdiction) -> bool {
        self.swing.contains(&jurisdiction)
    }

    /// Party that has historically carried the jurisdiction, if any.
    pub fn historical_leaning(&self, jurisdiction: Jurisdiction) -> Option<Contender> {
        self.leanings.get(&jurisdiction).copied()
    }

    /// Counts and vote weight for one region.
    pub fn region_summary(&self, region: Region) -> Result<RegionSummary, ElectoralError> {
        let members = self.jurisdictions_in_region(region);
        let mut electoral_votes = 0u32;
        for member in members {
            electoral_votes = electoral_votes.saturating_add(self.votes(*member)?);
        }
        Ok(RegionSummary {
            region,
            jurisdictions: members.len(),
            electoral_votes,
            swing_jurisdictions: members.iter().filter(|j| self.is_swing(**j)).count(),
        })
    }
}

impl Default for ReferenceDataset {
    fn default() -> Self {
        Self::builtin()
    }
}
