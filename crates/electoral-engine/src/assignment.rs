//! # Outcome Assignments
//!
//! An [`OutcomeAssignment`] maps jurisdictions to an [`Outcome`]: either a
//! contender carried the jurisdiction, or it is still undecided. Keys need
//! not cover every jurisdiction; absent and undecided jurisdictions are
//! both "uncalled".
//!
//! Assignments are backed by a `BTreeMap`, so iteration is always in
//! jurisdiction order regardless of how the assignment was built. Two
//! assignments built from the same pairs in different orders are equal,
//! hash equally, and produce the same canonical form and digest.
//!
//! Raw string input (`"CA" → "DEM"`) enters through
//! [`OutcomeAssignment::from_raw`], which is the only place unknown
//! jurisdiction codes and unknown contender codes can appear.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use electoral_core::{Contender, ElectoralError, Jurisdiction, ReferenceDataset};

/// Textual marker for a jurisdiction that has not been called.
pub const UNDECIDED_MARKER: &str = "undecided";

/// The state of one jurisdiction in an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Outcome {
    /// The contender carried the jurisdiction.
    Called(Contender),
    /// No decided outcome yet.
    Undecided,
}

impl Outcome {
    /// The winning contender, if the jurisdiction has been called.
    pub fn contender(&self) -> Option<Contender> {
        match self {
            Self::Called(c) => Some(*c),
            Self::Undecided => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Called(c) => f.write_str(c.code()),
            Self::Undecided => f.write_str(UNDECIDED_MARKER),
        }
    }
}

impl FromStr for Outcome {
    type Err = ElectoralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNDECIDED_MARKER {
            return Ok(Self::Undecided);
        }
        s.parse().map(Self::Called)
    }
}

impl TryFrom<String> for Outcome {
    type Error = ElectoralError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}

impl From<Option<Contender>> for Outcome {
    fn from(contender: Option<Contender>) -> Self {
        contender.map_or(Self::Undecided, Self::Called)
    }
}

/// Jurisdiction → outcome mapping supplied per query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeAssignment {
    outcomes: BTreeMap<Jurisdiction, Outcome>,
}

impl OutcomeAssignment {
    /// An empty assignment: every jurisdiction uncalled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `contender` carried `jurisdiction`.
    pub fn call(mut self, jurisdiction: Jurisdiction, contender: Contender) -> Self {
        self.outcomes.insert(jurisdiction, Outcome::Called(contender));
        self
    }

    /// Record `jurisdiction` explicitly as undecided.
    pub fn undecided(mut self, jurisdiction: Jurisdiction) -> Self {
        self.outcomes.insert(jurisdiction, Outcome::Undecided);
        self
    }

    /// Set or replace the outcome for one jurisdiction.
    pub fn set(&mut self, jurisdiction: Jurisdiction, outcome: Outcome) -> Option<Outcome> {
        self.outcomes.insert(jurisdiction, outcome)
    }

    pub fn get(&self, jurisdiction: Jurisdiction) -> Option<Outcome> {
        self.outcomes.get(&jurisdiction).copied()
    }

    /// Number of keys, decided or not.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Every entry in jurisdiction order.
    pub fn iter(&self) -> impl Iterator<Item = (Jurisdiction, Outcome)> + '_ {
        self.outcomes.iter().map(|(j, o)| (*j, *o))
    }

    /// Decided entries in jurisdiction order.
    pub fn decided(&self) -> impl Iterator<Item = (Jurisdiction, Contender)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(j, o)| o.contender().map(|c| (*j, c)))
    }

    pub fn is_decided(&self, jurisdiction: Jurisdiction) -> bool {
        matches!(self.get(jurisdiction), Some(Outcome::Called(_)))
    }

    /// Dataset jurisdictions with no decided outcome, in canonical order.
    pub fn uncalled(&self, dataset: &ReferenceDataset) -> Vec<Jurisdiction> {
        dataset
            .jurisdictions()
            .filter(|j| !self.is_decided(*j))
            .collect()
    }

    /// Sorted decided pairs. Undecided keys are dropped: an explicitly
    /// undecided jurisdiction and an absent one are the same input.
    pub fn canonical_pairs(&self) -> Vec<(Jurisdiction, Contender)> {
        self.decided().collect()
    }

    /// Lowercase hex SHA-256 of the canonical pairs rendered as compact
    /// JSON (`[["AZ","REP"],["CA","DEM"]]`).
    pub fn digest(&self) -> String {
        let pairs: Vec<[&str; 2]> = self
            .decided()
            .map(|(j, c)| [j.code(), c.code()])
            .collect();
        let mut hasher = Sha256::new();
        // A Vec of string arrays cannot fail to serialize.
        if let Ok(bytes) = serde_json::to_vec(&pairs) {
            hasher.update(&bytes);
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Parse raw `(jurisdiction code, outcome)` pairs.
    ///
    /// Every pair is examined before failing, so the error names the full
    /// offending set. Jurisdiction problems are reported ahead of contender
    /// problems. A jurisdiction given two different outcomes is an
    /// offending jurisdiction.
    pub fn from_raw<I, K, V>(pairs: I) -> Result<Self, ElectoralError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut outcomes = BTreeMap::new();
        let mut bad_jurisdictions = BTreeSet::new();
        let mut bad_contenders = BTreeSet::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            let outcome = value.parse::<Outcome>();
            if outcome.is_err() {
                bad_contenders.insert(value.to_string());
            }
            match key.parse::<Jurisdiction>() {
                Ok(jurisdiction) => {
                    if let Ok(outcome) = outcome {
                        if let Some(previous) = outcomes.insert(jurisdiction, outcome) {
                            if previous != outcome {
                                bad_jurisdictions.insert(key.to_string());
                            }
                        }
                    }
                }
                Err(_) => {
                    bad_jurisdictions.insert(key.to_string());
                }
            }
        }

        if !bad_jurisdictions.is_empty() {
            let offending: Vec<String> = bad_jurisdictions.into_iter().collect();
            tracing::error!(?offending, "assignment rejected: invalid jurisdictions");
            return Err(ElectoralError::InvalidJurisdiction { offending });
        }
        if !bad_contenders.is_empty() {
            let offending: Vec<String> = bad_contenders.into_iter().collect();
            tracing::error!(?offending, "assignment rejected: invalid contenders");
            return Err(ElectoralError::InvalidContender { offending });
        }
        Ok(Self { outcomes })
    }

    /// Parse a JSON object of `{"CA": "DEM", "TX": "undecided"}`.
    pub fn from_json(json: &str) -> Result<Self, ElectoralError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ElectoralError::Config(format!("invalid assignment JSON: {e}")))?;
        Self::from_raw(raw)
    }
}

impl FromIterator<(Jurisdiction, Contender)> for OutcomeAssignment {
    fn from_iter<I: IntoIterator<Item = (Jurisdiction, Contender)>>(iter: I) -> Self {
        Self {
            outcomes: iter
                .into_iter()
                .map(|(j, c)| (j, Outcome::Called(c)))
                .collect(),
        }
    }
}

impl FromIterator<(Jurisdiction, Outcome)> for OutcomeAssignment {
    fn from_iter<I: IntoIterator<Item = (Jurisdiction, Outcome)>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Contender::*;
    use Jurisdiction::*;

    #[test]
    fn builder_and_accessors() {
        let a = OutcomeAssignment::new()
            .call(California, Democratic)
            .call(Texas, Republican)
            .undecided(Arizona);
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(California), Some(Outcome::Called(Democratic)));
        assert_eq!(a.get(Arizona), Some(Outcome::Undecided));
        assert_eq!(a.get(Ohio), None);
        assert!(a.is_decided(Texas));
        assert!(!a.is_decided(Arizona));
        assert_eq!(
            a.decided().collect::<Vec<_>>(),
            vec![(California, Democratic), (Texas, Republican)]
        );
    }

    #[test]
    fn uncalled_excludes_only_decided() {
        let dataset = ReferenceDataset::builtin();
        let a = OutcomeAssignment::new()
            .call(California, Democratic)
            .undecided(Arizona);
        let uncalled = a.uncalled(&dataset);
        assert_eq!(uncalled.len(), 50);
        assert!(uncalled.contains(&Arizona));
        assert!(!uncalled.contains(&California));
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a = OutcomeAssignment::new()
            .call(Florida, Republican)
            .call(NewYork, Democratic);
        let b = OutcomeAssignment::new()
            .call(NewYork, Democratic)
            .call(Florida, Republican);
        assert_eq!(a, b);
        assert_eq!(a.canonical_pairs(), b.canonical_pairs());
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn undecided_keys_do_not_change_digest() {
        let a = OutcomeAssignment::new().call(Georgia, Republican);
        let b = a.clone().undecided(Nevada);
        assert_ne!(a, b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn digest_is_hex_sha256_of_canonical_json() {
        let empty = OutcomeAssignment::new();
        // SHA-256 of "[]".
        assert_eq!(
            empty.digest(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
        let a = OutcomeAssignment::new().call(Ohio, Republican);
        assert_eq!(a.digest().len(), 64);
        assert_ne!(a.digest(), empty.digest());
    }

    #[test]
    fn from_raw_parses_codes_and_marker() {
        let a = OutcomeAssignment::from_raw([("CA", "DEM"), ("TX", "REP"), ("AZ", "undecided")])
            .unwrap();
        assert_eq!(a.get(California), Some(Outcome::Called(Democratic)));
        assert_eq!(a.get(Arizona), Some(Outcome::Undecided));
    }

    #[test]
    fn from_raw_reports_every_bad_jurisdiction() {
        let err = OutcomeAssignment::from_raw([("PR", "DEM"), ("CA", "DEM"), ("GU", "REP")])
            .unwrap_err();
        assert_eq!(
            err,
            ElectoralError::InvalidJurisdiction {
                offending: vec!["GU".into(), "PR".into()]
            }
        );
    }

    #[test]
    fn from_raw_reports_every_bad_contender() {
        let err = OutcomeAssignment::from_raw([("CA", "WHIG"), ("TX", "FED"), ("NY", "WHIG")])
            .unwrap_err();
        assert_eq!(
            err,
            ElectoralError::InvalidContender {
                offending: vec!["FED".into(), "WHIG".into()]
            }
        );
    }

    #[test]
    fn jurisdiction_errors_take_precedence() {
        let err = OutcomeAssignment::from_raw([("XX", "DEM"), ("CA", "WHIG")]).unwrap_err();
        assert!(matches!(err, ElectoralError::InvalidJurisdiction { .. }));
    }

    #[test]
    fn conflicting_duplicate_is_invalid_jurisdiction() {
        let err = OutcomeAssignment::from_raw([("PA", "DEM"), ("PA", "REP")]).unwrap_err();
        assert_eq!(
            err,
            ElectoralError::InvalidJurisdiction {
                offending: vec!["PA".into()]
            }
        );
        // Repeating the same outcome is harmless.
        assert!(OutcomeAssignment::from_raw([("PA", "DEM"), ("PA", "DEM")]).is_ok());
    }

    #[test]
    fn json_roundtrip() {
        let a = OutcomeAssignment::new()
            .call(Michigan, Democratic)
            .undecided(Wisconsin);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"MI":"DEM","WI":"undecided"}"#);
        assert_eq!(OutcomeAssignment::from_json(&json).unwrap(), a);
        let back: OutcomeAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn from_json_surfaces_typed_errors() {
        assert!(matches!(
            OutcomeAssignment::from_json(r#"{"ZZ":"DEM"}"#),
            Err(ElectoralError::InvalidJurisdiction { .. })
        ));
        assert!(matches!(
            OutcomeAssignment::from_json("not json"),
            Err(ElectoralError::Config(_))
        ));
    }
}
