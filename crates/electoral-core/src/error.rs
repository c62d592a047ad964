//! # Error Hierarchy
//!
//! Structured error types for the electoral engine, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! ## Design
//!
//! - Construction-time failures (`InvalidConfiguration`) carry every
//!   violation found in the reference dataset, not just the first.
//! - Input rejections (`InvalidJurisdiction`, `InvalidContender`,
//!   `InvalidVoteCount`) carry the offending values so callers can report
//!   them without re-deriving anything.
//! - Lookup misses (`UnknownJurisdiction`) are distinct from input
//!   rejections: they arise from single-item queries, never from an
//!   outcome assignment.

use thiserror::Error;

/// Top-level error type for the electoral engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElectoralError {
    /// The reference dataset is internally inconsistent. Fatal at engine
    /// construction; there is no degraded mode.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// An outcome assignment referenced jurisdictions that are not
    /// recognized or are registered below the minimum vote weight.
    #[error("invalid jurisdictions in assignment: {}", .offending.join(", "))]
    InvalidJurisdiction {
        /// Offending jurisdiction identifiers, sorted and deduplicated.
        offending: Vec<String>,
    },

    /// An outcome assignment referenced contenders that are neither a
    /// recognized party nor the undecided marker.
    #[error("invalid contenders in assignment: {}", .offending.join(", "))]
    InvalidContender {
        /// Offending contender identifiers, sorted and deduplicated.
        offending: Vec<String>,
    },

    /// Decided jurisdictions award more votes than exist.
    #[error("total called votes ({computed}) exceeds maximum possible ({ceiling})")]
    InvalidVoteCount {
        /// Sum of vote weights over decided jurisdictions.
        computed: u32,
        /// The fixed total of electoral votes.
        ceiling: u32,
    },

    /// A single-jurisdiction lookup missed.
    #[error("unknown jurisdiction: {0:?}")]
    UnknownJurisdiction(String),

    /// A YAML document (dataset or engine configuration) failed to parse.
    #[error("config error: {0}")]
    Config(String),
}

/// Result alias used across the electoral crates.
pub type Result<T, E = ElectoralError> = std::result::Result<T, E>;

/// Violations found while validating a reference dataset.
///
/// Validation does not stop at the first problem; the full list is
/// reported so an operator can fix a broken table in one pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} violation(s): {}", .violations.len(), render(.violations))]
pub struct ConfigurationError {
    /// Every violation found, in discovery order.
    pub violations: Vec<DatasetViolation>,
}

fn render(violations: &[DatasetViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single reference-dataset invariant violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetViolation {
    /// Weights do not sum to the fixed total.
    #[error("total electoral votes must be {expected}, got {actual}")]
    TotalMismatch {
        /// The fixed total.
        expected: u32,
        /// The sum found in the dataset.
        actual: u32,
    },

    /// A jurisdiction of the closed set has no entry.
    #[error("{0} has no dataset entry")]
    MissingJurisdiction(String),

    /// A jurisdiction is registered below the minimum weight.
    #[error("{jurisdiction} has {votes} electoral votes, fewer than the minimum {minimum}")]
    BelowMinimum {
        /// Jurisdiction code.
        jurisdiction: String,
        /// Registered weight.
        votes: u32,
        /// Minimum weight.
        minimum: u32,
    },

    /// Weight is not congressional districts plus two.
    #[error("{jurisdiction} congressional districts ({districts}) don't match electoral votes ({votes})")]
    DistrictMismatch {
        /// Jurisdiction code.
        jurisdiction: String,
        /// Registered weight.
        votes: u32,
        /// Registered district count.
        districts: u32,
    },

    /// A jurisdiction appears in no region list.
    #[error("{0} not assigned to any region")]
    Unassigned(String),

    /// A jurisdiction appears in more than one region list, or twice in one.
    #[error("{0} assigned to more than one region slot")]
    DuplicateAssignment(String),

    /// The entry's region tag disagrees with the region list holding it.
    #[error("{jurisdiction} tagged {tagged} but listed under {listed}")]
    RegionTagMismatch {
        /// Jurisdiction code.
        jurisdiction: String,
        /// Region recorded on the entry.
        tagged: String,
        /// Region whose list contains the jurisdiction.
        listed: String,
    },
}

impl From<serde_yaml::Error> for ElectoralError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}
