//! # Input Validation
//!
//! Rejects malformed outcome assignments before any aggregation runs.
//! Validation is pure and all-or-nothing: a rejected assignment produces
//! no totals, partial or otherwise.
//!
//! Checks, in order:
//!
//! 1. Every key has a dataset entry at or above the minimum weight
//!    (`InvalidJurisdiction`, with the full offending set).
//! 2. Every value is a contender or the undecided marker. The typed
//!    [`Outcome`](crate::assignment::Outcome) makes this hold by
//!    construction; raw input is checked in
//!    [`OutcomeAssignment::from_raw`].
//! 3. Decided weights sum to at most the fixed total (`InvalidVoteCount`).

use electoral_core::{
    ElectoralError, ReferenceDataset, MIN_JURISDICTION_VOTES, TOTAL_ELECTORAL_VOTES,
};

use crate::assignment::OutcomeAssignment;

/// Validate an assignment against a dataset, returning the sum of weights
/// over decided jurisdictions.
pub fn validate_assignment(
    dataset: &ReferenceDataset,
    assignment: &OutcomeAssignment,
) -> Result<u32, ElectoralError> {
    let offending: Vec<String> = assignment
        .iter()
        .filter(|(jurisdiction, _)| {
            !matches!(dataset.votes(*jurisdiction), Ok(v) if v >= MIN_JURISDICTION_VOTES)
        })
        .map(|(jurisdiction, _)| jurisdiction.code().to_string())
        .collect();
    if !offending.is_empty() {
        tracing::error!(?offending, "assignment rejected: invalid jurisdictions");
        return Err(ElectoralError::InvalidJurisdiction { offending });
    }

    let mut called = 0u32;
    for (jurisdiction, _) in assignment.decided() {
        called = called.saturating_add(dataset.votes(jurisdiction)?);
    }
    if called > TOTAL_ELECTORAL_VOTES {
        tracing::error!(
            called,
            ceiling = TOTAL_ELECTORAL_VOTES,
            "assignment rejected: called votes exceed total"
        );
        return Err(ElectoralError::InvalidVoteCount {
            computed: called,
            ceiling: TOTAL_ELECTORAL_VOTES,
        });
    }

    Ok(called)
}
