//! # Vote Aggregation & Winner Determination
//!
//! Maps an outcome assignment to per-contender electoral vote totals and
//! applies the majority rule.
//!
//! ## Determinism
//!
//! Totals are a commutative sum, so the result never depends on how the
//! assignment was built. Iteration still runs in jurisdiction order so that
//! logs are reproducible.
//!
//! ## Tie-break
//!
//! Under the fixed 538/270 arithmetic two contenders cannot both reach the
//! threshold, but a hand-built [`VoteTotals`] can. [`determine_winner`]
//! then returns the earliest contender in [`Contender::all`] order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use electoral_core::{Contender, ElectoralError, ReferenceDataset};

use crate::assignment::OutcomeAssignment;
use crate::split_vote::SplitVoteStrategy;
use crate::validate::validate_assignment;

/// Electoral votes per contender. Every contender is present, with zero
/// if it carried nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTotals(BTreeMap<Contender, u32>);

impl VoteTotals {
    /// Zero votes for every contender.
    pub fn zeroed() -> Self {
        Self(Contender::all().iter().map(|c| (*c, 0)).collect())
    }

    /// Totals from explicit counts; contenders not mentioned get zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (Contender, u32)>) -> Self {
        let mut totals = Self::zeroed();
        for (contender, votes) in counts {
            totals.add(contender, votes);
        }
        totals
    }

    pub fn get(&self, contender: Contender) -> u32 {
        self.0.get(&contender).copied().unwrap_or(0)
    }

    /// Sum across all contenders, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |sum, v| sum.saturating_add(*v))
    }

    /// Entries in contender enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Contender, u32)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }

    pub(crate) fn add(&mut self, contender: Contender, votes: u32) {
        let slot = self.0.entry(contender).or_insert(0);
        *slot = slot.saturating_add(votes);
    }
}

impl Default for VoteTotals {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Validate `assignment` and sum electoral votes per contender.
///
/// Split-vote jurisdictions are allocated by `strategy`; everything else
/// is winner-take-all.
pub fn compute_totals(
    dataset: &ReferenceDataset,
    strategy: &dyn SplitVoteStrategy,
    assignment: &OutcomeAssignment,
) -> Result<VoteTotals, ElectoralError> {
    validate_assignment(dataset, assignment)?;

    let mut totals = VoteTotals::zeroed();
    for (jurisdiction, winner) in assignment.decided() {
        let votes = dataset.votes(jurisdiction)?;
        if !jurisdiction.is_split_vote() {
            totals.add(winner, votes);
            continue;
        }
        let allocation = strategy.allocate(jurisdiction, votes, winner);
        let allocated = allocation
            .iter()
            .fold(0u32, |sum, (_, share)| sum.saturating_add(*share));
        if allocated != votes {
            tracing::error!(
                %jurisdiction,
                allocated,
                votes,
                "split-vote allocation does not match jurisdiction weight"
            );
            return Err(ElectoralError::InvalidVoteCount {
                computed: allocated,
                ceiling: votes,
            });
        }
        for (contender, share) in allocation {
            totals.add(contender, share);
        }
    }

    Ok(totals)
}

/// First contender, in enumeration order, at or above `threshold`.
pub fn determine_winner(totals: &VoteTotals, threshold: u32) -> Option<Contender> {
    Contender::all()
        .iter()
        .copied()
        .find(|c| totals.get(*c) >= threshold)
}
