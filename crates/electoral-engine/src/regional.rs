//! Per-region vote totals.
//!
//! Split-vote jurisdictions go through the same strategy as the national
//! tally, so summing every region reproduces [`compute_totals`](crate::tally::compute_totals).

use std::collections::BTreeMap;

use electoral_core::{ElectoralError, ReferenceDataset, Region};

use crate::assignment::OutcomeAssignment;
use crate::split_vote::SplitVoteStrategy;
use crate::tally::{compute_totals, VoteTotals};
use crate::validate::validate_assignment;

/// Totals of decided jurisdictions, grouped by region. Every region appears,
/// including those where nothing has been called.
pub fn regional_totals(
    dataset: &ReferenceDataset,
    strategy: &dyn SplitVoteStrategy,
    assignment: &OutcomeAssignment,
) -> Result<BTreeMap<Region, VoteTotals>, ElectoralError> {
    validate_assignment(dataset, assignment)?;

    let mut by_region = BTreeMap::new();
    for region in Region::all() {
        let members: OutcomeAssignment = dataset
            .jurisdictions_in_region(*region)
            .iter()
            .filter_map(|j| assignment.get(*j).map(|outcome| (*j, outcome)))
            .collect();
        by_region.insert(*region, compute_totals(dataset, strategy, &members)?);
    }
    Ok(by_region)
}
