//! # Reachability Analysis
//!
//! For each contender: how many votes it still needs, whether the uncalled
//! jurisdictions could supply them, and the fewest uncalled jurisdictions
//! that would.
//!
//! ## Minimum jurisdictions
//!
//! Taking the largest remaining weights first minimizes the number of
//! jurisdictions whose sum reaches a target: every jurisdiction contributes
//! independently and only its magnitude matters. The count is the length
//! of the shortest prefix of the descending-sorted weights whose running
//! sum reaches `needed`.
//!
//! ## Sentinel
//!
//! When even every uncalled jurisdiction together falls short,
//! [`minimum_jurisdictions_needed`] returns `uncalled.len() + 1`. That value
//! means "not achievable", not a literal count. [`PathAnalysis`] exposes
//! [`PathAnalysis::minimum_if_achievable`] so callers do not have to
//! recognize the sentinel themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use electoral_core::Contender;

use crate::tally::VoteTotals;

/// One contender's path to the majority threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathAnalysis {
    /// Votes already won.
    pub current_votes: u32,
    /// Threshold minus current votes. Zero or negative once clinched.
    pub needed_votes: i64,
    /// Whether the uncalled jurisdictions hold at least `needed_votes`.
    pub possible: bool,
    /// Fewest uncalled jurisdictions supplying `needed_votes`, or the
    /// "not achievable" sentinel (uncalled count + 1).
    pub minimum_jurisdictions_needed: usize,
}

impl PathAnalysis {
    /// Whether the contender is already at or above the threshold.
    pub fn clinched(&self) -> bool {
        self.needed_votes <= 0
    }

    /// Whether `minimum_jurisdictions_needed` is a real count rather than
    /// the sentinel.
    pub fn is_achievable(&self) -> bool {
        self.possible
    }

    /// The minimum count, or `None` when the threshold is out of reach.
    pub fn minimum_if_achievable(&self) -> Option<usize> {
        self.possible.then_some(self.minimum_jurisdictions_needed)
    }
}

/// Fewest weights from `uncalled_weights` whose sum reaches `needed`.
///
/// Returns 0 when `needed <= 0`, and `uncalled_weights.len() + 1` when the
/// whole set is insufficient (including the empty set with positive need).
pub fn minimum_jurisdictions_needed(needed: i64, uncalled_weights: &[u32]) -> usize {
    if needed <= 0 {
        return 0;
    }
    let mut weights = uncalled_weights.to_vec();
    weights.sort_unstable_by(|a, b| b.cmp(a));
    greedy_prefix(needed, &weights).unwrap_or(weights.len() + 1)
}

/// Shortest prefix of already-descending `weights` reaching `needed`.
fn greedy_prefix(needed: i64, weights: &[u32]) -> Option<usize> {
    let mut running = 0i64;
    for (taken, weight) in weights.iter().enumerate() {
        running += i64::from(*weight);
        if running >= needed {
            return Some(taken + 1);
        }
    }
    None
}

/// Path analysis for every contender given current totals and the weights
/// of the uncalled jurisdictions.
pub fn remaining_paths(
    totals: &VoteTotals,
    uncalled_weights: &[u32],
    threshold: u32,
) -> BTreeMap<Contender, PathAnalysis> {
    let remaining: i64 = uncalled_weights.iter().map(|w| i64::from(*w)).sum();
    let mut descending = uncalled_weights.to_vec();
    descending.sort_unstable_by(|a, b| b.cmp(a));

    Contender::all()
        .iter()
        .map(|contender| {
            let current_votes = totals.get(*contender);
            let needed_votes = i64::from(threshold) - i64::from(current_votes);
            let minimum = if needed_votes <= 0 {
                0
            } else {
                greedy_prefix(needed_votes, &descending).unwrap_or(descending.len() + 1)
            };
            (
                *contender,
                PathAnalysis {
                    current_votes,
                    needed_votes,
                    possible: needed_votes <= remaining,
                    minimum_jurisdictions_needed: minimum,
                },
            )
        })
        .collect()
}
