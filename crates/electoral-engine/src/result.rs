//! # Election Result
//!
//! Immutable snapshot of one evaluated assignment: the totals, the winner
//! (if any), every contender's path analysis, and provenance (year,
//! creation timestamp, assignment digest, free-form notes).
//!
//! Fields are private; construction goes through the engine so that totals,
//! winner and paths always describe the stored assignment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use electoral_core::{Contender, Timestamp};

use crate::assignment::OutcomeAssignment;
use crate::reachability::PathAnalysis;
use crate::tally::VoteTotals;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionResult {
    year: i32,
    assignment: OutcomeAssignment,
    assignment_digest: String,
    vote_totals: VoteTotals,
    winner: Option<Contender>,
    remaining_paths: BTreeMap<Contender, PathAnalysis>,
    created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl ElectionResult {
    pub(crate) fn new(
        year: i32,
        assignment: OutcomeAssignment,
        vote_totals: VoteTotals,
        winner: Option<Contender>,
        remaining_paths: BTreeMap<Contender, PathAnalysis>,
        notes: Option<String>,
    ) -> Self {
        let assignment_digest = assignment.digest();
        Self {
            year,
            assignment,
            assignment_digest,
            vote_totals,
            winner,
            remaining_paths,
            created_at: Timestamp::now(),
            notes,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn assignment(&self) -> &OutcomeAssignment {
        &self.assignment
    }

    /// SHA-256 of the decided pairs; see [`OutcomeAssignment::digest`].
    pub fn assignment_digest(&self) -> &str {
        &self.assignment_digest
    }

    pub fn vote_totals(&self) -> &VoteTotals {
        &self.vote_totals
    }

    pub fn winner(&self) -> Option<Contender> {
        self.winner
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn remaining_paths(&self) -> &BTreeMap<Contender, PathAnalysis> {
        &self.remaining_paths
    }

    pub fn path_for(&self, contender: Contender) -> Option<&PathAnalysis> {
        self.remaining_paths.get(&contender)
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Equality ignoring the creation timestamp.
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.year == other.year
            && self.assignment_digest == other.assignment_digest
            && self.vote_totals == other.vote_totals
            && self.winner == other.winner
            && self.remaining_paths == other.remaining_paths
            && self.notes == other.notes
    }
}
