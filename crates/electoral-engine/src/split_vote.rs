//! # Split-Vote Allocation
//!
//! Maine and Nebraska may divide their electoral votes by congressional
//! district. The engine routes those two jurisdictions through a
//! [`SplitVoteStrategy`]; every other jurisdiction is winner-take-all
//! unconditionally.
//!
//! The default strategy, [`WinnerTakeAll`], awards the full weight to the
//! statewide winner. District-level apportionment is not modelled; a
//! strategy that implements it can be installed with
//! [`ElectoralEngine::with_split_vote_strategy`](crate::ElectoralEngine::with_split_vote_strategy).

use std::fmt;

use electoral_core::{Contender, Jurisdiction};

/// Votes a single jurisdiction awards, per contender.
pub type VoteAllocation = Vec<(Contender, u32)>;

/// Allocation rule for split-vote jurisdictions.
///
/// The returned allocation must sum to `votes`; the engine rejects the
/// query with `InvalidVoteCount` otherwise.
pub trait SplitVoteStrategy: Send + Sync + fmt::Debug {
    fn allocate(&self, jurisdiction: Jurisdiction, votes: u32, winner: Contender) -> VoteAllocation;
}

/// Full weight to the statewide winner.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinnerTakeAll;

impl SplitVoteStrategy for WinnerTakeAll {
    fn allocate(&self, _jurisdiction: Jurisdiction, votes: u32, winner: Contender) -> VoteAllocation {
        vec![(winner, votes)]
    }
}
