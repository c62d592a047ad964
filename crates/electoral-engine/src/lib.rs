//! # electoral-engine: Vote Aggregation and Reachability
//!
//! Takes an outcome assignment (which contender carried which
//! jurisdiction, or undecided) and answers: what are the totals, has anyone
//! reached the majority threshold, and what would each contender still need
//! from the uncalled jurisdictions.
//!
//! ## Architecture
//!
//! ```text
//! OutcomeAssignment ──► validate ──► tally ──► reachability ──► ElectionResult
//!                                      │
//!                          SplitVoteStrategy (ME, NE)
//! ```
//!
//! [`ElectoralEngine`] ties the stages together over a validated
//! [`ReferenceDataset`](electoral_core::ReferenceDataset) and memoizes
//! totals and paths in a bounded LRU keyed on the canonical assignment.
//!
//! ## Crate Policy
//!
//! - Depends only on `electoral-core` internally.
//! - Every public operation validates its input first and either fails
//!   whole or returns a complete answer.
//! - No subscriber is ever installed; events go through `tracing` only.
//! - No `.unwrap()` outside tests.

pub mod assignment;
pub mod cache;
pub mod config;
pub mod engine;
pub mod reachability;
pub mod regional;
pub mod result;
pub mod split_vote;
pub mod tally;
pub mod validate;

pub use assignment::{Outcome, OutcomeAssignment, UNDECIDED_MARKER};
pub use cache::{CacheKey, CacheStats};
pub use config::{EngineConfig, DEFAULT_CACHE_CAPACITY};
pub use engine::{ElectoralEngine, JurisdictionSummary};
pub use reachability::{minimum_jurisdictions_needed, PathAnalysis};
pub use result::ElectionResult;
pub use split_vote::{SplitVoteStrategy, VoteAllocation, WinnerTakeAll};
pub use tally::{determine_winner, VoteTotals};
pub use validate::validate_assignment;
