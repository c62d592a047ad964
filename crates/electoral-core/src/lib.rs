//! # electoral-core: Foundational Types for the Electoral Engine
//!
//! This crate is the leaf of the workspace. It defines the closed
//! identifier sets and the read-only reference data every other crate
//! aggregates against. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums, not strings.** `Jurisdiction` (51 variants),
//!    `Contender` and `Region` are exhaustive enums. Raw strings exist only
//!    at the parse boundary, where they fail with typed errors.
//!
//! 2. **One reference dataset.** `ReferenceDataset` owns the apportionment
//!    table, the region lists and the classifications. It is validated as a
//!    whole; a partially-valid table is never used.
//!
//! 3. **No silent defaults.** A lookup for a jurisdiction without an entry
//!    is `UnknownJurisdiction`, never zero votes.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `electoral-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

mod builtin;
pub mod contender;
pub mod dataset;
pub mod error;
pub mod jurisdiction;
pub mod region;
pub mod temporal;

pub use contender::Contender;
pub use dataset::{
    JurisdictionInfo, ReferenceDataset, RegionSummary, MAJORITY_THRESHOLD,
    MIN_JURISDICTION_VOTES, TOTAL_ELECTORAL_VOTES,
};
pub use error::{ConfigurationError, DatasetViolation, ElectoralError, Result};
pub use jurisdiction::{Jurisdiction, JURISDICTION_COUNT};
pub use region::Region;
pub use temporal::Timestamp;
