//! # Electoral Engine
//!
//! The entry point. An [`ElectoralEngine`] owns a validated reference
//! dataset, a split-vote strategy and a memoization cache, and answers
//! queries about outcome assignments.
//!
//! ## Lifecycle
//!
//! Construction validates the dataset and fails with
//! `InvalidConfiguration` if it is inconsistent; there is no partially
//! working engine. After that the engine is read-only apart from its cache
//! and can be shared across threads by reference or behind an `Arc`.
//!
//! ## Logging
//!
//! Events are emitted with `tracing` inside the engine's span. The engine
//! never installs a subscriber; callers choose where events go and may
//! replace the span with [`ElectoralEngine::with_span`].

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use electoral_core::{
    Contender, ElectoralError, Jurisdiction, JurisdictionInfo, ReferenceDataset, Region,
    RegionSummary, Timestamp,
};

use crate::assignment::OutcomeAssignment;
use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::config::EngineConfig;
use crate::reachability::{self, PathAnalysis};
use crate::regional::regional_totals;
use crate::result::ElectionResult;
use crate::split_vote::{SplitVoteStrategy, WinnerTakeAll};
use crate::tally::{self, VoteTotals};

/// Everything known about one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionSummary {
    pub code: Jurisdiction,
    pub name: String,
    pub votes: u32,
    pub congressional_districts: u32,
    pub region: Region,
    pub split_vote: bool,
    pub swing: bool,
    pub historical_leaning: Option<Contender>,
}

/// Totals and paths for one assignment; the memoized unit.
#[derive(Debug, Clone)]
struct Evaluation {
    totals: VoteTotals,
    paths: BTreeMap<Contender, PathAnalysis>,
}

#[derive(Debug)]
pub struct ElectoralEngine {
    dataset: Arc<ReferenceDataset>,
    config: EngineConfig,
    strategy: Arc<dyn SplitVoteStrategy>,
    cache: ResultCache<Evaluation>,
    span: tracing::Span,
}

impl ElectoralEngine {
    /// Engine over the built-in apportionment with default configuration.
    pub fn initialize() -> Result<Self, ElectoralError> {
        Self::new(ReferenceDataset::builtin(), EngineConfig::default())
    }

    /// Validate `dataset` and build an engine over it.
    pub fn new(dataset: ReferenceDataset, config: EngineConfig) -> Result<Self, ElectoralError> {
        let span = tracing::info_span!("electoral_engine");
        span.in_scope(|| {
            if let Err(err) = dataset.validate() {
                tracing::error!(
                    count = err.violations.len(),
                    "reference dataset rejected, engine not initialized"
                );
                return Err(ElectoralError::from(err));
            }
            tracing::info!(
                jurisdictions = dataset.jurisdictions().count(),
                total_votes = dataset.total_votes(),
                majority_threshold = dataset.majority_threshold(),
                cache_capacity = config.cache_capacity,
                "electoral engine initialized"
            );
            Ok(())
        })?;

        Ok(Self {
            dataset: Arc::new(dataset),
            cache: ResultCache::new(config.cache_capacity),
            config,
            strategy: Arc::new(WinnerTakeAll),
            span,
        })
    }

    /// Replace the split-vote strategy. Clears memoized results, which were
    /// computed under the previous strategy.
    pub fn with_split_vote_strategy(mut self, strategy: Arc<dyn SplitVoteStrategy>) -> Self {
        tracing::debug!(parent: &self.span, ?strategy, "split-vote strategy replaced");
        self.strategy = strategy;
        self.cache.clear();
        self
    }

    /// Emit all subsequent events inside `span`.
    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Parse a raw JSON assignment (`{"CA": "DEM", "TX": "undecided"}`).
    pub fn parse_assignment(&self, json: &str) -> Result<OutcomeAssignment, ElectoralError> {
        let _entered = self.span.enter();
        OutcomeAssignment::from_json(json)
    }

    /// Per-contender electoral vote totals.
    pub fn compute_totals(&self, assignment: &OutcomeAssignment) -> Result<VoteTotals, ElectoralError> {
        Ok(self.evaluate(assignment)?.totals)
    }

    /// Path analysis for every contender.
    pub fn compute_remaining_paths(
        &self,
        assignment: &OutcomeAssignment,
    ) -> Result<BTreeMap<Contender, PathAnalysis>, ElectoralError> {
        Ok(self.evaluate(assignment)?.paths)
    }

    /// Full result stamped with the current UTC year and no notes.
    pub fn check_winner(&self, assignment: &OutcomeAssignment) -> Result<ElectionResult, ElectoralError> {
        self.build_election_result(Timestamp::now().year(), assignment, None)
    }

    pub fn build_election_result(
        &self,
        year: i32,
        assignment: &OutcomeAssignment,
        notes: Option<String>,
    ) -> Result<ElectionResult, ElectoralError> {
        let Evaluation { totals, paths } = self.evaluate(assignment)?;
        let winner = tally::determine_winner(&totals, self.dataset.majority_threshold());
        if let Some(winner) = winner {
            tracing::info!(parent: &self.span, %winner, year, "majority reached");
        }
        Ok(ElectionResult::new(
            year,
            assignment.clone(),
            totals,
            winner,
            paths,
            notes,
        ))
    }

    /// Fewest of the `uncalled` jurisdictions whose weights reach `needed`,
    /// with the same sentinel as
    /// [`reachability::minimum_jurisdictions_needed`].
    pub fn minimum_jurisdictions_needed(
        &self,
        needed: i64,
        uncalled: &[Jurisdiction],
    ) -> Result<usize, ElectoralError> {
        let mut weights = Vec::with_capacity(uncalled.len());
        for jurisdiction in uncalled {
            weights.push(self.dataset.votes(*jurisdiction)?);
        }
        Ok(reachability::minimum_jurisdictions_needed(needed, &weights))
    }

    pub fn jurisdiction_info(&self, jurisdiction: Jurisdiction) -> Result<JurisdictionInfo, ElectoralError> {
        self.dataset.info(jurisdiction).cloned()
    }

    /// Lookup by postal code. Codes are case-sensitive.
    pub fn jurisdiction_info_by_code(&self, code: &str) -> Result<JurisdictionInfo, ElectoralError> {
        let jurisdiction: Jurisdiction = code.parse()?;
        self.jurisdiction_info(jurisdiction)
    }

    pub fn jurisdiction_summary(
        &self,
        jurisdiction: Jurisdiction,
    ) -> Result<JurisdictionSummary, ElectoralError> {
        let info = self.dataset.info(jurisdiction)?;
        Ok(JurisdictionSummary {
            code: jurisdiction,
            name: info.name.clone(),
            votes: info.votes,
            congressional_districts: info.congressional_districts,
            region: info.region,
            split_vote: jurisdiction.is_split_vote(),
            swing: self.dataset.is_swing(jurisdiction),
            historical_leaning: self.dataset.historical_leaning(jurisdiction),
        })
    }

    /// Per-region totals of decided jurisdictions. Not memoized.
    pub fn regional_results(
        &self,
        assignment: &OutcomeAssignment,
    ) -> Result<BTreeMap<Region, VoteTotals>, ElectoralError> {
        let _entered = self.span.enter();
        regional_totals(&self.dataset, self.strategy.as_ref(), assignment)
    }

    pub fn region_summary(&self, region: Region) -> Result<RegionSummary, ElectoralError> {
        self.dataset.region_summary(region)
    }

    /// Validated totals and paths, from the cache when possible. Failures
    /// are returned as-is and never stored.
    fn evaluate(&self, assignment: &OutcomeAssignment) -> Result<Evaluation, ElectoralError> {
        let _entered = self.span.enter();

        let key = self
            .cache
            .is_enabled()
            .then(|| CacheKey::new(assignment, &self.dataset));
        if let Some(key) = &key {
            if let Some(hit) = self.cache.get(key) {
                tracing::debug!(decided = assignment.decided().count(), "cache hit");
                return Ok(hit);
            }
        }

        let totals = tally::compute_totals(&self.dataset, self.strategy.as_ref(), assignment)?;
        let mut uncalled_weights = Vec::new();
        for jurisdiction in assignment.uncalled(&self.dataset) {
            uncalled_weights.push(self.dataset.votes(jurisdiction)?);
        }
        let paths = reachability::remaining_paths(
            &totals,
            &uncalled_weights,
            self.dataset.majority_threshold(),
        );

        tracing::info!(
            decided = assignment.decided().count(),
            uncalled = uncalled_weights.len(),
            called_votes = totals.total(),
            "vote totals computed"
        );

        let evaluation = Evaluation { totals, paths };
        if let Some(key) = key {
            self.cache.insert(key, evaluation.clone());
        }
        Ok(evaluation)
    }
}
