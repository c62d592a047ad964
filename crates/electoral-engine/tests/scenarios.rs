//! # Engine Scenarios
//!
//! End-to-end behaviour of `ElectoralEngine` over the built-in dataset:
//! the canonical four-jurisdiction scenario, determinism, memoization,
//! concurrent use, refused initialization and the log stream.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use electoral_core::{
    Contender, DatasetViolation, ElectoralError, Jurisdiction, JurisdictionInfo,
    ReferenceDataset, Region, MAJORITY_THRESHOLD, TOTAL_ELECTORAL_VOTES,
};
use electoral_engine::{
    ElectoralEngine, EngineConfig, OutcomeAssignment, SplitVoteStrategy, VoteAllocation,
};

use Contender::{Democratic, Republican};
use Jurisdiction::{California, Florida, NewYork, Texas};

fn big_four() -> OutcomeAssignment {
    OutcomeAssignment::new()
        .call(California, Democratic)
        .call(Texas, Republican)
        .call(NewYork, Democratic)
        .call(Florida, Republican)
}

#[test]
fn big_four_has_no_winner_and_both_paths_open() {
    let engine = ElectoralEngine::initialize().unwrap();
    let result = engine
        .build_election_result(2024, &big_four(), Some("first wave".into()))
        .unwrap();

    assert_eq!(result.vote_totals().get(Democratic), 82);
    assert_eq!(result.vote_totals().get(Republican), 70);
    assert!(!result.has_winner());
    assert_eq!(result.notes(), Some("first wave"));

    let dem = result.path_for(Democratic).unwrap();
    let rep = result.path_for(Republican).unwrap();
    assert_eq!(dem.needed_votes, 188);
    assert_eq!(rep.needed_votes, 200);
    assert!(dem.possible && rep.possible);
    // 386 votes remain across 47 uncalled jurisdictions.
    assert_eq!(dem.minimum_if_achievable(), Some(14));
    assert_eq!(rep.minimum_if_achievable(), Some(15));
}

#[test]
fn sweep_clinches_and_closes_every_other_path() {
    let engine = ElectoralEngine::initialize().unwrap();
    let sweep: OutcomeAssignment = Jurisdiction::all().iter().map(|j| (*j, Republican)).collect();
    let result = engine.check_winner(&sweep).unwrap();

    assert_eq!(result.winner(), Some(Republican));
    assert_eq!(result.vote_totals().total(), TOTAL_ELECTORAL_VOTES);
    assert!(result.path_for(Republican).unwrap().clinched());
    let dem = result.path_for(Democratic).unwrap();
    assert!(!dem.possible);
    // No uncalled jurisdictions, so the sentinel is 0 + 1.
    assert_eq!(dem.minimum_jurisdictions_needed, 1);
    assert_eq!(dem.needed_votes, i64::from(MAJORITY_THRESHOLD));
}

#[test]
fn invalid_jurisdiction_yields_no_totals() {
    let dataset = ReferenceDataset::builtin().with_entry(
        Jurisdiction::Vermont,
        JurisdictionInfo {
            name: "Vermont".into(),
            votes: 1,
            congressional_districts: 0,
            region: Region::Northeast,
        },
    );
    assert!(ElectoralEngine::new(dataset.clone(), EngineConfig::default()).is_err());

    let a = OutcomeAssignment::new().call(Jurisdiction::Vermont, Democratic);
    assert_eq!(
        electoral_engine::validate_assignment(&dataset, &a),
        Err(ElectoralError::InvalidJurisdiction {
            offending: vec!["VT".into()]
        })
    );
}

#[test]
fn raw_input_errors_carry_full_offending_set() {
    let engine = ElectoralEngine::initialize().unwrap();
    let err = engine
        .parse_assignment(r#"{"CA": "DEM", "XX": "REP", "QQ": "GRN"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        ElectoralError::InvalidJurisdiction {
            offending: vec!["QQ".into(), "XX".into()]
        }
    );

    let err = engine
        .parse_assignment(r#"{"CA": "dem", "TX": "WHIG"}"#)
        .unwrap_err();
    assert_eq!(
        err,
        ElectoralError::InvalidContender {
            offending: vec!["WHIG".into(), "dem".into()]
        }
    );
}

#[test]
fn identical_queries_differ_only_in_timestamp() {
    let engine = ElectoralEngine::initialize().unwrap();
    let first = engine.build_election_result(2024, &big_four(), None).unwrap();
    let second = engine.build_election_result(2024, &big_four(), None).unwrap();
    assert!(first.same_outcome(&second));
    assert_eq!(first.assignment_digest(), second.assignment_digest());
}

#[test]
fn second_identical_query_hits_cache() {
    let engine = ElectoralEngine::initialize().unwrap();
    engine.compute_totals(&big_four()).unwrap();
    let before = engine.cache_stats();
    assert_eq!((before.hits, before.misses, before.entries), (0, 1, 1));

    engine.compute_totals(&big_four()).unwrap();
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn reordered_assignment_shares_cache_entry() {
    let engine = ElectoralEngine::initialize().unwrap();
    let reordered = OutcomeAssignment::new()
        .call(Florida, Republican)
        .undecided(Jurisdiction::Ohio)
        .call(NewYork, Democratic)
        .call(Texas, Republican)
        .call(California, Democratic);

    let a = engine.compute_remaining_paths(&big_four()).unwrap();
    let b = engine.compute_remaining_paths(&reordered).unwrap();
    assert_eq!(a, b);
    let stats = engine.cache_stats();
    assert_eq!((stats.hits, stats.entries), (1, 1));
}

#[test]
fn cached_and_uncached_engines_agree() {
    let cached = ElectoralEngine::initialize().unwrap();
    let uncached = ElectoralEngine::new(ReferenceDataset::builtin(), EngineConfig::uncached()).unwrap();

    for _ in 0..2 {
        let x = cached.build_election_result(2028, &big_four(), None).unwrap();
        let y = uncached.build_election_result(2028, &big_four(), None).unwrap();
        assert!(x.same_outcome(&y));
    }
    assert_eq!(cached.cache_stats().hits, 1);
    assert_eq!(uncached.cache_stats().hits, 0);
    assert_eq!(uncached.cache_stats().entries, 0);
}

#[derive(Debug)]
struct Leaky;

impl SplitVoteStrategy for Leaky {
    fn allocate(&self, _j: Jurisdiction, votes: u32, winner: Contender) -> VoteAllocation {
        vec![(winner, votes + 1)]
    }
}

#[test]
fn failed_queries_are_not_cached() {
    let engine = ElectoralEngine::initialize()
        .unwrap()
        .with_split_vote_strategy(Arc::new(Leaky));
    let a = OutcomeAssignment::new().call(Jurisdiction::Nebraska, Republican);
    for _ in 0..2 {
        assert!(matches!(
            engine.compute_totals(&a),
            Err(ElectoralError::InvalidVoteCount { computed: 6, ceiling: 5 })
        ));
    }
    let stats = engine.cache_stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (0, 2, 0));
}

#[test]
fn shared_engine_answers_concurrent_queries() {
    let engine = Arc::new(ElectoralEngine::initialize().unwrap());
    let expected = engine.compute_totals(&big_four()).unwrap();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let engine = Arc::clone(&engine);
            let expected = expected.clone();
            scope.spawn(move || {
                for _ in 0..50 {
                    let totals = engine.compute_totals(&big_four()).unwrap();
                    assert_eq!(totals, expected, "worker {worker}");
                }
            });
        }
    });

    let stats = engine.cache_stats();
    assert_eq!(stats.hits + stats.misses, 401);
}

#[test]
fn perturbed_tables_refuse_initialization() {
    let builtin = ReferenceDataset::builtin();
    let wy = builtin.info(Jurisdiction::Wyoming).unwrap().clone();

    let cases = [
        (
            "under minimum",
            builtin.clone().with_entry(
                Jurisdiction::Wyoming,
                JurisdictionInfo {
                    votes: 2,
                    congressional_districts: 0,
                    ..wy.clone()
                },
            ),
        ),
        (
            "district mismatch",
            builtin.clone().with_entry(
                Jurisdiction::Wyoming,
                JurisdictionInfo {
                    congressional_districts: 2,
                    ..wy.clone()
                },
            ),
        ),
        ("missing entry", builtin.clone().without_entry(Jurisdiction::Wyoming)),
    ];

    for (label, dataset) in cases {
        match ElectoralEngine::new(dataset, EngineConfig::default()) {
            Err(ElectoralError::InvalidConfiguration(err)) => {
                assert!(!err.violations.is_empty(), "{label}");
            }
            other => panic!("{label}: expected InvalidConfiguration, got {other:?}"),
        }
    }
}

#[test]
fn duplicate_region_membership_is_reported() {
    let builtin = ReferenceDataset::builtin();
    let mut west = builtin.jurisdictions_in_region(Region::West).to_vec();
    west.push(Jurisdiction::Texas);
    let dataset = builtin.with_region(Region::West, west);

    let Err(ElectoralError::InvalidConfiguration(err)) =
        ElectoralEngine::new(dataset, EngineConfig::default())
    else {
        panic!("duplicate membership accepted");
    };
    assert!(err
        .violations
        .contains(&DatasetViolation::DuplicateAssignment("TX".into())));
}

#[test]
fn yaml_config_drives_cache_capacity() {
    let config = EngineConfig::from_yaml("cache_capacity: 1").unwrap();
    let engine = ElectoralEngine::new(ReferenceDataset::builtin(), config).unwrap();
    engine.compute_totals(&big_four()).unwrap();
    engine.compute_totals(&OutcomeAssignment::new()).unwrap();
    assert_eq!(engine.cache_stats().entries, 1);
    assert_eq!(engine.cache_stats().capacity, 1);
}

// ── Log stream ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

#[test]
fn events_are_emitted_inside_caller_span() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let engine = ElectoralEngine::initialize()
            .unwrap()
            .with_span(tracing::info_span!("election_night", desk = "decision"));
        engine.compute_totals(&big_four()).unwrap();
        engine.compute_totals(&big_four()).unwrap();
        let bad = OutcomeAssignment::from_raw([("ZZ", "DEM")]);
        assert!(bad.is_err());
    });

    let logs = capture.contents();
    assert!(logs.contains("electoral engine initialized"), "{logs}");
    assert!(logs.contains("vote totals computed"), "{logs}");
    assert!(logs.contains("cache hit"), "{logs}");
    assert!(logs.contains("election_night"), "{logs}");
    assert!(logs.contains("invalid jurisdictions"), "{logs}");
}
