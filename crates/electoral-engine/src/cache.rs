//! # Memoization Cache
//!
//! Bounded least-recently-used map from a canonical query key to a computed
//! value. The engine uses it to skip re-aggregating assignments it has
//! already seen.
//!
//! The key is the sorted decided pairs plus the sorted uncalled set, so two
//! assignments built in different orders (or differing only in explicit
//! `undecided` entries) share an entry.
//!
//! All state sits behind one `parking_lot::Mutex`. Lookups are short and
//! never hold the lock across computation; two threads missing on the same
//! key may both compute, and the second insert simply overwrites the first
//! with an equal value.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use electoral_core::{Contender, Jurisdiction, ReferenceDataset};

use crate::assignment::OutcomeAssignment;

/// Order-independent identity of an (assignment, uncalled-set) query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    decided: Vec<(Jurisdiction, Contender)>,
    uncalled: Vec<Jurisdiction>,
}

impl CacheKey {
    pub fn new(assignment: &OutcomeAssignment, dataset: &ReferenceDataset) -> Self {
        Self {
            decided: assignment.canonical_pairs(),
            uncalled: assignment.uncalled(dataset),
        }
    }
}

/// Hit and miss counters, plus current occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub capacity: usize,
}

#[derive(Debug)]
struct Slot<V> {
    value: V,
    last_used: u64,
}

#[derive(Debug)]
struct LruState<V> {
    slots: HashMap<CacheKey, Slot<V>>,
    tick: u64,
    hits: u64,
    misses: u64,
}

/// Bounded LRU cache. A capacity of zero disables it: every lookup misses
/// and nothing is stored.
#[derive(Debug)]
pub struct ResultCache<V> {
    capacity: usize,
    state: Mutex<LruState<V>>,
}

impl<V: Clone> ResultCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(LruState {
                slots: HashMap::new(),
                tick: 0,
                hits: 0,
                misses: 0,
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Clone of the cached value, refreshing its recency.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let mut state = self.state.lock();
        state.tick += 1;
        let tick = state.tick;
        let found = state.slots.get_mut(key).map(|slot| {
            slot.last_used = tick;
            slot.value.clone()
        });
        if found.is_some() {
            state.hits += 1;
        } else {
            state.misses += 1;
        }
        found
    }

    /// Store `value`, evicting the least recently used entry when full.
    pub fn insert(&self, key: CacheKey, value: V) {
        if !self.is_enabled() {
            return;
        }
        let mut state = self.state.lock();
        state.tick += 1;
        let tick = state.tick;
        if !state.slots.contains_key(&key) && state.slots.len() >= self.capacity {
            let oldest = state
                .slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                state.slots.remove(&oldest);
            }
        }
        state.slots.insert(
            key,
            Slot {
                value,
                last_used: tick,
            },
        );
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.slots.len(),
            capacity: self.capacity,
        }
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        self.state.lock().slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Contender::*;
    use Jurisdiction::*;

    fn key(a: &OutcomeAssignment) -> CacheKey {
        CacheKey::new(a, &ReferenceDataset::builtin())
    }

    #[test]
    fn key_ignores_construction_order_and_explicit_undecided() {
        let a = OutcomeAssignment::new().call(Texas, Republican).call(Ohio, Democratic);
        let b = OutcomeAssignment::new()
            .undecided(Georgia)
            .call(Ohio, Democratic)
            .call(Texas, Republican);
        assert_eq!(key(&a), key(&b));
        let c = OutcomeAssignment::new().call(Texas, Republican).call(Ohio, Republican);
        assert_ne!(key(&a), key(&c));
    }

    #[test]
    fn hit_and_miss_are_counted() {
        let cache = ResultCache::new(4);
        let k = key(&OutcomeAssignment::new().call(Iowa, Green));
        assert_eq!(cache.get(&k), None::<u32>);
        cache.insert(k.clone(), 7);
        assert_eq!(cache.get(&k), Some(7));
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let cache = ResultCache::new(2);
        let ka = key(&OutcomeAssignment::new().call(Iowa, Green));
        let kb = key(&OutcomeAssignment::new().call(Utah, Green));
        let kc = key(&OutcomeAssignment::new().call(Idaho, Green));
        cache.insert(ka.clone(), 1);
        cache.insert(kb.clone(), 2);
        // Touch `ka` so `kb` becomes the eviction candidate.
        assert_eq!(cache.get(&ka), Some(1));
        cache.insert(kc.clone(), 3);

        assert_eq!(cache.stats().entries, 2);
        assert_eq!(cache.get(&kb), None);
        assert_eq!(cache.get(&ka), Some(1));
        assert_eq!(cache.get(&kc), Some(3));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = ResultCache::new(0);
        let k = key(&OutcomeAssignment::new());
        cache.insert(k.clone(), 1);
        assert_eq!(cache.get(&k), None);
        assert!(!cache.is_enabled());
        assert_eq!(cache.stats().entries, 0);
    }

    #[test]
    fn reinserting_existing_key_does_not_evict() {
        let cache = ResultCache::new(1);
        let k = key(&OutcomeAssignment::new().call(Iowa, Green));
        cache.insert(k.clone(), 1);
        cache.insert(k.clone(), 2);
        assert_eq!(cache.get(&k), Some(2));
        assert_eq!(cache.stats().entries, 1);
    }
}
