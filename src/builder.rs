//! Cache builder and runtime-selected cache.
//!
//! [`CacheBuilder`] gathers the construction options shared by every cache
//! type (capacity, pre-sizing, statistics) and produces either a statically
//! typed [`CacheMap`] / [`CacheSet`] or a [`Cache`] whose policy is picked at
//! run time from a [`PolicyKind`].
//!
//! ## Example
//!
//! ```rust
//! use costcache::builder::CacheBuilder;
//! use costcache::policy::PolicyKind;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .with_stats(true)
//!     .build::<u64, String>(PolicyKind::Lru);
//! cache.insert(1, "hello".to_string(), 5).unwrap();
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.stats().map(|s| s.hits), Some(1));
//! ```

use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::cache::{CacheMap, CacheSet, CostCore, EntryId};
use crate::error::InvalidCost;
use crate::metrics::CacheMetricsSnapshot;
use crate::policy::{EvictionPolicy, Lru, Mru, PolicyKind};

/// Cache whose eviction policy is chosen at run time.
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: CacheInner<K, V>,
}

#[derive(Debug)]
enum CacheInner<K, V> {
    Lru(CacheMap<K, V, Lru>),
    Mru(CacheMap<K, V, Mru>),
}

impl<K, V> Cache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Inserts or updates `key`; see [`CacheMap::insert`].
    pub fn insert(&mut self, key: K, value: V, cost: usize) -> Result<Option<EntryId>, InvalidCost> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.insert(key, value, cost),
            CacheInner::Mru(mru) => mru.insert(key, value, cost),
        }
    }

    /// Inserts with unit cost.
    pub fn insert_unit(&mut self, key: K, value: V) -> Option<EntryId> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.insert_unit(key, value),
            CacheInner::Mru(mru) => mru.insert_unit(key, value),
        }
    }

    /// Get a reference to a value by key, promoting it.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.get(key),
            CacheInner::Mru(mru) => mru.get(key),
        }
    }

    /// Get a reference to a value without promoting it.
    pub fn peek(&self, key: &K) -> Option<&V> {
        match &self.inner {
            CacheInner::Lru(lru) => lru.peek(key),
            CacheInner::Mru(mru) => mru.peek(key),
        }
    }

    /// Promote a key; returns whether it was present.
    pub fn touch(&mut self, key: &K) -> bool {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.touch(key).is_some(),
            CacheInner::Mru(mru) => mru.touch(key).is_some(),
        }
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Lru(lru) => lru.contains(key),
            CacheInner::Mru(mru) => mru.contains(key),
        }
    }

    /// Remove a key; returns the number of entries removed.
    pub fn erase(&mut self, key: &K) -> usize {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.erase(key),
            CacheInner::Mru(mru) => mru.erase(key),
        }
    }

    /// Remove a key and return its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.remove(key),
            CacheInner::Mru(mru) => mru.remove(key),
        }
    }

    /// Evict the policy's current victim.
    pub fn pop(&mut self) -> Option<(K, V)> {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.pop(),
            CacheInner::Mru(mru) => mru.pop(),
        }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(lru) => lru.len(),
            CacheInner::Mru(mru) => mru.len(),
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the running cost of all entries.
    pub fn cost(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(lru) => lru.cost(),
            CacheInner::Mru(mru) => mru.cost(),
        }
    }

    /// Return the cost capacity.
    pub fn max_cost(&self) -> usize {
        match &self.inner {
            CacheInner::Lru(lru) => lru.max_cost(),
            CacheInner::Mru(mru) => mru.max_cost(),
        }
    }

    pub fn policy(&self) -> PolicyKind {
        match &self.inner {
            CacheInner::Lru(_) => PolicyKind::Lru,
            CacheInner::Mru(_) => PolicyKind::Mru,
        }
    }

    pub fn stats(&self) -> Option<CacheMetricsSnapshot> {
        match &self.inner {
            CacheInner::Lru(lru) => lru.stats(),
            CacheInner::Mru(mru) => mru.stats(),
        }
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Lru(lru) => lru.clear(),
            CacheInner::Mru(mru) => mru.clear(),
        }
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    max_cost: usize,
    capacity_hint: usize,
    track_stats: bool,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified cost capacity.
    pub fn new(max_cost: usize) -> Self {
        Self {
            max_cost,
            capacity_hint: 0,
            track_stats: false,
        }
    }

    /// Enable or disable hit/miss/eviction counters.
    pub fn with_stats(mut self, enabled: bool) -> Self {
        self.track_stats = enabled;
        self
    }

    /// Pre-size storage for `entries` entries. Does not limit anything.
    pub fn with_capacity_hint(mut self, entries: usize) -> Self {
        self.capacity_hint = entries;
        self
    }

    pub fn max_cost(&self) -> usize {
        self.max_cost
    }

    fn core<K, V, P, S>(&self, hasher: S) -> CostCore<K, V, P, S>
    where
        K: Clone + Eq + Hash,
        P: EvictionPolicy,
        S: BuildHasher,
    {
        CostCore::new(self.max_cost, self.capacity_hint, hasher, self.track_stats)
    }

    /// Build a map with the policy chosen by type.
    pub fn build_map<K, V, P>(self) -> CacheMap<K, V, P>
    where
        K: Clone + Eq + Hash,
        P: EvictionPolicy,
    {
        self.build_map_with_hasher(FxBuildHasher)
    }

    pub fn build_map_with_hasher<K, V, P, S>(self, hasher: S) -> CacheMap<K, V, P, S>
    where
        K: Clone + Eq + Hash,
        P: EvictionPolicy,
        S: BuildHasher,
    {
        CacheMap::from_core(self.core(hasher))
    }

    /// Build a set with the policy chosen by type.
    pub fn build_set<K, P>(self) -> CacheSet<K, P>
    where
        K: Clone + Eq + Hash,
        P: EvictionPolicy,
    {
        self.build_set_with_hasher(FxBuildHasher)
    }

    pub fn build_set_with_hasher<K, P, S>(self, hasher: S) -> CacheSet<K, P, S>
    where
        K: Clone + Eq + Hash,
        P: EvictionPolicy,
        S: BuildHasher,
    {
        CacheSet::from_core(self.core(hasher))
    }

    /// Build a map with the specified policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use costcache::builder::CacheBuilder;
    /// use costcache::policy::PolicyKind;
    ///
    /// let lru = CacheBuilder::new(100).build::<u64, String>(PolicyKind::Lru);
    /// let mru = CacheBuilder::new(100).build::<u64, String>(PolicyKind::Mru);
    /// assert_eq!(lru.policy(), PolicyKind::Lru);
    /// assert_eq!(mru.policy(), PolicyKind::Mru);
    /// ```
    pub fn build<K, V>(self, policy: PolicyKind) -> Cache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        let inner = match policy {
            PolicyKind::Lru => CacheInner::Lru(self.build_map()),
            PolicyKind::Mru => CacheInner::Mru(self.build_map()),
        };

        Cache { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_policies_basic_ops() {
        for policy in [PolicyKind::Lru, PolicyKind::Mru] {
            let mut cache = CacheBuilder::new(10).build::<u64, String>(policy);
            assert_eq!(cache.policy(), policy);

            // Insert
            assert!(cache.insert(1, "one".to_string(), 2).unwrap().is_some());
            assert!(cache.insert_unit(2, "two".to_string()).is_some());
            assert_eq!(cache.cost(), 3);

            // Get
            assert_eq!(cache.get(&1), Some(&"one".to_string()));
            assert_eq!(cache.peek(&2), Some(&"two".to_string()));
            assert_eq!(cache.get(&3), None);

            // Contains
            assert!(cache.contains(&1));
            assert!(!cache.contains(&99));

            // Len
            assert_eq!(cache.len(), 2);
            assert!(!cache.is_empty());

            // Update
            cache.insert(1, "ONE".to_string(), 1).unwrap();
            assert_eq!(cache.get(&1), Some(&"ONE".to_string()));
            assert_eq!(cache.cost(), 2);

            // Zero cost
            assert_eq!(cache.insert(5, "five".to_string(), 0), Err(InvalidCost));

            // Remove
            assert_eq!(cache.remove(&2), Some("two".to_string()));
            assert_eq!(cache.erase(&2), 0);

            // Clear
            cache.clear();
            assert!(cache.is_empty());
            assert_eq!(cache.max_cost(), 10);
        }
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = CacheBuilder::new(2).build::<u64, &str>(PolicyKind::Lru);
        cache.insert_unit(1, "one");
        cache.insert_unit(2, "two");
        cache.insert_unit(3, "three");

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));

        let mut cache = CacheBuilder::new(2).build::<u64, &str>(PolicyKind::Mru);
        cache.insert_unit(1, "one");
        cache.insert_unit(2, "two");
        assert!(cache.touch(&1));
        cache.insert_unit(3, "three");
        assert!(!cache.contains(&1));
        assert_eq!(cache.pop(), Some((3, "three")));
    }

    #[test]
    fn stats_are_off_by_default() {
        let map = CacheBuilder::new(4).build_map::<u8, u8, Lru>();
        assert!(map.stats().is_none());

        let set = CacheBuilder::new(4).with_stats(true).build_set::<u8, Mru>();
        assert_eq!(set.stats().map(|s| s.max_cost), Some(4));
    }

    #[test]
    fn custom_hasher_and_hint() {
        use std::collections::hash_map::RandomState;

        let mut map = CacheBuilder::new(8)
            .with_capacity_hint(16)
            .build_map_with_hasher::<String, u8, Lru, _>(RandomState::new());
        map.insert_unit("a".into(), 1);
        assert_eq!(map.peek(&"a".to_string()), Some(&1));

        let set = CacheBuilder::new(8).build_set_with_hasher::<u8, Mru, _>(RandomState::new());
        assert_eq!(set.policy(), PolicyKind::Mru);
    }
}
