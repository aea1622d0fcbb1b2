//! Map facade: `(key, value)` pairs with per-entry cost.
//!
//! ## Example Usage
//!
//! ```
//! use costcache::{CacheMap, Mru};
//!
//! // 100 bytes of budget, values weighted by length.
//! let mut cache: CacheMap<&str, String> = CacheMap::new(100);
//! for (key, body) in [("a", "x".repeat(40)), ("b", "y".repeat(40))] {
//!     let cost = body.len();
//!     cache.insert(key, body, cost).unwrap();
//! }
//! assert_eq!(cache.cost(), 80);
//!
//! // 30 more bytes do not fit: the least recently used entry goes.
//! cache.insert("c", "z".repeat(30), 30).unwrap();
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.cost(), 70);
//!
//! // Indexing semantics: promote on hit, default-insert on miss.
//! *cache.get_or_insert_default("d").unwrap() += "hello";
//! assert_eq!(cache.peek(&"d").map(String::as_str), Some("hello"));
//!
//! let mru: CacheMap<u32, u32, Mru> = CacheMap::new(2);
//! assert_eq!(mru.max_cost(), 2);
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::cache::core::{CostCore, Iter};
use crate::cache::entry::{Entry, EntryId};
use crate::error::{InvalidCost, InvariantError};
use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
use crate::policy::{EvictionPolicy, Lru, PolicyKind};
use crate::traits::{CostCache, ReadOnlyCache};

/// Cost-bounded cache of `(K, V)` pairs.
///
/// `P` selects the eviction policy ([`Lru`] by default, or
/// [`Mru`](crate::Mru)); `S` is the hash builder used by the key index.
pub struct CacheMap<K, V, P = Lru, S = FxBuildHasher> {
    core: CostCore<K, V, P, S>,
}

impl<K, V, P> CacheMap<K, V, P, FxBuildHasher>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    /// Creates an empty map holding at most `max_cost` units of cost.
    pub fn new(max_cost: usize) -> Self {
        Self::with_hasher(max_cost, FxBuildHasher)
    }
}

impl<K, V, P, S> CacheMap<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    /// Creates an empty map that hashes keys with `hasher`.
    pub fn with_hasher(max_cost: usize, hasher: S) -> Self {
        Self {
            core: CostCore::new(max_cost, 0, hasher, false),
        }
    }

    pub(crate) fn from_core(core: CostCore<K, V, P, S>) -> Self {
        Self { core }
    }

    /// Inserts or updates `key` with `value`, charging `cost`.
    ///
    /// Evicts other entries per the policy until the new cost fits. A `cost`
    /// above [`max_cost`](Self::max_cost) clears the whole map and returns
    /// `Ok(None)`; a `cost` of zero is rejected.
    #[inline]
    pub fn insert(
        &mut self,
        key: K,
        value: V,
        cost: usize,
    ) -> Result<Option<EntryId>, InvalidCost> {
        self.core.insert(key, value, cost)
    }

    /// Inserts with the default unit cost.
    #[inline]
    pub fn insert_unit(&mut self, key: K, value: V) -> Option<EntryId> {
        self.core.insert(key, value, 1).ok().flatten()
    }

    /// Promotes `key` on a hit; on a miss inserts `V::default()` at unit cost.
    ///
    /// Returns `None` only when a unit-cost entry cannot fit at all
    /// (`max_cost == 0`).
    pub fn get_or_insert_default(&mut self, key: K) -> Option<&mut V>
    where
        V: Default,
    {
        let id = match self.core.touch(&key) {
            Some(id) => id,
            None => self.core.insert_resolved(None, key, V::default(), 1)?,
        };
        self.core.value_mut(id)
    }

    /// Promotes `key` and returns its value.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.core.get(key).map(Entry::value)
    }

    /// Promotes `key` and returns its value mutably.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.core.get_mut(key)
    }

    /// Returns the value for `key` without promoting it.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.core.peek(key).map(Entry::value)
    }

    /// Promotes `key`; returns its handle on a hit.
    #[inline]
    pub fn touch(&mut self, key: &K) -> Option<EntryId> {
        self.core.touch(key)
    }

    /// Returns the handle for `key` without promoting it.
    #[inline]
    pub fn find(&self, key: &K) -> Option<EntryId> {
        self.core.find(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    /// Returns the live entry behind `id`.
    #[inline]
    pub fn entry(&self, id: EntryId) -> Option<&Entry<K, V>> {
        self.core.entry(id)
    }

    /// Cost currently charged by `key`.
    #[inline]
    pub fn cost_of(&self, key: &K) -> Option<usize> {
        self.core.peek(key).map(Entry::cost)
    }

    /// Removes `key`; returns how many entries were removed (0 or 1).
    #[inline]
    pub fn erase(&mut self, key: &K) -> usize {
        self.core.erase(key)
    }

    /// Removes the entry behind `id`; returns 0 for a stale handle.
    #[inline]
    pub fn erase_entry(&mut self, id: EntryId) -> usize {
        self.core.erase_entry(id)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.core.remove(key).map(|entry| entry.value)
    }

    /// Evicts the current victim and returns it.
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.core.pop().map(|entry| (entry.key, entry.value))
    }

    /// The pair [`pop`](Self::pop) would evict next.
    pub fn peek_victim(&self) -> Option<(&K, &V)> {
        self.core
            .peek_victim()
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Distance of `key` from the hot end (0 = hottest). O(n).
    #[inline]
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        self.core.recency_rank(key)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Iterates `(key, value)` pairs from the hot end to the cold end.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.core.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates full entries (with cost) from the hot end to the cold end.
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.core.iter()
    }

    /// Keys from the hot end to the cold end.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.core.iter().map(Entry::key)
    }

    /// Values from the hot end to the cold end.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.core.iter().map(Entry::value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.core.is_full()
    }

    /// Sum of the costs of all entries.
    #[inline]
    pub fn cost(&self) -> usize {
        self.core.cost()
    }

    #[inline]
    pub fn max_cost(&self) -> usize {
        self.core.max_cost()
    }

    #[inline]
    pub fn available(&self) -> usize {
        self.core.available()
    }

    #[inline]
    pub fn available_for(&self, cost: usize) -> Result<usize, InvalidCost> {
        self.core.available_for(cost)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    #[inline]
    pub fn capacity_for(&self, cost: usize) -> Result<usize, InvalidCost> {
        self.core.capacity_for(cost)
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.core.policy()
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.core.hasher()
    }

    /// Counter snapshot; `None` unless built with stats enabled.
    #[inline]
    pub fn stats(&self) -> Option<CacheMetricsSnapshot> {
        self.core.stats()
    }

    pub fn reset_stats(&mut self) {
        self.core.reset_stats();
    }

    #[inline]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core.check_invariants()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.core.debug_validate_invariants();
    }
}

impl<K, V, P, S> Extend<(K, V)> for CacheMap<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    /// Inserts every pair at unit cost, in iteration order.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_unit(key, value);
        }
    }
}

impl<K, V, P, S> fmt::Debug for CacheMap<K, V, P, S>
where
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheMap")
            .field("core", &self.core)
            .finish()
    }
}

impl<K, V, P, S> ReadOnlyCache<K> for CacheMap<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.core.len()
    }

    #[inline]
    fn cost(&self) -> usize {
        self.core.cost()
    }

    #[inline]
    fn max_cost(&self) -> usize {
        self.core.max_cost()
    }
}

impl<K, V, P, S> CostCache<K> for CacheMap<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        self.core.touch(key).is_some()
    }

    #[inline]
    fn erase(&mut self, key: &K) -> usize {
        self.core.erase(key)
    }

    fn evict_one(&mut self) -> Option<K> {
        self.core.pop().map(|entry| entry.key)
    }

    fn clear(&mut self) {
        self.core.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core.check_invariants()
    }
}

impl<K, V, P, S> MetricsSnapshotProvider<CacheMetricsSnapshot> for CacheMap<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    fn snapshot(&self) -> Option<CacheMetricsSnapshot> {
        self.core.stats()
    }
}
