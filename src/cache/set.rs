//! Set facade: keys only, each with a cost.
//!
//! ## Example Usage
//!
//! ```
//! use costcache::CacheSet;
//!
//! let mut seen: CacheSet<u64> = CacheSet::new(3);
//! seen.insert(10, 2).unwrap();
//! seen.insert_unit(20);
//! assert!(seen.is_full());
//!
//! seen.insert_unit(30);
//! assert!(!seen.contains(&10));
//! assert_eq!(seen.iter().copied().collect::<Vec<_>>(), vec![30, 20]);
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::cache::core::CostCore;
use crate::cache::entry::{Entry, EntryId};
use crate::error::{InvalidCost, InvariantError};
use crate::metrics::{CacheMetricsSnapshot, MetricsSnapshotProvider};
use crate::policy::{EvictionPolicy, Lru, PolicyKind};
use crate::traits::{CostCache, ReadOnlyCache};

/// Cost-bounded set of keys.
pub struct CacheSet<K, P = Lru, S = FxBuildHasher> {
    core: CostCore<K, (), P, S>,
}

impl<K, P> CacheSet<K, P, FxBuildHasher>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
{
    pub fn new(max_cost: usize) -> Self {
        Self::with_hasher(max_cost, FxBuildHasher)
    }
}

impl<K, P, S> CacheSet<K, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    pub fn with_hasher(max_cost: usize, hasher: S) -> Self {
        Self {
            core: CostCore::new(max_cost, 0, hasher, false),
        }
    }

    pub(crate) fn from_core(core: CostCore<K, (), P, S>) -> Self {
        Self { core }
    }

    /// Inserts `key` charging `cost`, or updates the cost if already present.
    ///
    /// Same eviction rules as [`CacheMap::insert`](crate::CacheMap::insert).
    #[inline]
    pub fn insert(&mut self, key: K, cost: usize) -> Result<Option<EntryId>, InvalidCost> {
        self.core.insert(key, (), cost)
    }

    #[inline]
    pub fn insert_unit(&mut self, key: K) -> Option<EntryId> {
        self.core.insert(key, (), 1).ok().flatten()
    }

    /// Promotes `key`; returns its handle on a hit.
    #[inline]
    pub fn touch(&mut self, key: &K) -> Option<EntryId> {
        self.core.touch(key)
    }

    #[inline]
    pub fn find(&self, key: &K) -> Option<EntryId> {
        self.core.find(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    /// Key behind `id`, if the handle is still live.
    #[inline]
    pub fn key_of(&self, id: EntryId) -> Option<&K> {
        self.core.entry(id).map(Entry::key)
    }

    #[inline]
    pub fn cost_of(&self, key: &K) -> Option<usize> {
        self.core.peek(key).map(Entry::cost)
    }

    #[inline]
    pub fn erase(&mut self, key: &K) -> usize {
        self.core.erase(key)
    }

    #[inline]
    pub fn erase_entry(&mut self, id: EntryId) -> usize {
        self.core.erase_entry(id)
    }

    /// Removes `key`; returns whether it was present.
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        self.core.remove(key).is_some()
    }

    /// Evicts the current victim and returns its key.
    pub fn pop(&mut self) -> Option<K> {
        self.core.pop().map(|entry| entry.key)
    }

    pub fn peek_victim(&self) -> Option<&K> {
        self.core.peek_victim().map(Entry::key)
    }

    #[inline]
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        self.core.recency_rank(key)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Keys from the hot end to the cold end.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &K> + '_ {
        self.core.iter().map(Entry::key)
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

impl<K, P, S> Extend<K> for CacheSet<K, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert_unit(key);
        }
    }
}

impl<K, P, S> fmt::Debug for CacheSet<K, P, S>
where
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSet")
            .field("core", &self.core)
            .finish()
    }
}

impl<K, P, S> ReadOnlyCache<K> for CacheSet<K, P, S>
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

impl<K, P, S> CostCache<K> for CacheSet<K, P, S>
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
        self.pop()
    }

    fn clear(&mut self) {
        self.core.clear();
    }

    fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core.check_invariants()
    }
}

impl<K, P, S> MetricsSnapshotProvider<CacheMetricsSnapshot> for CacheSet<K, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    fn snapshot(&self) -> Option<CacheMetricsSnapshot> {
        self.core.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Mru;

    #[test]
    fn insert_charges_cost() {
        let mut set: CacheSet<&str> = CacheSet::new(10);
        set.insert("a", 4).unwrap();
        set.insert_unit("b");
        assert_eq!(set.cost(), 5);
        assert_eq!(set.cost_of(&"a"), Some(4));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn zero_cost_is_rejected() {
        let mut set: CacheSet<&str> = CacheSet::new(10);
        assert_eq!(set.insert("a", 0), Err(InvalidCost));
        assert!(set.is_empty());
    }

    #[test]
    fn reinsert_changes_cost_only() {
        let mut set: CacheSet<u32> = CacheSet::new(10);
        let id = set.insert(1, 2).unwrap();
        assert_eq!(set.insert(1, 5).unwrap(), id);
        assert_eq!(set.len(), 1);
        assert_eq!(set.cost(), 5);
    }

    #[test]
    fn pop_follows_policy() {
        let mut lru: CacheSet<u32> = CacheSet::new(10);
        lru.extend([1, 2, 3]);
        assert_eq!(lru.peek_victim(), Some(&1));
        assert_eq!(lru.pop(), Some(1));

        let mut mru: CacheSet<u32, Mru> = CacheSet::new(10);
        mru.extend([1, 2, 3]);
        assert_eq!(mru.pop(), Some(3));
        assert_eq!(mru.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn remove_and_erase() {
        let mut set: CacheSet<u32> = CacheSet::new(10);
        set.extend([1, 2]);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(set.erase(&2), 1);
        assert_eq!(set.erase(&2), 0);
        assert_eq!(set.cost(), 0);
    }

    #[test]
    fn handle_lookup() {
        let mut set: CacheSet<String> = CacheSet::new(4);
        let id = set.insert_unit("k".to_string()).unwrap();
        assert_eq!(set.key_of(id).map(String::as_str), Some("k"));
        assert_eq!(set.erase_entry(id), 1);
        assert_eq!(set.key_of(id), None);
    }

    #[test]
    fn oversized_insert_empties_set() {
        let mut set: CacheSet<u32> = CacheSet::new(4);
        set.extend([1, 2, 3]);
        assert_eq!(set.insert(9, 5), Ok(None));
        assert!(set.is_empty());
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn evict_one_through_trait() {
        let mut set: CacheSet<u32> = CacheSet::new(4);
        set.extend([1, 2]);
        assert_eq!(CostCache::evict_one(&mut set), Some(1));
        assert_eq!(ReadOnlyCache::len(&set), 1);
    }
}
