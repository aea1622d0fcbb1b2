//! # Cost-bounded cache engine
//!
//! `CostCore` owns every entry in a recency sequence, indexes them by key,
//! and keeps the running cost of all live entries at or below `max_cost`.
//! The map and set facades are thin projections of this type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        CostCore<K, V, P, S>                          │
//!   │                                                                      │
//!   │   index: KeyIndex<K, S>          seq: IntrusiveList<Entry<K, V>>     │
//!   │   ┌─────────┬────────┐                                               │
//!   │   │   Key   │ SlotId │           hot end                  cold end   │
//!   │   ├─────────┼────────┤            │                            │     │
//!   │   │  "a"    │  id_2  │──────┐     ▼                            ▼     │
//!   │   │  "b"    │  id_0  │───┐  └──► [a:3] ◄──► [c:1] ◄──► [b:2]         │
//!   │   │  "c"    │  id_1  │─┐ │                   ▲           ▲           │
//!   │   └─────────┴────────┘ │ └───────────────────┼───────────┘           │
//!   │                        └─────────────────────┘                       │
//!   │                                                                      │
//!   │   total_cost = 3 + 1 + 2 = 6        max_cost = 8                     │
//!   │   stats: Option<CacheStats>                                          │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Insert Flow
//!
//! ```text
//!   insert(key, value, cost):
//!     cost == 0            → Err(InvalidCost), nothing changes
//!     cost > max_cost      → every entry evicted, Ok(None)
//!     hit:
//!       total_cost -= old cost
//!       cost == max_cost   → evict every other entry
//!       otherwise          → evict victims (never the hit entry) until it fits
//!       overwrite value + cost, promote
//!     miss:
//!       cost == max_cost   → evict everything in one step
//!       otherwise          → evict victims until it fits
//!       push at promotion point, register in index
//!     total_cost += cost
//! ```
//!
//! ## Invariants (checked by [`CostCore::check_invariants`])
//!
//! - index and sequence are in bijection
//! - every entry costs at least 1
//! - `total_cost` equals the sum of entry costs
//! - `total_cost <= max_cost` after every public operation
//!
//! ## Thread Safety
//!
//! Not synchronized. Wrap in a lock if it has to be shared.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::cache::entry::{Entry, EntryId};
use crate::cache::index::KeyIndex;
use crate::ds::intrusive_list::IntrusiveListIter;
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{InvalidCost, InvariantError};
use crate::metrics::{CacheMetricsSnapshot, CacheStats, CoreMetricsRecorder};
use crate::policy::{EvictionPolicy, PolicyKind};

/// The cache engine shared by [`CacheMap`](crate::CacheMap) and
/// [`CacheSet`](crate::CacheSet).
pub struct CostCore<K, V, P, S> {
    seq: IntrusiveList<Entry<K, V>>,
    index: KeyIndex<K, S>,
    max_cost: usize,
    total_cost: usize,
    stats: Option<CacheStats>,
    _policy: PhantomData<fn() -> P>,
}

impl<K, V, P, S> CostCore<K, V, P, S>
where
    K: Clone + Eq + Hash,
    P: EvictionPolicy,
    S: BuildHasher,
{
    /// Creates an engine with capacity `max_cost`.
    ///
    /// `capacity_hint` pre-sizes the index and the sequence for that many
    /// entries; it does not limit anything.
    pub fn new(max_cost: usize, capacity_hint: usize, hasher: S, track_stats: bool) -> Self {
        Self {
            seq: IntrusiveList::with_capacity(capacity_hint),
            index: KeyIndex::with_capacity_and_hasher(capacity_hint, hasher),
            max_cost,
            total_cost: 0,
            stats: track_stats.then(CacheStats::new),
            _policy: PhantomData,
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Inserts or updates `key`, charging `cost` against capacity.
    ///
    /// Returns the id of the resulting entry, or `Ok(None)` when `cost`
    /// exceeds `max_cost` (which evicts every entry, `key` included).
    pub fn insert(
        &mut self,
        key: K,
        value: V,
        cost: usize,
    ) -> Result<Option<EntryId>, InvalidCost> {
        if cost == 0 {
            return Err(InvalidCost);
        }
        let hit = self.index.get(&key);
        self.record_reference(hit.is_some());
        Ok(self.insert_resolved(hit, key, value, cost))
    }

    /// Insert path after the hit/miss lookup has been done and recorded.
    ///
    /// `cost` must already be validated as non-zero.
    pub(crate) fn insert_resolved(
        &mut self,
        hit: Option<SlotId>,
        key: K,
        value: V,
        cost: usize,
    ) -> Option<EntryId> {
        debug_assert!(cost > 0);
        if cost > self.max_cost {
            self.discard_all();
            if let Some(stats) = self.stats.as_mut() {
                stats.record_oversized_reset();
            }
            return None;
        }

        let id = match hit {
            Some(id) => self.update_in_place(id, value, cost),
            None => self.insert_new(key, value, cost),
        };
        self.total_cost += cost;
        debug_assert!(self.total_cost <= self.max_cost);
        Some(EntryId(id))
    }

    fn update_in_place(&mut self, id: SlotId, value: V, cost: usize) -> SlotId {
        let old_cost = self.seq.get(id).map_or(0, |entry| entry.cost);
        self.total_cost -= old_cost;

        if cost == self.max_cost {
            while let Some(victim) = self.victim_sparing(Some(id)) {
                self.evict(victim);
            }
        } else {
            self.make_room(cost, Some(id));
        }

        if let Some(entry) = self.seq.get_mut(id) {
            entry.value = value;
            entry.cost = cost;
        }
        P::promote(&mut self.seq, id);
        if let Some(stats) = self.stats.as_mut() {
            stats.record_insert_update();
        }
        id
    }

    fn insert_new(&mut self, key: K, value: V, cost: usize) -> SlotId {
        if cost == self.max_cost {
            self.discard_all();
        } else {
            self.make_room(cost, None);
        }

        // Grow both containers before either is touched so a failed
        // allocation cannot leave a half-registered entry.
        self.index.reserve(1);
        self.seq.reserve(1);

        let id = P::push(
            &mut self.seq,
            Entry {
                key: key.clone(),
                value,
                cost,
            },
        );
        self.index.insert(key, id);
        if let Some(stats) = self.stats.as_mut() {
            stats.record_insert_new();
        }
        id
    }

    /// Promotes `key` to the promotion point without touching its payload.
    pub fn touch(&mut self, key: &K) -> Option<EntryId> {
        let id = self.index.get(key);
        self.record_reference(id.is_some());
        let id = id?;
        P::promote(&mut self.seq, id);
        Some(EntryId(id))
    }

    /// Removes `key`; returns the number of entries removed (0 or 1).
    pub fn erase(&mut self, key: &K) -> usize {
        usize::from(self.remove(key).is_some())
    }

    /// Removes the entry behind `id`; returns 0 if the id is stale.
    pub fn erase_entry(&mut self, id: EntryId) -> usize {
        usize::from(self.remove_entry(id).is_some())
    }

    /// Removes `key` and returns its entry.
    pub fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let id = self.index.remove(key)?;
        let entry = self.seq.remove(id)?;
        self.total_cost -= entry.cost;
        Some(entry)
    }

    /// Removes the entry behind `id` and returns it.
    pub fn remove_entry(&mut self, id: EntryId) -> Option<Entry<K, V>> {
        let entry = self.seq.remove(id.slot())?;
        self.index.remove(&entry.key);
        self.total_cost -= entry.cost;
        Some(entry)
    }

    /// Evicts the current victim, regardless of free capacity.
    pub fn pop(&mut self) -> Option<Entry<K, V>> {
        let victim = P::victim(&self.seq)?;
        self.evict(victim)
    }

    /// Removes every entry and resets the running cost.
    pub fn clear(&mut self) {
        self.seq.clear();
        self.index.clear();
        self.total_cost = 0;
        if let Some(stats) = self.stats.as_mut() {
            stats.record_clear();
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Looks up `key` without promoting it.
    #[inline]
    pub fn find(&self, key: &K) -> Option<EntryId> {
        self.index.get(key).map(EntryId)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Promotes `key` and returns its entry.
    pub fn get(&mut self, key: &K) -> Option<&Entry<K, V>> {
        let id = self.touch(key)?;
        self.seq.get(id.slot())
    }

    /// Promotes `key` and returns its payload mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.touch(key)?;
        self.value_mut(id)
    }

    /// Returns the entry for `key` without promoting it.
    pub fn peek(&self, key: &K) -> Option<&Entry<K, V>> {
        let id = self.index.get(key)?;
        self.seq.get(id)
    }

    /// Returns the entry behind `id`, if it is still live.
    #[inline]
    pub fn entry(&self, id: EntryId) -> Option<&Entry<K, V>> {
        self.seq.get(id.slot())
    }

    /// Returns the payload behind `id` mutably, if it is still live.
    #[inline]
    pub fn value_mut(&mut self, id: EntryId) -> Option<&mut V> {
        self.seq.get_mut(id.slot()).map(|entry| &mut entry.value)
    }

    /// Returns the entry [`pop`](Self::pop) would remove next.
    pub fn peek_victim(&self) -> Option<&Entry<K, V>> {
        P::victim(&self.seq).and_then(|id| self.seq.get(id))
    }

    /// Distance of `key` from the hot end (0 = hottest). O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        let id = self.index.get(key)?;
        self.seq.iter_ids().position(|candidate| candidate == id)
    }

    /// Iterates entries from the hot end to the cold end.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.seq.iter(),
            remaining: self.seq.len(),
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// `true` when the running cost has reached `max_cost`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.total_cost == self.max_cost
    }

    /// Sum of the costs of all live entries.
    #[inline]
    pub fn cost(&self) -> usize {
        self.total_cost
    }

    #[inline]
    pub fn max_cost(&self) -> usize {
        self.max_cost
    }

    /// How many unit-cost entries still fit without evicting.
    #[inline]
    pub fn available(&self) -> usize {
        self.max_cost - self.total_cost
    }

    /// How many entries of `cost` still fit without evicting.
    pub fn available_for(&self, cost: usize) -> Result<usize, InvalidCost> {
        self.available().checked_div(cost).ok_or(InvalidCost)
    }

    /// How many unit-cost entries fit in an empty cache.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_cost
    }

    /// How many entries of `cost` fit in an empty cache.
    pub fn capacity_for(&self, cost: usize) -> Result<usize, InvalidCost> {
        self.max_cost.checked_div(cost).ok_or(InvalidCost)
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        P::KIND
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }

    // -----------------------------------------------------------------------
    // Instrumentation
    // -----------------------------------------------------------------------

    #[inline]
    pub fn stats_enabled(&self) -> bool {
        self.stats.is_some()
    }

    /// Snapshot of the counters, or `None` if stats are disabled.
    pub fn stats(&self) -> Option<CacheMetricsSnapshot> {
        self.stats
            .as_ref()
            .map(|stats| stats.snapshot(self.len(), self.total_cost, self.max_cost))
    }

    /// Zeroes the counters; a no-op when stats are disabled.
    pub fn reset_stats(&mut self) {
        if let Some(stats) = self.stats.as_mut() {
            *stats = CacheStats::new();
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Verifies the index/sequence bijection and the cost accounting.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.seq.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but sequence holds {} entries",
                self.index.len(),
                self.seq.len()
            )));
        }

        let mut sum = 0usize;
        for (position, (id, entry)) in self.seq.iter_entries().enumerate() {
            if entry.cost == 0 {
                return Err(InvariantError::new(format!(
                    "entry at position {} has zero cost",
                    position
                )));
            }
            if self.index.get(&entry.key) != Some(id) {
                return Err(InvariantError::new(format!(
                    "entry at position {} is not indexed under its key",
                    position
                )));
            }
            sum = sum.checked_add(entry.cost).ok_or_else(|| {
                InvariantError::new("sum of entry costs overflows usize")
            })?;
        }

        if sum != self.total_cost {
            return Err(InvariantError::new(format!(
                "total_cost is {} but entries sum to {}",
                self.total_cost, sum
            )));
        }
        if self.total_cost > self.max_cost {
            return Err(InvariantError::new(format!(
                "total_cost {} exceeds max_cost {}",
                self.total_cost, self.max_cost
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.seq.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("cache invariant violated: {}", err);
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Evicts victims until `cost` fits, never choosing `spare`.
    fn make_room(&mut self, cost: usize, spare: Option<SlotId>) {
        while cost > self.max_cost - self.total_cost {
            match self.victim_sparing(spare) {
                Some(victim) => {
                    self.evict(victim);
                },
                None => break,
            }
        }
    }

    fn victim_sparing(&self, spare: Option<SlotId>) -> Option<SlotId> {
        let victim = P::victim(&self.seq)?;
        if Some(victim) == spare {
            P::next_victim(&self.seq, victim)
        } else {
            Some(victim)
        }
    }

    fn evict(&mut self, id: SlotId) -> Option<Entry<K, V>> {
        let entry = self.seq.remove(id)?;
        self.index.remove(&entry.key);
        self.total_cost -= entry.cost;
        if let Some(stats) = self.stats.as_mut() {
            stats.record_evicted_entry(entry.cost);
        }
        Some(entry)
    }

    /// Evicts every entry in one step.
    fn discard_all(&mut self) {
        if let Some(stats) = self.stats.as_mut() {
            for entry in self.seq.iter() {
                stats.record_evicted_entry(entry.cost);
            }
        }
        self.seq.clear();
        self.index.clear();
        self.total_cost = 0;
    }

    #[inline]
    fn record_reference(&mut self, hit: bool) {
        if let Some(stats) = self.stats.as_mut() {
            if hit {
                stats.record_hit();
            } else {
                stats.record_miss();
            }
        }
    }
}

impl<K, V, P, S> fmt::Debug for CostCore<K, V, P, S>
where
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostCore")
            .field("policy", &P::KIND)
            .field("len", &self.seq.len())
            .field("total_cost", &self.total_cost)
            .field("max_cost", &self.max_cost)
            .finish_non_exhaustive()
    }
}

/// Iterator over entries from the hot end to the cold end.
pub struct Iter<'a, K, V> {
    inner: IntrusiveListIter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.next()?;
        self.remaining -= 1;
        Some(entry)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
