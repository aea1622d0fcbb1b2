//! # Cache Trait Hierarchy
//!
//! Policy-independent views of a cost-bounded cache, implemented by both
//! [`CacheMap`](crate::CacheMap) and [`CacheSet`](crate::CacheSet) for every
//! policy and hasher.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │           ReadOnlyCache<K>              │
//!   │                                         │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  cost(&) → usize                        │
//!   │  max_cost(&) → usize                    │
//!   │  is_full(&) → bool                      │
//!   │  available(&) → usize                   │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │             CostCache<K>                │
//!   │                                         │
//!   │  touch(&mut, &K) → bool                 │
//!   │  erase(&mut, &K) → usize                │
//!   │  evict_one(&mut) → Option<K>            │
//!   │  clear(&mut)                            │
//!   │  check_invariants(&) → Result           │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Insertion is not part of the hierarchy: a map inserts `(key, value, cost)`
//! and a set inserts `(key, cost)`, so the payload shape stays on the
//! concrete types.
//!
//! ## Example
//!
//! ```
//! use costcache::traits::CostCache;
//! use costcache::{CacheMap, CacheSet, Mru};
//!
//! fn invalidate<C: CostCache<u64>>(cache: &mut C, keys: &[u64]) -> usize {
//!     keys.iter().map(|key| cache.erase(key)).sum()
//! }
//!
//! let mut map: CacheMap<u64, &str> = CacheMap::new(10);
//! map.insert_unit(1, "one");
//! map.insert_unit(2, "two");
//! assert_eq!(invalidate(&mut map, &[1, 3]), 1);
//!
//! let mut set: CacheSet<u64, Mru> = CacheSet::new(10);
//! set.insert_unit(3);
//! assert_eq!(invalidate(&mut set, &[1, 3]), 1);
//! ```

use crate::error::InvariantError;

/// Non-mutating queries every cost-bounded cache answers.
pub trait ReadOnlyCache<K> {
    /// Checks if a key exists without changing recency.
    fn contains(&self, key: &K) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the costs of all live entries.
    fn cost(&self) -> usize;

    /// Configured cost capacity.
    fn max_cost(&self) -> usize;

    /// Returns `true` once the running cost has reached capacity.
    #[inline]
    fn is_full(&self) -> bool {
        self.cost() >= self.max_cost()
    }

    /// Capacity not yet charged.
    #[inline]
    fn available(&self) -> usize {
        self.max_cost().saturating_sub(self.cost())
    }
}

/// Mutations that do not depend on the payload shape.
///
/// # Example
///
/// ```
/// use costcache::traits::{CostCache, ReadOnlyCache};
/// use costcache::CacheSet;
///
/// fn drain_to<C: CostCache<u32>>(cache: &mut C, budget: usize) -> Vec<u32> {
///     let mut evicted = Vec::new();
///     while cache.cost() > budget {
///         match cache.evict_one() {
///             Some(key) => evicted.push(key),
///             None => break,
///         }
///     }
///     evicted
/// }
///
/// let mut set: CacheSet<u32> = CacheSet::new(10);
/// set.extend([1, 2, 3, 4]);
/// assert_eq!(drain_to(&mut set, 2), vec![1, 2]);
/// ```
pub trait CostCache<K>: ReadOnlyCache<K> {
    /// Promotes `key` per the eviction policy; returns whether it was present.
    fn touch(&mut self, key: &K) -> bool;

    /// Removes `key`; returns the number of entries removed (0 or 1).
    fn erase(&mut self, key: &K) -> usize;

    /// Evicts the policy's current victim and returns its key.
    fn evict_one(&mut self) -> Option<K>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Verifies the index, recency sequence and running cost agree.
    fn check_invariants(&self) -> Result<(), InvariantError>;
}
