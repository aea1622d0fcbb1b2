//! LRU (Least Recently Used) eviction.
//!
//! Inserted and accessed entries move to the hot end; the entry nearest the
//! cold end is evicted first.
//!
//! ```text
//!   capacity 3, unit costs
//!
//!   insert 1, 2, 3   hot ─► [3] [2] [1] ◄─ cold
//!   insert 4         hot ─► [4] [3] [2] ◄─ cold     (1 evicted)
//!   touch 2          hot ─► [2] [4] [3] ◄─ cold
//!   insert 5         hot ─► [5] [2] [4] ◄─ cold     (3 evicted)
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use costcache::policy::lru::LruCache;
//!
//! let mut cache: LruCache<u32, &str> = LruCache::new(2);
//! cache.insert_unit(1, "one");
//! cache.insert_unit(2, "two");
//! cache.touch(&1);
//! cache.insert_unit(3, "three");
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! ```

use rustc_hash::FxBuildHasher;

use crate::cache::{CacheMap, CacheSet};
use crate::ds::{IntrusiveList, SlotId};
use crate::policy::{EvictionPolicy, PolicyKind};

/// Least-recently-used strategy: victim at the cold end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lru;

impl EvictionPolicy for Lru {
    const KIND: PolicyKind = PolicyKind::Lru;

    #[inline]
    fn victim<T>(seq: &IntrusiveList<T>) -> Option<SlotId> {
        seq.back_id()
    }

    #[inline]
    fn next_victim<T>(seq: &IntrusiveList<T>, id: SlotId) -> Option<SlotId> {
        seq.prev_id(id)
    }
}

/// Cost-bounded LRU map.
pub type LruCache<K, V, S = FxBuildHasher> = CacheMap<K, V, Lru, S>;

/// Cost-bounded LRU set.
pub type LruSet<K, S = FxBuildHasher> = CacheSet<K, Lru, S>;
