//! MRU (Most Recently Used) eviction.
//!
//! Evicts the **most** recently touched entry when room is needed. This is
//! the opposite of LRU and only pays off for cyclic or sequential scans, where
//! the entry just used is the one least likely to be used again soon.
//!
//! ```text
//!   head (hot end - EVICT FROM HERE)           tail (cold end - keep)
//!    [ptr_2] ◄──► [ptr_1] ◄──► [ptr_0]
//!    newest       middle       oldest
//!
//!   • New items enter at the hot end
//!   • Accessed items move to the hot end
//!   • Eviction also happens at the hot end
//! ```
//!
//! **Use MRU when** access patterns are cyclic and predictable.
//! **Avoid MRU** for general-purpose caching where temporal locality matters.
//!
//! ## Example Usage
//!
//! ```
//! use costcache::policy::mru::MruCache;
//!
//! let mut cache: MruCache<u32, &str> = MruCache::new(2);
//! cache.insert_unit(1, "one");
//! cache.insert_unit(2, "two");
//! cache.insert_unit(3, "three");
//!
//! // 2 was the most recently inserted, so it went first.
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! assert!(cache.contains(&3));
//! ```

use rustc_hash::FxBuildHasher;

use crate::cache::{CacheMap, CacheSet};
use crate::ds::{IntrusiveList, SlotId};
use crate::policy::{EvictionPolicy, PolicyKind};

/// Most-recently-used strategy: victim at the hot end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mru;

impl EvictionPolicy for Mru {
    const KIND: PolicyKind = PolicyKind::Mru;

    #[inline]
    fn victim<T>(seq: &IntrusiveList<T>) -> Option<SlotId> {
        seq.front_id()
    }

    #[inline]
    fn next_victim<T>(seq: &IntrusiveList<T>, id: SlotId) -> Option<SlotId> {
        seq.next_id(id)
    }
}

/// Cost-bounded MRU map.
pub type MruCache<K, V, S = FxBuildHasher> = CacheMap<K, V, Mru, S>;

/// Cost-bounded MRU set.
pub type MruSet<K, S = FxBuildHasher> = CacheSet<K, Mru, S>;
