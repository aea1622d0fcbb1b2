//! Key → position index.
//!
//! A hash map from key to the [`SlotId`] of the entry's node in the recency
//! sequence. The index never owns entries; it is a back-reference used only
//! for O(1) hit/miss detection and must be kept in bijection with the
//! sequence by the engine.
//!
//! The key is stored as an owned copy. The sequence also owns a copy inside
//! the entry, so `K: Clone` is required; cheap-to-clone keys (integers,
//! `Arc<str>`, small strings) keep the duplication negligible.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::ds::SlotId;

#[derive(Debug, Clone)]
pub(crate) struct KeyIndex<K, S> {
    map: HashMap<K, SlotId, S>,
}

impl<K, S> KeyIndex<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline]
    pub(crate) fn get(&self, key: &K) -> Option<SlotId> {
        self.map.get(key).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Registers `key`; returns the id it previously mapped to, if any.
    #[inline]
    pub(crate) fn insert(&mut self, key: K, id: SlotId) -> Option<SlotId> {
        self.map.insert(key, id)
    }

    #[inline]
    pub(crate) fn remove(&mut self, key: &K) -> Option<SlotId> {
        self.map.remove(key)
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub(crate) fn hasher(&self) -> &S {
        self.map.hasher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::SlotArena;
    use rustc_hash::FxBuildHasher;

    #[test]
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert(());
        let b = arena.insert(());

        let mut index = KeyIndex::with_capacity_and_hasher(4, FxBuildHasher);
        assert_eq!(index.insert("a", a), None);
        assert_eq!(index.insert("b", b), None);
        assert_eq!(index.len(), 2);
        assert!(index.contains(&"a"));
        assert_eq!(index.get(&"b"), Some(b));

        assert_eq!(index.remove(&"a"), Some(a));
        assert_eq!(index.remove(&"a"), None);
        assert!(!index.contains(&"a"));
        assert_eq!(index.len(), 1);

        index.clear();
        assert_eq!(index.len(), 0);
        assert_eq!(index.get(&"b"), None);
    }

    #[test]
    fn reinsert_reports_previous_id() {
        let mut arena = SlotArena::new();
        let a = arena.insert(());
        let b = arena.insert(());

        let mut index = KeyIndex::with_capacity_and_hasher(0, FxBuildHasher);
        index.insert(1u32, a);
        assert_eq!(index.insert(1u32, b), Some(a));
        assert_eq!(index.get(&1), Some(b));
    }
}
