use crate::ds::SlotId;

/// One cached key, its payload and the cost it charges against capacity.
///
/// Entries are owned by the recency sequence; callers only ever see shared
/// references obtained through an [`EntryId`] or an iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) cost: usize,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Cost charged by this entry; always at least 1.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cost
    }
}

/// Stable handle to a live entry.
///
/// An `EntryId` stays valid while its entry is promoted, updated in place or
/// while other entries come and go. Erasing or evicting the entry (or
/// clearing the cache) invalidates it for good: lookups through a stale id
/// return `None`, even after the underlying slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) SlotId);

impl EntryId {
    #[inline]
    pub(crate) fn slot(self) -> SlotId {
        self.0
    }
}
