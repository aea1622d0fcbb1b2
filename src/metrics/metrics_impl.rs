use crate::metrics::snapshot::CacheMetricsSnapshot;
use crate::metrics::traits::CoreMetricsRecorder;

/// Hit/miss and eviction counters for one cache.
///
/// `references` counts every lookup that can promote an entry (`touch`,
/// `get`, `insert`); `hits + misses == references` always holds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub references: u64,
    pub hits: u64,
    pub misses: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub evicted_entries: u64,
    pub evicted_cost: u64,
    pub oversized_resets: u64,
    pub clears: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot, pairing the counters with the current gauges.
    pub fn snapshot(
        &self,
        len: usize,
        total_cost: usize,
        max_cost: usize,
    ) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            references: self.references,
            hits: self.hits,
            misses: self.misses,
            insert_new: self.insert_new,
            insert_updates: self.insert_updates,
            evicted_entries: self.evicted_entries,
            evicted_cost: self.evicted_cost,
            oversized_resets: self.oversized_resets,
            clears: self.clears,
            cache_len: len,
            total_cost,
            max_cost,
        }
    }
}

impl CoreMetricsRecorder for CacheStats {
    fn record_hit(&mut self) {
        self.references += 1;
        self.hits += 1;
    }
    fn record_miss(&mut self) {
        self.references += 1;
        self.misses += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }
    fn record_evicted_entry(&mut self, cost: usize) {
        self.evicted_entries += 1;
        self.evicted_cost += cost as u64;
    }
    fn record_oversized_reset(&mut self) {
        self.oversized_resets += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}
