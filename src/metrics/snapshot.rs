#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CacheMetricsSnapshot {
    pub references: u64,
    pub hits: u64,
    pub misses: u64,

    pub insert_new: u64,
    pub insert_updates: u64,

    pub evicted_entries: u64,
    pub evicted_cost: u64,
    pub oversized_resets: u64,
    pub clears: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub total_cost: usize,
    pub max_cost: usize,
}

impl CacheMetricsSnapshot {
    /// Fraction of references that hit, or `0.0` before the first reference.
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that missed, or `0.0` before the first reference.
    pub fn miss_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.misses as f64 / self.references as f64
        }
    }

    /// Share of `max_cost` currently in use.
    pub fn utilization(&self) -> f64 {
        if self.max_cost == 0 {
            0.0
        } else {
            self.total_cost as f64 / self.max_cost as f64
        }
    }
}
