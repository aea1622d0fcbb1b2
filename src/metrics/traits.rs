//! # Metrics Traits
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │   written by the engine
//!   │  hit/miss/insert/evict      │
//!   └──────────────┬──────────────┘
//!                  │
//!   ┌──────────────┴───────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! ## Design Goals
//! - **Single responsibility**: recorders only write counters; providers only
//!   read/snapshot; exporters only publish to monitoring systems.
//! - **Non-functional**: nothing recorded here may change what the cache
//!   stores or evicts.

/// Counters maintained by the cache engine.
pub trait CoreMetricsRecorder {
    /// A `touch`/`get`/`insert` found its key.
    fn record_hit(&mut self);
    /// A `touch`/`get`/`insert` did not find its key.
    fn record_miss(&mut self);
    /// `insert` created a new entry.
    fn record_insert_new(&mut self);
    /// `insert` updated an existing entry in place.
    fn record_insert_update(&mut self);
    /// One entry was removed to make room, carrying `cost`.
    fn record_evicted_entry(&mut self, cost: usize);
    /// An insert was larger than the whole capacity and reset the cache.
    fn record_oversized_reset(&mut self);
    fn record_clear(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> Option<S>;
}

/// Export metrics to an external sink (e.g., Prometheus or OpenTelemetry).
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
