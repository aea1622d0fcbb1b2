//! Optional cache instrumentation.
//!
//! Recording, snapshotting and export are separate concerns:
//!
//! ```text
//!   CostCore ──record_*──► CacheStats ──snapshot()──► CacheMetricsSnapshot
//!                                                        │
//!                                                        ▼
//!                                         MetricsExporter (Prometheus text)
//! ```
//!
//! Stats are enabled per cache at construction time (see
//! [`CacheBuilder::with_stats`](crate::builder::CacheBuilder::with_stats)).
//! A cache built without stats carries `None` and skips every recorder call.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::CacheStats;
pub use snapshot::CacheMetricsSnapshot;
pub use traits::{CoreMetricsRecorder, MetricsExporter, MetricsSnapshotProvider};
