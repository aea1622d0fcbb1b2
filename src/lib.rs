//! costcache: cost-bounded LRU/MRU caches with stable entry handles.
//!
//! Every entry carries a cost of at least 1; the cache keeps the sum of costs
//! at or below `max_cost`, evicting per the selected policy when a new entry
//! does not fit. See [`cache::core`] for the engine and its invariants.
//!
//! ```
//! use costcache::{CacheMap, Lru};
//!
//! let mut cache: CacheMap<&str, Vec<u8>, Lru> = CacheMap::new(8);
//! cache.insert("small", vec![0; 2], 2).unwrap();
//! cache.insert("large", vec![0; 6], 6).unwrap();
//! cache.touch(&"small");
//! cache.insert("medium", vec![0; 3], 3).unwrap();
//!
//! assert!(!cache.contains(&"large"));
//! assert_eq!(cache.cost(), 5);
//! ```

pub mod builder;
pub mod cache;
pub mod ds;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::{Cache, CacheBuilder};
pub use crate::cache::{CacheMap, CacheSet, Entry, EntryId};
pub use crate::error::{InvalidCost, InvariantError};
pub use crate::metrics::CacheMetricsSnapshot;
pub use crate::policy::{Lru, Mru, PolicyKind};
