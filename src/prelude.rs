pub use crate::builder::{Cache, CacheBuilder};
pub use crate::cache::{CacheMap, CacheSet, Entry, EntryId};
pub use crate::error::InvalidCost;
pub use crate::policy::lru::{LruCache, LruSet};
pub use crate::policy::mru::{MruCache, MruSet};
pub use crate::policy::{EvictionPolicy, Lru, Mru, PolicyKind};
pub use crate::traits::{CostCache, ReadOnlyCache};
