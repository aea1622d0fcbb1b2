//! Cost-bounded cache engine and its map and set facades.

pub mod core;
pub mod entry;
pub(crate) mod index;
pub mod map;
pub mod set;

pub use self::core::{CostCore, Iter};
pub use entry::{Entry, EntryId};
pub use map::CacheMap;
pub use set::CacheSet;
