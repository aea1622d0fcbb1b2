//! Error types for the costcache library.
//!
//! ## Key Components
//!
//! - [`InvalidCost`]: Returned when a cost of zero is supplied to an operation
//!   that charges or measures cost (`insert`, `available_for`, `capacity_for`).
//! - [`InvariantError`]: Returned by `check_invariants` when the index, the
//!   recency sequence and the running cost disagree.
//!
//! An oversized cost (`cost > max_cost`) is not an error: it clears the cache.
//!
//! ## Example Usage
//!
//! ```
//! use costcache::error::InvalidCost;
//! use costcache::CacheMap;
//!
//! let mut cache: CacheMap<&str, i32> = CacheMap::new(10);
//! assert_eq!(cache.insert("a", 1, 0), Err(InvalidCost));
//! assert!(cache.is_empty());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvalidCost
// ---------------------------------------------------------------------------

/// Error returned when an entry cost of zero is supplied.
///
/// Every entry must weigh at least one unit; the cache is left untouched when
/// this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidCost;

impl fmt::Display for InvalidCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("entry cost must be at least 1")
    }
}

impl std::error::Error for InvalidCost {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` on the cache types. Carries a
/// human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
