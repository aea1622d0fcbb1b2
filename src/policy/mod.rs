//! Eviction policies.
//!
//! A policy fixes two positions in the recency sequence:
//!
//! - the **promotion point**, where inserted and accessed entries are placed;
//! - the **victim point**, where the eviction loop takes entries from.
//!
//! ```text
//!              promotion point (both policies)
//!                     │
//!                     ▼
//!   hot end ──► [E] ◄──► [D] ◄──► [C] ◄──► [B] ◄──► [A] ◄── cold end
//!                ▲                                    ▲
//!                │                                    │
//!          Mru victim                           Lru victim
//! ```
//!
//! Policies are zero-sized strategy types selected at the type level, so the
//! engine is monomorphised per policy and the choice costs nothing at run
//! time. [`PolicyKind`] names the selected policy for reporting.
//!
//! | Policy  | Promotion | Victim   | Next victim after skipping one |
//! |---------|-----------|----------|--------------------------------|
//! | [`Lru`] | hot end   | cold end | one step toward the hot end    |
//! | [`Mru`] | hot end   | hot end  | one step toward the cold end   |

pub mod lru;
pub mod mru;

use std::fmt;

use crate::ds::{IntrusiveList, SlotId};

pub use lru::Lru;
pub use mru::Mru;

/// Runtime name of an eviction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Least recently used: evict from the cold end.
    Lru,
    /// Most recently used: evict from the hot end.
    Mru,
}

impl PolicyKind {
    /// Short lowercase name, e.g. `"lru"`.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Mru => "mru",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy choosing the promotion point and victim point of a recency
/// sequence.
///
/// The front of the [`IntrusiveList`] is the hot end and the back is the
/// cold end. Both provided policies promote to the hot end, so `push` and
/// `promote` have default implementations; a policy only has to say where
/// victims come from.
pub trait EvictionPolicy {
    /// Which policy this is.
    const KIND: PolicyKind;

    /// Places a new value at the promotion point.
    #[inline]
    fn push<T>(seq: &mut IntrusiveList<T>, value: T) -> SlotId {
        seq.push_front(value)
    }

    /// Relocates an existing node to the promotion point.
    ///
    /// Returns `false` if `id` is not in the sequence.
    #[inline]
    fn promote<T>(seq: &mut IntrusiveList<T>, id: SlotId) -> bool {
        seq.move_to_front(id)
    }

    /// The node the eviction loop removes first.
    fn victim<T>(seq: &IntrusiveList<T>) -> Option<SlotId>;

    /// The next candidate when `id` (a victim) must be skipped.
    fn next_victim<T>(seq: &IntrusiveList<T>, id: SlotId) -> Option<SlotId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> (IntrusiveList<char>, [SlotId; 3]) {
        let mut seq = IntrusiveList::new();
        let a = seq.push_back('a');
        let b = seq.push_back('b');
        let c = seq.push_back('c');
        (seq, [a, b, c])
    }

    #[test]
    fn both_policies_promote_to_the_hot_end() {
        let (mut seq, [_, _, c]) = sequence();
        assert!(Lru::promote(&mut seq, c));
        assert_eq!(seq.front_id(), Some(c));

        let (mut seq, [_, b, _]) = sequence();
        assert!(Mru::promote(&mut seq, b));
        assert_eq!(seq.front_id(), Some(b));

        let id = Mru::push(&mut seq, 'z');
        assert_eq!(seq.front_id(), Some(id));
        let id = Lru::push(&mut seq, 'y');
        assert_eq!(seq.front_id(), Some(id));
    }

    #[test]
    fn victims_come_from_opposite_ends() {
        let (seq, [a, b, c]) = sequence();
        assert_eq!(Lru::victim(&seq), Some(c));
        assert_eq!(Lru::next_victim(&seq, c), Some(b));
        assert_eq!(Mru::victim(&seq), Some(a));
        assert_eq!(Mru::next_victim(&seq, a), Some(b));
    }

    #[test]
    fn empty_sequence_has_no_victim() {
        let seq: IntrusiveList<u8> = IntrusiveList::new();
        assert_eq!(Lru::victim(&seq), None);
        assert_eq!(Mru::victim(&seq), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(Lru::KIND, PolicyKind::Lru);
        assert_eq!(Mru::KIND.to_string(), "mru");
        assert_eq!(PolicyKind::Lru.name(), "lru");
    }
}
