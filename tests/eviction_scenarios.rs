// ==============================================
// EVICTION SCENARIOS (integration)
// ==============================================
//
// End-to-end walkthroughs of the public facades: recency order, eviction
// choice per policy, and the cost rules for insert.

use costcache::policy::lru::LruCache;
use costcache::policy::mru::{MruCache, MruSet};
use costcache::{CacheMap, CacheSet, InvalidCost, Lru, Mru};

fn order<K: Copy + Eq + std::hash::Hash, V>(cache: &LruCache<K, V>) -> Vec<K> {
    cache.keys().copied().collect()
}

// ==============================================
// Recency Order
// ==============================================

mod recency {
    use super::*;

    #[test]
    fn lru_walkthrough() {
        let mut cache: LruCache<u32, ()> = LruCache::new(3);
        cache.insert_unit(1, ());
        cache.insert_unit(2, ());
        cache.insert_unit(3, ());
        assert_eq!(order(&cache), vec![3, 2, 1]);

        cache.insert_unit(4, ());
        assert_eq!(order(&cache), vec![4, 3, 2]);

        cache.touch(&2);
        assert_eq!(order(&cache), vec![2, 4, 3]);

        cache.insert_unit(5, ());
        assert_eq!(order(&cache), vec![5, 2, 4]);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn mru_evicts_most_recent_insert() {
        let mut cache: MruCache<u32, &str> = MruCache::new(2);
        cache.insert_unit(1, "one");
        cache.insert_unit(2, "two");
        assert!(cache.is_full());

        cache.insert_unit(3, "three");
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn mru_set_matches_map() {
        let mut set: MruSet<u32> = MruSet::new(2);
        set.insert_unit(1);
        set.insert_unit(2);
        set.insert_unit(3);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn find_does_not_promote() {
        let mut cache: LruCache<u32, ()> = LruCache::new(2);
        cache.insert_unit(1, ());
        cache.insert_unit(2, ());
        assert!(cache.find(&1).is_some());
        cache.insert_unit(3, ());
        assert!(!cache.contains(&1));
    }
}

// ==============================================
// Cost Rules
// ==============================================

mod cost_rules {
    use super::*;

    #[test]
    fn reinsert_updates_in_place() {
        let mut cache: CacheMap<&str, &str> = CacheMap::new(10);
        cache.insert("a", "first", 2).unwrap();
        cache.insert("b", "other", 3).unwrap();
        let id = cache.find(&"a");

        cache.insert("a", "second", 5).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.cost(), 8);
        assert_eq!(cache.peek(&"a"), Some(&"second"));
        assert_eq!(cache.find(&"a"), id);

        cache.insert("a", "third", 1).unwrap();
        assert_eq!(cache.cost(), 4);
    }

    #[test]
    fn oversized_item_empties_cache() {
        for max_cost in [1usize, 5, 64] {
            let mut lru: CacheMap<usize, usize, Lru> = CacheMap::new(max_cost);
            let mut mru: CacheMap<usize, usize, Mru> = CacheMap::new(max_cost);
            for k in 0..max_cost {
                lru.insert_unit(k, k);
                mru.insert_unit(k, k);
            }

            assert_eq!(lru.insert(999, 0, max_cost + 1), Ok(None));
            assert_eq!(mru.insert(999, 0, max_cost + 1), Ok(None));
            assert_eq!(lru.len(), 0);
            assert_eq!(mru.len(), 0);
            assert_eq!(lru.cost(), 0);
        }
    }

    #[test]
    fn exact_capacity_leaves_single_entry() {
        let mut cache: CacheMap<u32, u32> = CacheMap::new(6);
        cache.insert(1, 1, 2).unwrap();
        cache.insert(2, 2, 2).unwrap();
        cache.insert(3, 3, 1).unwrap();

        cache.insert(7, 7, 6).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![7]);
        assert!(cache.is_full());

        // Existing key grown to exactly max_cost.
        cache.insert_unit(8, 8);
        cache.insert(8, 80, 6).unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek(&8), Some(&80));
    }

    #[test]
    fn exact_capacity_on_empty_cache() {
        let mut set: CacheSet<u8, Mru> = CacheSet::new(3);
        set.insert(1, 3).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.cost(), 3);
    }

    #[test]
    fn erase_absent_key_changes_nothing() {
        let mut cache: CacheMap<u32, u32> = CacheMap::new(4);
        cache.insert(1, 1, 2).unwrap();
        cache.insert_unit(2, 2);

        assert_eq!(cache.erase(&3), 0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.cost(), 3);
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn zero_cost_rejected() {
        let mut cache: CacheMap<u32, u32> = CacheMap::new(4);
        cache.insert_unit(1, 1);

        assert_eq!(cache.insert(2, 2, 0), Err(InvalidCost));
        assert_eq!(cache.insert(1, 9, 0), Err(InvalidCost));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek(&1), Some(&1));
        assert_eq!(cache.available_for(0), Err(InvalidCost));
        assert_eq!(cache.capacity_for(0), Err(InvalidCost));
    }

    #[test]
    fn available_and_capacity_per_cost() {
        let mut cache: CacheMap<u32, u32> = CacheMap::new(10);
        cache.insert(1, 1, 3).unwrap();
        assert_eq!(cache.available(), 7);
        assert_eq!(cache.available_for(2), Ok(3));
        assert_eq!(cache.capacity(), 10);
        assert_eq!(cache.capacity_for(3), Ok(3));
    }
}

// ==============================================
// Handle Stability
// ==============================================

mod handles {
    use super::*;

    #[test]
    fn handles_survive_unrelated_churn() {
        let mut cache: LruCache<u32, u32> = LruCache::new(100);
        let id = cache.insert_unit(0, 0).unwrap();
        for k in 1..50 {
            cache.insert_unit(k, k);
            cache.touch(&0);
            if k % 3 == 0 {
                cache.erase(&(k - 1));
            }
        }
        assert_eq!(cache.entry(id).map(|e| *e.key()), Some(0));
    }

    #[test]
    fn evicted_handle_goes_stale() {
        let mut cache: LruCache<u32, u32> = LruCache::new(1);
        let id = cache.insert_unit(1, 1).unwrap();
        cache.insert_unit(2, 2);
        assert!(cache.entry(id).is_none());
        assert_eq!(cache.erase_entry(id), 0);
    }
}
