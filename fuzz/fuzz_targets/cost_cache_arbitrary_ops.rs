#![no_main]

use costcache::{CacheMap, InvalidCost, Lru, Mru};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary weighted operation sequences on both policies.
//
// The first byte picks max_cost; each following pair of bytes is one of
// insert, touch, find, erase, erase_entry, pop, get_or_insert_default or clear.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let max_cost = usize::from(data[0] % 32);
    let mut lru: CacheMap<u8, u8, Lru> = CacheMap::new(max_cost);
    let mut mru: CacheMap<u8, u8, Mru> = CacheMap::new(max_cost);
    let mut ids = Vec::new();

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let key = data[idx + 1] % 64;
        let cost = usize::from(data[idx + 1] >> 3);

        match op {
            0 => {
                // insert
                for result in [lru.insert(key, key, cost), mru.insert(key, key, cost)] {
                    match result {
                        Err(InvalidCost) => assert_eq!(cost, 0),
                        Ok(None) => assert!(cost > max_cost),
                        Ok(Some(id)) => ids.push(id),
                    }
                }
                if cost > max_cost {
                    assert!(lru.is_empty());
                    assert!(mru.is_empty());
                }
                if cost == max_cost && cost > 0 {
                    assert_eq!(lru.len(), 1);
                    assert_eq!(mru.len(), 1);
                }
            }
            1 => {
                // touch
                let found = lru.touch(&key).is_some();
                assert_eq!(found, lru.contains(&key));
                mru.touch(&key);
            }
            2 => {
                // find (read-only)
                assert_eq!(lru.find(&key).is_some(), lru.contains(&key));
                assert_eq!(mru.find(&key).is_some(), mru.contains(&key));
            }
            3 => {
                // erase
                let had = lru.contains(&key);
                assert_eq!(lru.erase(&key), usize::from(had));
                assert_eq!(lru.erase(&key), 0);
                mru.erase(&key);
            }
            4 => {
                // erase_entry through a possibly stale handle
                if !ids.is_empty() {
                    let id = ids[usize::from(key) % ids.len()];
                    let removed = lru.erase_entry(id) + mru.erase_entry(id);
                    assert!(removed <= 2);
                }
            }
            5 => {
                // pop
                let expected = lru.peek_victim().map(|(k, _)| *k);
                assert_eq!(lru.pop().map(|(k, _)| k), expected);
                let expected = mru.peek_victim().map(|(k, _)| *k);
                assert_eq!(mru.pop().map(|(k, _)| k), expected);
            }
            6 => {
                // get_or_insert_default
                let fits = max_cost > 0;
                assert_eq!(lru.get_or_insert_default(key).is_some(), fits);
                assert_eq!(mru.get_or_insert_default(key).is_some(), fits);
            }
            7 => {
                lru.clear();
                mru.clear();
                ids.clear();
            }
            _ => unreachable!(),
        }

        assert!(lru.check_invariants().is_ok());
        assert!(mru.check_invariants().is_ok());
        assert!(lru.cost() <= max_cost);
        assert!(mru.cost() <= max_cost);

        idx += 2;
    }
});
