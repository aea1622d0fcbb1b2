//! MRU cache walking a cyclic scan larger than the cache.
//!
//! Run with: cargo run --example basic_mru

use costcache::policy::mru::MruCache;

fn main() {
    let mut cache: MruCache<u32, u32> = MruCache::new(3);

    // Three passes over pages 0..5; only 3 fit.
    let mut hits = 0;
    for _ in 0..3 {
        for page in 0..5 {
            if cache.get(&page).is_some() {
                hits += 1;
            } else {
                cache.insert_unit(page, page * 100);
            }
        }
    }

    let mut resident: Vec<_> = cache.keys().copied().collect();
    resident.sort_unstable();
    println!("hits: {}", hits);
    println!("resident: {:?}", resident);
}

// Expected output:
// hits: 6
// resident: [2, 3, 4]
//
// Explanation: each miss evicts the page touched just before it, so part of
// the previous pass survives into the next one. An LRU cache of the same
// size scores zero hits on this loop.
