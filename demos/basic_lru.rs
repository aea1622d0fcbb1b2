use costcache::policy::lru::LruCache;

fn main() {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.insert_unit(1, "alpha".to_string());
    cache.insert_unit(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.insert_unit(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
}

// Expected output:
// hit 1: alpha
// contains 2? false
//
// Explanation: max_cost=2 with unit costs; after get(&1), key 1 is at the hot
// end and key 2 at the cold end. Inserting key 3 evicts key 2.
