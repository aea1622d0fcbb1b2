//! Example demonstrating the CacheBuilder API.
//!
//! Run with: cargo run --example basic_builder

use costcache::builder::CacheBuilder;
use costcache::policy::{Lru, PolicyKind};

fn main() {
    println!("=== CacheBuilder Examples ===\n");

    // Example 1: runtime-selected LRU
    println!("1. LRU Cache");
    let mut lru = CacheBuilder::new(3).build::<u64, String>(PolicyKind::Lru);

    lru.insert_unit(1, "one".to_string());
    lru.insert_unit(2, "two".to_string());
    lru.insert_unit(3, "three".to_string());

    // Access key 1 to move it to the hot end
    lru.get(&1);

    // Insert key 4, evicts the cold end (key 2)
    lru.insert_unit(4, "four".to_string());

    println!("   contains 1? {} (was accessed)", lru.contains(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains(&2));
    println!("   contains 4? {} (just inserted)", lru.contains(&4));
    println!();

    // Example 2: runtime-selected MRU
    println!("2. MRU Cache");
    let mut mru = CacheBuilder::new(3).build::<u64, String>(PolicyKind::Mru);

    mru.insert_unit(1, "one".to_string());
    mru.insert_unit(2, "two".to_string());
    mru.insert_unit(3, "three".to_string());

    // Access key 1 to move it to the hot end
    mru.get(&1);

    // Insert key 4, evicts the hot end (key 1)
    mru.insert_unit(4, "four".to_string());

    println!("   contains 1? {} (evicted as MRU)", mru.contains(&1));
    println!("   contains 2? {} (still present)", mru.contains(&2));
    println!();

    // Example 3: weighted entries
    println!("3. Weighted Entries");
    let mut weighted = CacheBuilder::new(10).build::<&str, Vec<u8>>(PolicyKind::Lru);

    weighted.insert("a", vec![0; 4], 4).unwrap();
    weighted.insert("b", vec![0; 4], 4).unwrap();

    // 3 more units do not fit in 10: "a" goes
    weighted.insert("c", vec![0; 3], 3).unwrap();

    println!("   contains a? {}", weighted.contains(&"a"));
    println!("   cost: {}/{}", weighted.cost(), weighted.max_cost());
    println!("   zero cost: {:?}", weighted.insert("d", Vec::new(), 0));
    println!();

    // Example 4: statistics
    println!("4. Statistics");
    let mut counted = CacheBuilder::new(2)
        .with_stats(true)
        .with_capacity_hint(2)
        .build_map::<u64, u64, Lru>();

    counted.insert_unit(1, 10);
    counted.get(&1);
    counted.get(&2);
    counted.insert_unit(2, 20);
    counted.insert_unit(3, 30);

    if let Some(stats) = counted.stats() {
        println!(
            "   hits: {}, misses: {}, evicted: {}",
            stats.hits, stats.misses, stats.evicted_entries
        );
        println!("   hit rate: {:.2}", stats.hit_rate());
    }
    println!();

    // Example 5: common operations
    println!("5. Common Operations");
    let mut cache = CacheBuilder::new(10).build::<u64, String>(PolicyKind::Lru);

    cache.insert_unit(1, "original".to_string());
    cache.insert_unit(1, "updated".to_string());

    if let Some(value) = cache.get(&1) {
        println!("   get(&1): {}", value);
    }

    // Contains (doesn't update access order)
    println!("   contains(&1): {}", cache.contains(&1));
    println!("   contains(&99): {}", cache.contains(&99));

    println!(
        "   len: {}, max_cost: {}, is_empty: {}",
        cache.len(),
        cache.max_cost(),
        cache.is_empty()
    );

    cache.clear();
    println!("   after clear - is_empty: {}", cache.is_empty());
}

// Expected output:
// === CacheBuilder Examples ===
//
// 1. LRU Cache
//    contains 1? true (was accessed)
//    contains 2? false (evicted as LRU)
//    contains 4? true (just inserted)
//
// 2. MRU Cache
//    contains 1? false (evicted as MRU)
//    contains 2? true (still present)
//
// 3. Weighted Entries
//    contains a? false
//    cost: 7/10
//    zero cost: Err(InvalidCost)
//
// 4. Statistics
//    hits: 1, misses: 4, evicted: 1
//    hit rate: 0.20
//
// 5. Common Operations
//    get(&1): updated
//    contains(&1): true
//    contains(&99): false
//    len: 1, max_cost: 10, is_empty: false
//    after clear - is_empty: true
