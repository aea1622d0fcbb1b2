//! A set of file paths weighted by size, exported as Prometheus text.
//!
//! Run with: cargo run --example weighted_set

use costcache::metrics::{MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter};
use costcache::policy::Lru;
use costcache::CacheBuilder;

fn main() {
    let mut resident = CacheBuilder::new(1024)
        .with_stats(true)
        .build_set::<&str, Lru>();

    let files = [
        ("/etc/hosts", 200),
        ("/etc/passwd", 300),
        ("/var/log/big.log", 600),
        ("/etc/hosts", 200),
        ("/usr/share/huge.db", 4096),
        ("/etc/fstab", 100),
    ];

    for (path, size) in files {
        match resident.insert(path, size) {
            Ok(Some(_)) => println!(
                "cached {:<20} cost {:>4}/{}",
                path,
                resident.cost(),
                resident.max_cost()
            ),
            Ok(None) => println!("{} too large, cache reset", path),
            Err(err) => println!("{}: {}", path, err),
        }
    }

    println!("resident: {:?}", resident.iter().collect::<Vec<_>>());

    if let Some(snapshot) = resident.snapshot() {
        let exporter = PrometheusTextExporter::new("files", std::io::stdout());
        exporter.export(&snapshot);
    }
}

// Expected output (metrics lines omitted):
// cached /etc/hosts           cost  200/1024
// cached /etc/passwd          cost  500/1024
// cached /var/log/big.log     cost  700/1024
// cached /etc/hosts           cost  700/1024
// /usr/share/huge.db too large, cache reset
// cached /etc/fstab           cost  100/1024
// resident: ["/etc/fstab"]
