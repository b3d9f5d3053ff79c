use data_loader::{LoadOptions, load};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ratings.csv"));

    println!("Loading ratings export from {}...\n", path.display());

    let start = Instant::now();
    let records = load(&path, LoadOptions::default()).expect("Failed to load ratings");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Records: {}", records.len());
    println!("\nPerformance: {:.0} records/second",
             records.len() as f64 / elapsed.as_secs_f64());
}
