//! Basic usage example for placedb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled place catalog
//! - Rank places by distance
//! - Search and filter by halal status

use placedb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== PlaceDB-RS Basic Usage Example ===\n");

    println!("Loading place catalog...");
    let catalog = Catalog::load()?;
    println!("✓ Catalog loaded: {} places\n", catalog.len());

    // Example 1: Nearest places to Seoul Station
    println!("--- Example 1: Nearest places to Seoul Station ---");
    let ranked = catalog.list_with_distance(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
    for (i, hit) in ranked.iter().take(5).enumerate() {
        println!(
            "{}. {} ({}) - {}",
            i + 1,
            hit.place.name,
            hit.place.halal_status.label(),
            format_distance(hit.distance_km)
        );
    }
    println!();

    // Example 2: Search by name or description
    println!("--- Example 2: Search for 'kebab' ---");
    let hits = catalog.search("kebab", Some(DEFAULT_CENTER));
    println!("Found {} places", hits.len());
    for hit in hits.iter().take(5) {
        println!("- {} ({})", hit.place.name, format_distance(hit.distance_km));
    }
    println!();

    // Example 3: Places per status
    println!("--- Example 3: Places per status ---");
    for (status, count) in catalog.group_counts() {
        println!("  {:<20} {count}", status.label());
    }
    println!();

    // Example 4: Prayer spaces only
    println!("--- Example 4: Nearest masjid ---");
    let masjids = catalog.list_by_status(
        HalalStatus::Masjid,
        DEFAULT_CENTER.latitude,
        DEFAULT_CENTER.longitude,
    );
    match masjids.first() {
        Some(hit) => println!("  {} is {}", hit.place.name, format_distance(hit.distance_km)),
        None => println!("  No masjid in the catalog"),
    }

    Ok(())
}
