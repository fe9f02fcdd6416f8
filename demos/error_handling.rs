//! Error handling example for placedb-rs
//!
//! This example demonstrates proper error handling and edge cases

use placedb_rs::prelude::*;
use placedb_rs::{CacheState, CatalogCache, LoaderConfig};

fn main() -> Result<()> {
    println!("=== PlaceDB-RS Error Handling Example ===\n");

    // Example 1: Handling catalog load errors
    println!("--- Example 1: Loading catalog with error handling ---");
    match Catalog::load() {
        Ok(catalog) => {
            println!("✓ Catalog loaded successfully");
            println!("  Places: {}", catalog.len());
        }
        Err(e) => {
            eprintln!("✗ Failed to load catalog: {e}");
            return Err(e);
        }
    }
    println!();

    let catalog = Catalog::load()?;

    // Example 2: Unknown ids
    println!("--- Example 2: Looking up non-existent ids ---");
    for id in ["", "no-such-place", "CAFE-37-5547-126-9707"] {
        match catalog.get_by_id(id) {
            Some(place) => println!("  Found: {} ({})", place.name, place.id),
            None => println!("  Not found: {id:?}"),
        }
    }
    println!();

    // Example 3: Invalid status names
    println!("--- Example 3: Parsing status names ---");
    for name in ["halal", "Partially_Halal", "kosher"] {
        match name.parse::<HalalStatus>() {
            Ok(status) => println!("  {name} -> {}", status.label()),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 4: A broken archive fails the cache for good
    println!("--- Example 4: Sticky build failure ---");
    let cache = CatalogCache::from_config(
        LoaderConfig::default().with_archive("/nonexistent/places.kmz"),
    );
    for attempt in 1..=2 {
        match cache.get_or_build() {
            Ok(c) => println!("  attempt {attempt}: {} places", c.len()),
            Err(e) => println!("  attempt {attempt}: {e}"),
        }
    }
    assert_eq!(cache.state(), CacheState::Failed);

    Ok(())
}
