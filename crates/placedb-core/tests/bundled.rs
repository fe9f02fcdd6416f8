//! The archive shipped in `data/` builds and answers queries.

use placedb_core::{load_catalog, Catalog, HalalStatus, LoaderConfig, PlaceQuery, DEFAULT_CENTER};

#[test]
fn bundled_archive_builds() {
    let catalog = load_catalog(&LoaderConfig::default()).unwrap();
    let stats = catalog.stats();

    assert_eq!(catalog.len(), 11);
    assert_eq!(stats.groups, 9);
    assert_eq!(stats.unknown_groups, 1);
    assert_eq!(stats.skipped(), 0);
    assert!(catalog.search("airport", None).is_empty());
}

#[test]
fn bundled_descriptions_are_normalized() {
    let catalog = load_catalog(&LoaderConfig::default()).unwrap();
    let grill = catalog
        .list_all()
        .iter()
        .find(|p| p.name == "Itaewon Grill House")
        .unwrap();

    assert_eq!(grill.id, "itaewon-grill-house-37-5345-126-9946");
    assert_eq!(grill.opening_hours.as_deref(), Some("11:00 - 22:00"));
    assert_eq!(grill.price_range.as_deref(), Some("₩9,000 ~ 18,000"));
    assert_eq!(
        grill.instagram_url.as_deref(),
        Some("https://www.instagram.com/itaewon_grill_example")
    );
    assert_eq!(grill.image_url.as_deref(), Some("https://example.com/img/grill.jpg"));
    assert_eq!(grill.description, "Turkish grill and kebab.");
}

#[test]
fn default_load_is_shared() {
    let a = Catalog::load().unwrap();
    let b = Catalog::load().unwrap();
    assert!(std::ptr::eq(a, b));

    let nearest = a.list_with_distance(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
    assert_eq!(nearest[0].place.name, "Station Biryani");

    let masjids = a.list_by_status(HalalStatus::Masjid, 35.2, 129.1);
    assert_eq!(masjids[0].place.name, "Busan Masjid");
}
