use criterion::{criterion_group, criterion_main, Criterion};
use placedb_core::{Catalog, HalalStatus, Place, PlaceCategory, PlaceQuery, PlaceSource, DEFAULT_CENTER};
use std::hint::black_box;

/// Deterministic grid of places around Seoul.
fn synthetic_catalog(n: usize) -> Catalog {
    let places = (0..n)
        .map(|i| {
            let status = HalalStatus::ALL[i % HalalStatus::ALL.len()];
            let latitude = 37.40 + (i % 100) as f64 * 0.003;
            let longitude = 126.80 + (i / 100) as f64 * 0.004;
            Place {
                id: format!("place-{i}"),
                name: format!("Place {i}"),
                category: PlaceCategory::Restaurant,
                halal_status: status,
                latitude,
                longitude,
                description: format!("Synthetic {status} place number {i}"),
                image_url: None,
                opening_hours: Some("10:00-22:00".to_string()),
                price_range: None,
                instagram_url: None,
                source: PlaceSource::LocalKmz,
            }
        })
        .collect();
    Catalog::from_places(places)
}

fn bench_queries(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);
    let (lat, lng) = (DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);

    c.bench_function("list_with_distance_5k", |b| {
        b.iter(|| black_box(catalog.list_with_distance(black_box(lat), black_box(lng))))
    });

    c.bench_function("search_ranked_5k", |b| {
        b.iter(|| black_box(catalog.search(black_box("number 42"), Some(DEFAULT_CENTER))))
    });

    c.bench_function("search_unranked_5k", |b| {
        b.iter(|| black_box(catalog.search(black_box("masjid"), None)))
    });

    c.bench_function("list_by_status_5k", |b| {
        b.iter(|| black_box(catalog.list_by_status(HalalStatus::Masjid, lat, lng)))
    });

    c.bench_function("group_counts_5k", |b| b.iter(|| black_box(catalog.group_counts())));
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
