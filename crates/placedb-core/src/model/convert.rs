// crates/placedb-core/src/model/convert.rs

//! **Record Builder:** KML groups -> typed [`Place`] records.

use super::{Catalog, HalalStatus, Place, PlaceCategory, PlaceSource};
use crate::common::BuildStats;
use crate::geo::GeoPoint;
use crate::kml::{Group, KmlDocument, Marker};
use crate::text::parse_description;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Maximum length of a generated id, suffix included.
pub const MAX_ID_LEN: usize = 50;

/// Status used when a recognized group has no status mapping.
///
/// Every group in the table has one, so this only guards against the two
/// lookups drifting apart.
pub const FALLBACK_STATUS: HalalStatus = HalalStatus::MuslimFriendly;

/// Folder name -> halal status.
pub fn status_for_group(name: &str) -> Option<HalalStatus> {
    match name.trim() {
        "Halal restaurant" => Some(HalalStatus::Halal),
        "Partially Halal" => Some(HalalStatus::PartiallyHalal),
        "Seafood restaurant" => Some(HalalStatus::Seafood),
        "Muslim Friendly Restaurant" => Some(HalalStatus::MuslimFriendly),
        "Vegetarian Restaurant" => Some(HalalStatus::Vegetarian),
        "Masjid & Musalla" => Some(HalalStatus::Masjid),
        "Muslim Friendly Accommodation" => Some(HalalStatus::Accommodation),
        "Halal Mart" => Some(HalalStatus::Mart),
        _ => None,
    }
}

/// Folder name -> place category.
pub fn category_for_group(name: &str) -> Option<PlaceCategory> {
    match name.trim() {
        "Halal restaurant"
        | "Partially Halal"
        | "Seafood restaurant"
        | "Muslim Friendly Restaurant"
        | "Vegetarian Restaurant" => Some(PlaceCategory::Restaurant),
        "Masjid & Musalla" => Some(PlaceCategory::Masjid),
        "Muslim Friendly Accommodation" => Some(PlaceCategory::Accommodation),
        "Halal Mart" => Some(PlaceCategory::Mart),
        _ => None,
    }
}

/// `(category, status)` for a folder, or `None` when its markers are dropped.
pub fn classify_group(name: &str) -> Option<(PlaceCategory, HalalStatus)> {
    match category_for_group(name)? {
        PlaceCategory::Other => None,
        category => Some((category, resolve_status(status_for_group(name)))),
    }
}

#[inline]
fn resolve_status(mapped: Option<HalalStatus>) -> HalalStatus {
    mapped.unwrap_or(FALLBACK_STATUS)
}

/// Parses a KML `longitude,latitude[,altitude]` tuple.
///
/// Only the first two numbers are read, so trailing tuples are ignored.
/// Returns `None` for malformed numbers or coordinates outside the valid
/// range.
pub fn parse_coordinates(raw: &str) -> Option<GeoPoint> {
    let mut parts = raw.trim().split(',');

    let longitude: f64 = parts.next()?.trim().parse().ok()?;
    let latitude: f64 = parts.next()?.trim().parse().ok()?;

    let point = GeoPoint::new(latitude, longitude);
    point.is_valid().then_some(point)
}

/// Deterministic id from a name and coordinates rounded to four decimals.
///
/// `"Test Cafe"` at (37.5547, 126.9707) becomes `test-cafe-37-5547-126-9707`.
pub fn build_id(name: &str, latitude: f64, longitude: f64) -> String {
    let base = format!("{name}-{}-{}", fixed4(latitude), fixed4(longitude)).to_lowercase();

    let mut id = String::with_capacity(base.len());
    for ch in base.chars() {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            '-'
        };
        if ch == '-' && id.ends_with('-') {
            continue;
        }
        id.push(ch);
    }

    // Only ASCII remains, so byte truncation is char-safe.
    id.truncate(MAX_ID_LEN);
    id
}

/// Four decimals, with exact ties rounded away from zero (`37.03125` ->
/// `37.0313`). Plain `{:.4}` rounds ties to even.
fn fixed4(value: f64) -> String {
    // Fixed-precision formatting is exact, so 60 digits expose a true tie.
    let exact = format!("{:.60}", value.abs());
    let tail = exact
        .split_once('.')
        .and_then(|(_, frac)| frac.get(4..))
        .unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if is_tie {
        // Ties are short binary fractions, so the nudge cannot cross the next boundary.
        format!("{:.4}", value + value.signum() * 1e-9)
    } else {
        format!("{value:.4}")
    }
}

/// Hands out ids that are unique within one build.
#[derive(Debug, Default)]
pub struct IdRegistry {
    seen: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` if unused, otherwise the first free `base-N` (N >= 2).
    ///
    /// The base is shortened so that the suffixed id still fits in
    /// [`MAX_ID_LEN`].
    pub fn claim(&mut self, base: String) -> String {
        if !self.seen.contains(&base) {
            self.seen.insert(base.clone());
            return base;
        }

        let mut n = 2usize;
        loop {
            let suffix = format!("-{n}");
            let mut keep = base.len().min(MAX_ID_LEN.saturating_sub(suffix.len()));
            while !base.is_char_boundary(keep) {
                keep -= 1;
            }
            let candidate = format!("{}{}", base[..keep].trim_end_matches('-'), suffix);
            if self.seen.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }
}

/// Incrementally turns groups into places.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    places: Vec<Place>,
    ids: IdRegistry,
    stats: BuildStats,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every acceptable marker of `group`. Unknown groups add nothing.
    pub fn add_group(&mut self, group: &Group) -> usize {
        self.stats.groups += 1;

        let Some((category, status)) = classify_group(&group.name) else {
            self.stats.unknown_groups += 1;
            warn!(
                group = %group.name,
                markers = group.markers.len(),
                "skipping unrecognized group"
            );
            return 0;
        };

        let before = self.places.len();
        for marker in &group.markers {
            if let Some(place) = self.build_place(marker, category, status) {
                self.places.push(place);
            }
        }
        self.places.len() - before
    }

    fn build_place(
        &mut self,
        marker: &Marker,
        category: PlaceCategory,
        halal_status: HalalStatus,
    ) -> Option<Place> {
        let name = marker.name.trim();
        if name.is_empty() {
            self.stats.skipped_empty_name += 1;
            debug!("skipping marker without a name");
            return None;
        }

        let Some(raw_coords) = marker.coordinates.as_deref() else {
            self.stats.skipped_no_coordinates += 1;
            debug!(marker = name, "skipping marker without coordinates");
            return None;
        };

        let Some(point) = parse_coordinates(raw_coords) else {
            self.stats.skipped_bad_coordinates += 1;
            debug!(marker = name, coordinates = raw_coords, "skipping marker with bad coordinates");
            return None;
        };

        let base = build_id(name, point.latitude, point.longitude);
        let id = self.ids.claim(base.clone());
        if id != base {
            self.stats.id_collisions += 1;
            debug!(marker = name, %base, %id, "id collision resolved");
        }

        let fields = parse_description(marker.description.as_deref().unwrap_or(""));
        self.stats.accepted += 1;

        Some(Place {
            id,
            name: name.to_string(),
            category,
            halal_status,
            latitude: point.latitude,
            longitude: point.longitude,
            description: fields.description,
            image_url: fields.image_url,
            opening_hours: fields.opening_hours,
            price_range: fields.price_range,
            instagram_url: fields.instagram_url,
            source: PlaceSource::LocalKmz,
        })
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn finish(self) -> Catalog {
        Catalog::new(self.places, self.stats)
    }
}

/// **Standard Converter:** parsed document -> catalog.
pub fn from_document(document: &KmlDocument) -> Catalog {
    let mut builder = CatalogBuilder::new();
    for group in &document.groups {
        builder.add_group(group);
    }
    builder.finish()
}
