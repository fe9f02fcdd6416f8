// crates/placedb-core/src/model/mod.rs
pub mod convert;
pub mod search;

use crate::common::BuildStats;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Broad kind of place. Several statuses share `Restaurant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Restaurant,
    Mart,
    Masjid,
    Accommodation,
    Other,
}

/// Visual classification of a place. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalalStatus {
    Halal,
    PartiallyHalal,
    MuslimFriendly,
    Seafood,
    Vegetarian,
    Masjid,
    Mart,
    Accommodation,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 5] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Mart,
        PlaceCategory::Masjid,
        PlaceCategory::Accommodation,
        PlaceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Mart => "mart",
            PlaceCategory::Masjid => "masjid",
            PlaceCategory::Accommodation => "accommodation",
            PlaceCategory::Other => "other",
        }
    }
}

impl HalalStatus {
    /// All statuses in display order.
    pub const ALL: [HalalStatus; 8] = [
        HalalStatus::Halal,
        HalalStatus::PartiallyHalal,
        HalalStatus::MuslimFriendly,
        HalalStatus::Seafood,
        HalalStatus::Vegetarian,
        HalalStatus::Masjid,
        HalalStatus::Mart,
        HalalStatus::Accommodation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HalalStatus::Halal => "halal",
            HalalStatus::PartiallyHalal => "partially_halal",
            HalalStatus::MuslimFriendly => "muslim_friendly",
            HalalStatus::Seafood => "seafood",
            HalalStatus::Vegetarian => "vegetarian",
            HalalStatus::Masjid => "masjid",
            HalalStatus::Mart => "mart",
            HalalStatus::Accommodation => "accommodation",
        }
    }

    /// Section heading shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            HalalStatus::Halal => "Halal Certified",
            HalalStatus::PartiallyHalal => "Partially Halal",
            HalalStatus::MuslimFriendly => "Muslim Friendly",
            HalalStatus::Seafood => "Seafood",
            HalalStatus::Vegetarian => "Vegetarian",
            HalalStatus::Masjid => "Masjid & Musalla",
            HalalStatus::Mart => "Halal Mart",
            HalalStatus::Accommodation => "Accommodation",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HalalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known enum value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for PlaceCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "place category",
                value: s.to_string(),
            })
    }
}

impl FromStr for HalalStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "halal status",
                value: s.to_string(),
            })
    }
}

/// Provenance of a record. Only the bundled KMZ exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceSource {
    #[default]
    #[serde(rename = "local_kmz")]
    LocalKmz,
}

/// A normalized point of interest. Never mutated after the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    pub halal_status: HalalStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub source: PlaceSource,
}

impl Place {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Distance from `reference` to this place in kilometres.
    pub fn distance_from(&self, reference: &GeoPoint) -> f64 {
        reference.distance_km(&self.point())
    }
}

/// A place annotated with its distance to a query's reference point.
///
/// Borrowed from the catalog and recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaceWithDistance<'a> {
    #[serde(flatten)]
    pub place: &'a Place,
    pub distance_km: f64,
}

impl<'a> PlaceWithDistance<'a> {
    pub fn new(place: &'a Place, distance_km: f64) -> Self {
        Self { place, distance_km }
    }

    /// Annotation used when the caller supplied no reference point.
    pub fn unranked(place: &'a Place) -> Self {
        Self::new(place, 0.0)
    }
}

/// The immutable result of one build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    places: Vec<Place>,
    #[serde(skip)]
    stats: BuildStats,
}

impl Catalog {
    pub(crate) fn new(places: Vec<Place>, stats: BuildStats) -> Self {
        Self { places, stats }
    }

    /// Wraps already-built places. Ids are taken as given.
    pub fn from_places(places: Vec<Place>) -> Self {
        let stats = BuildStats {
            accepted: places.len(),
            ..BuildStats::default()
        };
        Self { places, stats }
    }

    /// All places in build order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Pretty JSON array of all places.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.places)?)
    }

    /// Streams the JSON array of all places into `writer`.
    #[cfg(feature = "json")]
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> crate::Result<()> {
        serde_json::to_writer_pretty(writer, &self.places)?;
        Ok(())
    }
}
