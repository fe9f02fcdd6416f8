// crates/placedb-core/src/lib.rs

pub mod archive; // KMZ container -> KML text
pub mod common;
pub mod config;
pub mod error;
pub mod geo;
pub mod kml; // KML text -> groups of markers
pub mod loader; // Pipeline + populate-once caches
pub mod model;
pub mod text; // Description normalizer
pub mod traits;

// Re-exports
pub use crate::error::{PlaceDbError, Result};
pub use crate::common::BuildStats;
pub use crate::config::LoaderConfig;
pub use crate::geo::{format_distance, haversine_km, GeoPoint, DEFAULT_CENTER};
pub use crate::loader::{build_catalog, load_catalog, CacheState, CatalogCache};
pub use model::{
    Catalog, HalalStatus, ParseEnumError, Place, PlaceCategory, PlaceSource, PlaceWithDistance,
};
// The query trait must be in scope to call its methods on a Catalog.
pub use crate::traits::PlaceQuery;

pub mod prelude {
    pub use crate::geo::{format_distance, GeoPoint, DEFAULT_CENTER};
    pub use crate::model::{Catalog, HalalStatus, Place, PlaceCategory, PlaceWithDistance};
    pub use crate::traits::PlaceQuery;
    pub use crate::{PlaceDbError, Result};
}
