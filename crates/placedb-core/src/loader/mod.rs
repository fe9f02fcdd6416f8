// crates/placedb-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Wires the pipeline together (archive -> markup -> records) and owns the
//! populate-once caches that hand the finished [`Catalog`] to readers.

use crate::archive::{read_archive_file, read_document};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::kml::parse_document;
use crate::model::convert::from_document;
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use tracing::info;

mod cache;

pub use cache::{CacheState, CatalogCache};

static DEFAULT_CACHE: OnceCell<CatalogCache> = OnceCell::new();

/// Builds a catalog from the raw bytes of a KMZ archive.
pub fn build_catalog(archive: &[u8], document: &str) -> Result<Catalog> {
    info!(bytes = archive.len(), document, "building place catalog");

    let xml = read_document(archive, document)?;
    let kml = parse_document(&xml)?;
    let catalog = from_document(&kml);

    let stats = catalog.stats();
    info!(
        places = stats.accepted,
        groups = stats.groups,
        unknown_groups = stats.unknown_groups,
        skipped = stats.skipped(),
        id_collisions = stats.id_collisions,
        "place catalog ready"
    );
    Ok(catalog)
}

/// Reads the archive named by `config` and builds a catalog from it.
pub fn load_catalog(config: &LoaderConfig) -> Result<Catalog> {
    let bytes = read_archive_file(&config.archive_path)?;
    build_catalog(&bytes, &config.document_name)
}

/// The process-wide cache, configured from the environment on first use.
pub fn default_cache() -> Result<&'static CatalogCache> {
    DEFAULT_CACHE.get_or_try_init(|| LoaderConfig::from_env().map(CatalogCache::from_config))
}

impl Catalog {
    /// Loads the bundled catalog, building it on the first call.
    ///
    /// Every later call (from any thread) returns the same catalog, or the
    /// same [`crate::PlaceDbError::CatalogUnavailable`] if the build failed.
    pub fn load() -> Result<&'static Catalog> {
        default_cache()?.get_or_build()
    }

    /// Builds a fresh catalog from `config`, bypassing every cache.
    pub fn load_from(config: &LoaderConfig) -> Result<Catalog> {
        load_catalog(config)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{kmz, TWO_PLACES};
    use super::*;
    use crate::error::PlaceDbError;
    use crate::model::HalalStatus;

    #[test]
    fn builds_catalog_from_archive_bytes() {
        let catalog = build_catalog(&kmz("doc.kml", TWO_PLACES), "doc.kml").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.places()[0].id, "test-cafe-37-5547-126-9707");
        assert_eq!(catalog.places()[1].halal_status, HalalStatus::Masjid);
        assert_eq!(catalog.stats().groups, 2);
    }

    #[test]
    fn custom_document_name_is_honoured() {
        let bytes = kmz("places.kml", TWO_PLACES);
        assert!(build_catalog(&bytes, "places.kml").is_ok());
        assert!(matches!(
            build_catalog(&bytes, "doc.kml"),
            Err(PlaceDbError::MissingDocument { .. })
        ));
    }

    #[test]
    fn missing_archive_is_not_found() {
        let config = LoaderConfig::default().with_archive("/definitely/not/here.kmz");
        assert!(matches!(
            Catalog::load_from(&config),
            Err(PlaceDbError::NotFound(_))
        ));
    }
}
