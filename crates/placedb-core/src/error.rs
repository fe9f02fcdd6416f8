// crates/placedb-core/src/error.rs
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while loading or building the place catalog.
///
/// Only whole-load failures are represented here. Per-marker data problems
/// (bad coordinates, unknown folders, missing fields) are skipped by the
/// builder and counted in [`crate::BuildStats`] instead.
#[derive(Debug, Error)]
pub enum PlaceDbError {
    #[error("archive not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid KMZ archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("no {name} found in KMZ archive")]
    MissingDocument { name: String },

    #[error("{name} is not valid UTF-8: {source}")]
    Encoding {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("KML parse error: {0}")]
    Markup(#[from] quick_xml::DeError),

    #[error("invalid configuration for {var}: {reason}")]
    InvalidConfig { var: String, reason: String },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog builder panicked instead of returning.
    #[error("catalog build panicked: {0}")]
    BuildPanicked(String),

    /// The one-time build failed; the cache keeps returning this.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(#[source] Arc<PlaceDbError>),
}

pub type Result<T> = std::result::Result<T, PlaceDbError>;
