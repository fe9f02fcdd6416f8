// crates/placedb-core/src/config.rs

//! # Loader Configuration
//!
//! Where the KMZ archive lives and which document inside it to read.

use crate::archive::DEFAULT_DOCUMENT;
use crate::error::{PlaceDbError, Result};
use std::env::VarError;
use std::path::PathBuf;

/// File name of the bundled archive under [`LoaderConfig::default_data_dir`].
pub const DEFAULT_ARCHIVE_FILENAME: &str = "halal-restaurants.kmz";

/// Overrides [`LoaderConfig::archive_path`].
pub const ARCHIVE_ENV: &str = "PLACEDB_ARCHIVE";
/// Overrides [`LoaderConfig::document_name`].
pub const DOCUMENT_ENV: &str = "PLACEDB_DOCUMENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub archive_path: PathBuf,
    pub document_name: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            archive_path: Self::default_data_dir().join(DEFAULT_ARCHIVE_FILENAME),
            document_name: DEFAULT_DOCUMENT.to_string(),
        }
    }
}

impl LoaderConfig {
    /// `data/` next to this crate's manifest.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn with_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = path.into();
        self
    }

    pub fn with_document(mut self, name: impl Into<String>) -> Self {
        self.document_name = name.into();
        self
    }

    /// Defaults overridden by `PLACEDB_ARCHIVE` and `PLACEDB_DOCUMENT`.
    ///
    /// # Errors
    ///
    /// [`PlaceDbError::InvalidConfig`] if a variable is set but empty or not
    /// valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Same as [`LoaderConfig::from_env`] with an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let read = |var: &str| -> Result<Option<String>> {
            match lookup(var) {
                Ok(v) if v.trim().is_empty() => Err(PlaceDbError::InvalidConfig {
                    var: var.to_string(),
                    reason: "value is empty".to_string(),
                }),
                Ok(v) => Ok(Some(v.trim().to_string())),
                Err(VarError::NotPresent) => Ok(None),
                Err(e @ VarError::NotUnicode(_)) => Err(PlaceDbError::InvalidConfig {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            }
        };

        let mut config = Self::default();
        if let Some(path) = read(ARCHIVE_ENV)? {
            config.archive_path = PathBuf::from(path);
        }
        if let Some(name) = read(DOCUMENT_ENV)? {
            config.document_name = name;
        }
        Ok(config)
    }
}
