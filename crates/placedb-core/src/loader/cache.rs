// crates/placedb-core/src/loader/cache.rs
use super::{build_catalog, load_catalog};
use crate::config::LoaderConfig;
use crate::error::{PlaceDbError, Result};
use crate::model::Catalog;
use once_cell::sync::OnceCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type BuildFn = Box<dyn Fn() -> Result<Catalog> + Send + Sync>;
type Outcome = std::result::Result<Catalog, Arc<PlaceDbError>>;

/// Lifecycle of a [`CatalogCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Unbuilt,
    Building,
    Built,
    Failed,
}

/// Populate-once holder for a catalog.
///
/// The build runs at most once per cache, no matter how many threads race
/// on [`CatalogCache::get_or_build`]; late callers block until it finishes
/// and then observe the same outcome. A failed build is kept, not retried.
pub struct CatalogCache {
    build: BuildFn,
    building: AtomicBool,
    cell: OnceCell<Outcome>,
}

impl CatalogCache {
    pub fn new<F>(build: F) -> Self
    where
        F: Fn() -> Result<Catalog> + Send + Sync + 'static,
    {
        Self {
            build: Box::new(build),
            building: AtomicBool::new(false),
            cell: OnceCell::new(),
        }
    }

    /// Cache that reads the archive described by `config`.
    pub fn from_config(config: LoaderConfig) -> Self {
        Self::new(move || load_catalog(&config))
    }

    /// Cache over an archive already held in memory.
    pub fn from_bytes(archive: Vec<u8>, document: impl Into<String>) -> Self {
        let document = document.into();
        Self::new(move || build_catalog(&archive, &document))
    }

    /// Returns the catalog, building it first if nobody has yet.
    ///
    /// # Errors
    ///
    /// [`PlaceDbError::CatalogUnavailable`] wrapping the original failure,
    /// on this and every later call.
    pub fn get_or_build(&self) -> Result<&Catalog> {
        let outcome = self.cell.get_or_init(|| {
            // Never cleared: `state` looks at the cell first.
            self.building.store(true, Ordering::Release);
            run_build(&self.build).map_err(Arc::new)
        });

        match outcome {
            Ok(catalog) => Ok(catalog),
            Err(e) => Err(PlaceDbError::CatalogUnavailable(Arc::clone(e))),
        }
    }

    /// The catalog if a build already succeeded. Never builds.
    pub fn get(&self) -> Option<&Catalog> {
        self.cell.get().and_then(|outcome| outcome.as_ref().ok())
    }

    pub fn state(&self) -> CacheState {
        match self.cell.get() {
            Some(Ok(_)) => CacheState::Built,
            Some(Err(_)) => CacheState::Failed,
            None if self.building.load(Ordering::Acquire) => CacheState::Building,
            None => CacheState::Unbuilt,
        }
    }
}

/// Runs the builder, turning a panic into a stored failure.
fn run_build(build: &BuildFn) -> Result<Catalog> {
    panic::catch_unwind(AssertUnwindSafe(build)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(PlaceDbError::BuildPanicked(message))
    })
}

impl fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCache")
            .field("state", &self.state())
            .field("places", &self.get().map(Catalog::len))
            .finish()
    }
}
