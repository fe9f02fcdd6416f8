// crates/placedb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Counters collected while building a catalog.
///
/// Returned by [`crate::Catalog::stats`]. Every marker in a recognized
/// group ends up in exactly one of `accepted` or the `skipped_*` buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Folders seen in the document.
    pub groups: usize,
    /// Folders whose name is not in the group table.
    pub unknown_groups: usize,
    /// Markers that became places.
    pub accepted: usize,
    pub skipped_empty_name: usize,
    pub skipped_no_coordinates: usize,
    /// Unparseable or out-of-range coordinate strings.
    pub skipped_bad_coordinates: usize,
    /// Ids that needed a numeric suffix.
    pub id_collisions: usize,
}

impl BuildStats {
    pub fn skipped(&self) -> usize {
        self.skipped_empty_name + self.skipped_no_coordinates + self.skipped_bad_coordinates
    }
}
