// crates/placedb-core/src/traits.rs
use crate::geo::GeoPoint;
use crate::model::{HalalStatus, Place, PlaceWithDistance};
use std::collections::BTreeMap;

/// Read-only query surface over a built catalog.
///
/// Every operation is pure: it borrows the catalog, never mutates it, and
/// returns fresh derived values. Empty results are valid outcomes.
pub trait PlaceQuery {
    /// All places in catalog order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placedb_core::{Catalog, PlaceQuery};
    ///
    /// let catalog = Catalog::load().unwrap();
    /// for place in catalog.list_all().iter().take(5) {
    ///     println!("- {} ({})", place.name, place.halal_status);
    /// }
    /// ```
    fn list_all(&self) -> &[Place];

    /// Every place annotated with its distance to `(lat, lng)`, nearest
    /// first. Equal distances keep catalog order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placedb_core::{format_distance, Catalog, PlaceQuery, DEFAULT_CENTER};
    ///
    /// let catalog = Catalog::load().unwrap();
    /// let ranked = catalog.list_with_distance(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
    /// if let Some(nearest) = ranked.first() {
    ///     println!("{} is {}", nearest.place.name, format_distance(nearest.distance_km));
    /// }
    /// ```
    fn list_with_distance(&self, lat: f64, lng: f64) -> Vec<PlaceWithDistance<'_>>;

    /// Case-insensitive substring match on name or description.
    ///
    /// The query is trimmed; an empty query matches everything. With a
    /// reference point results are ranked nearest first, without one they
    /// stay in catalog order with `distance_km = 0`.
    fn search(&self, query: &str, reference: Option<GeoPoint>) -> Vec<PlaceWithDistance<'_>>;

    /// Exact id lookup.
    fn get_by_id(&self, id: &str) -> Option<&Place>;

    /// Places with exactly `status`, nearest first.
    fn list_by_status(&self, status: HalalStatus, lat: f64, lng: f64)
        -> Vec<PlaceWithDistance<'_>>;

    /// Number of places per status. Statuses with no places are absent.
    fn group_counts(&self) -> BTreeMap<HalalStatus, usize>;

    /// Resolves a set of ids (e.g. a device's favorites) to places, in
    /// catalog order. Unknown ids are ignored.
    fn get_many<'a, I>(&self, ids: I) -> Vec<&Place>
    where
        I: IntoIterator<Item = &'a str>;
}
