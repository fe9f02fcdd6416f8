// crates/placedb-core/src/model/search.rs
use super::{Catalog, HalalStatus, Place, PlaceWithDistance};
use crate::geo::GeoPoint;
use crate::traits::PlaceQuery;
use std::collections::{BTreeMap, HashSet};

/// Annotates `places` with distances to `reference` and sorts nearest first.
///
/// `sort_by` is stable, so ties keep their input order.
pub fn rank_by_distance<'a, I>(places: I, reference: &GeoPoint) -> Vec<PlaceWithDistance<'a>>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut out: Vec<_> = places
        .into_iter()
        .map(|p| PlaceWithDistance::new(p, p.distance_from(reference)))
        .collect();
    out.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    out
}

/// Lower-cased, trimmed query; `None` when it matches everything.
fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim();
    (!q.is_empty()).then(|| q.to_lowercase())
}

fn matches_query(place: &Place, q: &str) -> bool {
    place.name.to_lowercase().contains(q) || place.description.to_lowercase().contains(q)
}

impl PlaceQuery for Catalog {
    fn list_all(&self) -> &[Place] {
        self.places()
    }

    fn list_with_distance(&self, lat: f64, lng: f64) -> Vec<PlaceWithDistance<'_>> {
        rank_by_distance(self.places(), &GeoPoint::new(lat, lng))
    }

    fn search(&self, query: &str, reference: Option<GeoPoint>) -> Vec<PlaceWithDistance<'_>> {
        let q = normalize_query(query);
        let hits = self
            .places()
            .iter()
            .filter(|p| q.as_deref().map_or(true, |q| matches_query(p, q)));

        match reference {
            Some(point) => rank_by_distance(hits, &point),
            None => hits.map(PlaceWithDistance::unranked).collect(),
        }
    }

    fn get_by_id(&self, id: &str) -> Option<&Place> {
        self.places().iter().find(|p| p.id == id)
    }

    fn list_by_status(
        &self,
        status: HalalStatus,
        lat: f64,
        lng: f64,
    ) -> Vec<PlaceWithDistance<'_>> {
        let hits = self.places().iter().filter(|p| p.halal_status == status);
        rank_by_distance(hits, &GeoPoint::new(lat, lng))
    }

    fn group_counts(&self) -> BTreeMap<HalalStatus, usize> {
        let mut counts = BTreeMap::new();
        for place in self.places() {
            *counts.entry(place.halal_status).or_insert(0) += 1;
        }
        counts
    }

    fn get_many<'a, I>(&self, ids: I) -> Vec<&Place>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: HashSet<&str> = ids.into_iter().collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.places()
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DEFAULT_CENTER;
    use crate::model::{PlaceCategory, PlaceSource};

    fn place(id: &str, name: &str, status: HalalStatus, lat: f64, lng: f64, desc: &str) -> Place {
        Place {
            id: id.to_string(),
            name: name.to_string(),
            category: PlaceCategory::Restaurant,
            halal_status: status,
            latitude: lat,
            longitude: lng,
            description: desc.to_string(),
            image_url: None,
            opening_hours: None,
            price_range: None,
            instagram_url: None,
            source: PlaceSource::LocalKmz,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_places(vec![
            place("busan", "Busan Halal Kitchen", HalalStatus::Halal, 35.1796, 129.0756, "Seafood-free curry"),
            place("itaewon", "Itaewon Kebab", HalalStatus::Halal, 37.5345, 126.9946, "Turkish grill"),
            place("mosque", "Seoul Central Masjid", HalalStatus::Masjid, 37.5330, 126.9975, ""),
            place("veg", "Green Table", HalalStatus::Vegetarian, 37.5550, 126.9710, "HALAL-friendly vegan menu"),
            place("twin", "Twin Cafe", HalalStatus::Halal, 37.5345, 126.9946, ""),
        ])
    }

    fn ids<'a>(hits: &'a [PlaceWithDistance<'_>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.place.id.as_str()).collect()
    }

    #[test]
    fn ranking_is_nearest_first() {
        let c = catalog();
        let ranked = c.list_with_distance(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].place.id, "veg");
        assert_eq!(ranked.last().unwrap().place.id, "busan");
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn equal_distances_keep_catalog_order() {
        let c = catalog();
        let ranked = c.list_with_distance(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
        let itaewon = ranked.iter().position(|h| h.place.id == "itaewon").unwrap();
        let twin = ranked.iter().position(|h| h.place.id == "twin").unwrap();
        assert_eq!(twin, itaewon + 1);
    }

    #[test]
    fn distance_is_zero_at_the_place_itself() {
        let c = catalog();
        let ranked = c.list_with_distance(35.1796, 129.0756);
        assert_eq!(ranked[0].place.id, "busan");
        assert_eq!(ranked[0].distance_km, 0.0);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let c = catalog();
        let upper = c.search("HALAL", None);
        let lower = c.search("halal", None);
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), ["busan", "veg"]);
    }

    #[test]
    fn search_trims_the_query() {
        let c = catalog();
        assert_eq!(ids(&c.search("  kebab \n", None)), ["itaewon"]);
    }

    #[test]
    fn empty_query_returns_everything_in_catalog_order() {
        let c = catalog();
        for q in ["", "   "] {
            let hits = c.search(q, None);
            let all: Vec<_> = c.list_all().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids(&hits), all);
            assert!(hits.iter().all(|h| h.distance_km == 0.0));
        }
    }

    #[test]
    fn search_with_reference_is_ranked() {
        let c = catalog();
        let hits = c.search("halal", Some(DEFAULT_CENTER));
        assert_eq!(ids(&hits), ["veg", "busan"]);
        assert!(hits[0].distance_km > 0.0);
    }

    #[test]
    fn search_without_matches_is_empty() {
        assert!(catalog().search("sushi", None).is_empty());
    }

    #[test]
    fn status_filter_is_exact_and_ranked() {
        let c = catalog();
        let halal = c.list_by_status(HalalStatus::Halal, DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude);
        assert_eq!(ids(&halal), ["itaewon", "twin", "busan"]);
        assert!(c
            .list_by_status(HalalStatus::Mart, 0.0, 0.0)
            .is_empty());
    }

    #[test]
    fn group_counts_sum_to_catalog_size() {
        let c = catalog();
        let counts = c.group_counts();
        assert_eq!(counts[&HalalStatus::Halal], 3);
        assert_eq!(counts[&HalalStatus::Masjid], 1);
        assert_eq!(counts.get(&HalalStatus::Mart), None);
        assert_eq!(counts.values().sum::<usize>(), c.list_all().len());
    }

    #[test]
    fn lookup_by_id() {
        let c = catalog();
        assert_eq!(c.get_by_id("mosque").map(|p| p.name.as_str()), Some("Seoul Central Masjid"));
        assert!(c.get_by_id("MOSQUE").is_none());
        assert!(c.get_by_id("").is_none());
    }

    #[test]
    fn favorites_resolve_in_catalog_order() {
        let c = catalog();
        let favs = c.get_many(["twin", "missing", "busan"]);
        let names: Vec<_> = favs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(names, ["busan", "twin"]);
        assert!(c.get_many(std::iter::empty()).is_empty());
    }

    #[test]
    fn empty_catalog_answers_every_query() {
        let c = Catalog::default();
        assert!(c.list_all().is_empty());
        assert!(c.list_with_distance(0.0, 0.0).is_empty());
        assert!(c.search("", None).is_empty());
        assert!(c.group_counts().is_empty());
    }
}
