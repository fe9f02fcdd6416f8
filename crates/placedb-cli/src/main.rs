//! placedb: command-line interface for placedb-core
//!
//! Usage examples
//! --------------
//!
//! - Show what the build accepted and skipped
//!   $ placedb stats
//!
//! - Five nearest places to a point
//!   $ placedb --lat 37.5345 --lng 126.9946 nearby -n 5
//!
//! - Search, ranked from Seoul Station, as JSON
//!   $ placedb --lat 37.5547 --lng 126.9707 --json search kebab
//!
//! - Prayer spaces, nearest first
//!   $ placedb status masjid
//!
//! Logs go to stderr (`RUST_LOG=placedb_core=debug` shows every skipped
//! marker), so `--json` output on stdout stays machine-readable.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use placedb_core::{
    format_distance, Catalog, GeoPoint, HalalStatus, LoaderConfig, Place, PlaceQuery,
    PlaceWithDistance, DEFAULT_CENTER,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(LoaderConfig::from_env()?, args.input, args.document);

    let reference = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let point = GeoPoint::new(lat, lng);
            if !point.is_valid() {
                bail!("reference point out of range: {lat}, {lng}");
            }
            Some(point)
        }
        _ => None,
    };
    let origin = reference.unwrap_or(DEFAULT_CENTER);
    debug!(
        archive = %config.archive_path.display(),
        document = %config.document_name,
        ?reference,
        "resolved loader config"
    );

    let catalog = Catalog::load_from(&config)
        .with_context(|| format!("loading {}", config.archive_path.display()))?;
    let json = args.json;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if json {
                return print_json(&stats);
            }
            println!("Catalog statistics:");
            println!("  Places: {}", stats.accepted);
            println!("  Groups: {} ({} unrecognized)", stats.groups, stats.unknown_groups);
            println!("  Skipped markers: {}", stats.skipped());
            println!("    without name: {}", stats.skipped_empty_name);
            println!("    without coordinates: {}", stats.skipped_no_coordinates);
            println!("    bad coordinates: {}", stats.skipped_bad_coordinates);
            println!("  Id collisions: {}", stats.id_collisions);
        }

        Commands::List => {
            if json {
                return write_list_json(&catalog, std::io::stdout().lock());
            }
            for place in catalog.list_all() {
                print_place_line(place, None);
            }
        }

        Commands::Nearby { limit } => {
            let mut ranked = catalog.list_with_distance(origin.latitude, origin.longitude);
            ranked.truncate(limit);
            print_hits(&ranked, true, json)?;
        }

        Commands::Search { query } => {
            let hits = catalog.search(&query, reference);
            if hits.is_empty() && !json {
                println!("No places found matching: {query}");
            } else {
                print_hits(&hits, reference.is_some(), json)?;
            }
        }

        Commands::Status { status } => {
            let hits = catalog.list_by_status(status, origin.latitude, origin.longitude);
            print_hits(&hits, true, json)?;
        }

        Commands::Show { id } => {
            let Some(place) = catalog.get_by_id(&id) else {
                bail!("no place with id: {id}");
            };
            if json {
                return print_json(&PlaceWithDistance::new(place, place.distance_from(&origin)));
            }
            print_place_detail(place, place.distance_from(&origin));
        }

        Commands::Favorites { ids } => {
            let places = catalog.get_many(ids.iter().map(String::as_str));
            if json {
                return print_json(&places);
            }
            for place in places {
                print_place_line(place, None);
            }
        }

        Commands::Counts => {
            let counts = catalog.group_counts();
            if json {
                return print_json(&counts);
            }
            for status in HalalStatus::ALL {
                let n = counts.get(&status).copied().unwrap_or(0);
                println!("{:<24} {n}", status.label());
            }
            println!("{:<24} {}", "Total", catalog.len());
        }
    }

    Ok(())
}

/// Flags override environment, environment overrides defaults.
fn resolve_config(
    mut config: LoaderConfig,
    input: Option<PathBuf>,
    document: Option<String>,
) -> LoaderConfig {
    if let Some(input) = input {
        config.archive_path = input;
    }
    if let Some(document) = document {
        config.document_name = document;
    }
    config
}

/// Full catalog as a pretty JSON array, newline-terminated.
fn write_list_json<W: Write>(catalog: &Catalog, mut out: W) -> anyhow::Result<()> {
    #[cfg(feature = "json")]
    catalog.write_json(&mut out)?;
    #[cfg(not(feature = "json"))]
    serde_json::to_writer_pretty(&mut out, catalog.list_all())?;
    writeln!(out)?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_hits(hits: &[PlaceWithDistance<'_>], ranked: bool, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(hits);
    }
    for hit in hits {
        print_place_line(hit.place, ranked.then_some(hit.distance_km));
    }
    Ok(())
}

fn print_place_line(place: &Place, distance_km: Option<f64>) {
    match distance_km {
        Some(d) => println!(
            "{:>8}  {} [{}] ({})",
            format_distance(d),
            place.name,
            place.halal_status,
            place.id
        ),
        None => println!("{} [{}] ({})", place.name, place.halal_status, place.id),
    }
}

fn print_place_detail(place: &Place, distance_km: f64) {
    println!("Place: {}", place.name);
    println!("Id: {}", place.id);
    println!("Status: {}", place.halal_status.label());
    println!("Category: {}", place.category);
    println!("Location: {:.4}, {:.4} ({} away)", place.latitude, place.longitude, format_distance(distance_km));
    if let Some(hours) = &place.opening_hours {
        println!("Hours: {hours}");
    }
    if let Some(price) = &place.price_range {
        println!("Price: {price}");
    }
    if let Some(url) = &place.instagram_url {
        println!("Instagram: {url}");
    }
    if let Some(url) = &place.image_url {
        println!("Image: {url}");
    }
    if !place.description.is_empty() {
        println!();
        println!("{}", place.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_environment() {
        let from_env = LoaderConfig::default()
            .with_archive("/env/places.kmz")
            .with_document("env.kml");

        let untouched = resolve_config(from_env.clone(), None, None);
        assert_eq!(untouched, from_env);

        let overridden = resolve_config(
            from_env,
            Some(PathBuf::from("/flag/places.kmz")),
            Some("flag.kml".to_string()),
        );
        assert_eq!(overridden.archive_path, PathBuf::from("/flag/places.kmz"));
        assert_eq!(overridden.document_name, "flag.kml");
    }

    #[test]
    fn list_json_is_the_whole_catalog() {
        let catalog = Catalog::load_from(&LoaderConfig::default()).unwrap();
        let mut out = Vec::new();
        write_list_json(&catalog, &mut out).unwrap();

        assert!(out.ends_with(b"\n"));
        let parsed: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), catalog.len());
        assert_eq!(parsed[0]["id"], catalog.list_all()[0].id.as_str());
    }

    #[test]
    fn list_json_of_an_empty_catalog_is_an_empty_array() {
        let mut out = Vec::new();
        write_list_json(&Catalog::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
