use clap::{Parser, Subcommand};
use placedb_core::HalalStatus;
use std::path::PathBuf;

/// CLI arguments for placedb
#[derive(Debug, Parser)]
#[command(
    name = "placedb",
    version,
    about = "CLI for querying the halal place catalog built from a KMZ archive"
)]
pub struct CliArgs {
    /// Path to the KMZ archive (default: bundled halal-restaurants.kmz, or $PLACEDB_ARCHIVE)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Name of the KML document inside the archive (default: doc.kml, or $PLACEDB_DOCUMENT)
    #[arg(short = 'd', long = "document", global = true)]
    pub document: Option<String>,

    /// Reference latitude (default: Seoul Station)
    #[arg(long, global = true, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,

    /// Reference longitude (default: Seoul Station)
    #[arg(long, global = true, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show what the build accepted and skipped
    Stats,

    /// List every place in catalog order
    List,

    /// List places nearest to the reference point
    Nearby {
        /// Maximum number of places to print
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Search names and descriptions (case-insensitive). Ranked only when --lat/--lng are given
    Search {
        /// Substring to search for
        query: String,
    },

    /// List places with one halal status, nearest first
    Status {
        /// e.g. halal, partially_halal, masjid, mart
        status: HalalStatus,
    },

    /// Show a single place by id
    Show {
        id: String,
    },

    /// Resolve a set of favorite ids, in catalog order
    Favorites {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Count places per halal status
    Counts,
}
