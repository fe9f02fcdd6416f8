// crates/placedb-core/src/kml.rs

//! # Markup Parser
//!
//! Turns the KML document into a tree of named groups (folders) holding
//! markers (placemarks). The `*Raw` types mirror the markup; everything past
//! [`parse_document`] only sees the normalized [`KmlDocument`].

use crate::error::Result;
use serde::Deserialize;

/// A parsed KML document: one entry per `<Folder>`.
#[derive(Debug, Clone, PartialEq)]
pub struct KmlDocument {
    pub name: Option<String>,
    pub groups: Vec<Group>,
}

/// A named folder of markers. Zero, one or many markers are all valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub markers: Vec<Marker>,
}

/// One placemark as it appears in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    /// Free-text HTML-ish body.
    pub description: Option<String>,
    /// `longitude,latitude[,altitude]`, unparsed.
    pub coordinates: Option<String>,
}

// -----------------------------------------------------------------------------
// RAW MARKUP
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct KmlRaw {
    #[serde(rename = "Document")]
    document: DocumentRaw,
}

#[derive(Debug, Deserialize)]
struct DocumentRaw {
    #[serde(default)]
    name: Option<String>,
    // A lone <Folder> and a run of them both land here as a Vec.
    #[serde(rename = "Folder", default)]
    folders: Vec<FolderRaw>,
}

#[derive(Debug, Deserialize)]
struct FolderRaw {
    #[serde(default)]
    name: String,
    #[serde(rename = "Placemark", default)]
    placemarks: Vec<PlacemarkRaw>,
}

#[derive(Debug, Deserialize)]
struct PlacemarkRaw {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "Point", default)]
    point: Option<PointRaw>,
}

#[derive(Debug, Deserialize)]
struct PointRaw {
    #[serde(default)]
    coordinates: Option<String>,
}

impl From<DocumentRaw> for KmlDocument {
    fn from(raw: DocumentRaw) -> Self {
        let groups = raw
            .folders
            .into_iter()
            .map(|folder| Group {
                name: folder.name,
                markers: folder
                    .placemarks
                    .into_iter()
                    .map(|p| Marker {
                        name: p.name,
                        description: p.description,
                        coordinates: p.point.and_then(|pt| pt.coordinates),
                    })
                    .collect(),
            })
            .collect();

        KmlDocument {
            name: raw.name,
            groups,
        }
    }
}

/// Parses KML text. Markup that cannot be read as a whole is an error;
/// missing optional pieces (descriptions, points) are not.
pub fn parse_document(xml: &str) -> Result<KmlDocument> {
    let raw: KmlRaw = quick_xml::de::from_str(xml)?;
    Ok(raw.document.into())
}
