// crates/placedb-core/src/archive.rs

//! # Archive Reader
//!
//! Handles the physical layer: reading the KMZ container from disk and
//! pulling the single KML document out of it. No partial recovery: a
//! truncated or malformed container fails the whole load.

use crate::error::{PlaceDbError, Result};
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Name of the KML document inside a KMZ produced by Google My Maps.
pub const DEFAULT_DOCUMENT: &str = "doc.kml";

/// Reads the whole archive file into memory.
pub fn read_archive_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            PlaceDbError::NotFound(format!("{}: {}", path.display(), e))
        }
        _ => PlaceDbError::Io(e),
    })
}

/// Opens a zip container and returns the text of the document called `name`.
pub fn read_document(bytes: &[u8], name: &str) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(PlaceDbError::MissingDocument {
                name: name.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut raw = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut raw)?;

    String::from_utf8(raw).map_err(|source| PlaceDbError::Encoding {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut zip = ZipWriter::new(&mut buf);
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            for (name, data) in entries {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data).unwrap();
            }
            zip.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn reads_named_document() {
        let bytes = zip_with(&[("images/a.png", b"png"), ("doc.kml", b"<kml/>")]);
        assert_eq!(read_document(&bytes, DEFAULT_DOCUMENT).unwrap(), "<kml/>");
    }

    #[test]
    fn missing_document_is_reported_by_name() {
        let bytes = zip_with(&[("other.kml", b"<kml/>")]);
        match read_document(&bytes, DEFAULT_DOCUMENT) {
            Err(PlaceDbError::MissingDocument { name }) => assert_eq!(name, "doc.kml"),
            other => panic!("expected MissingDocument, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_fail_as_archive_error() {
        let err = read_document(b"definitely not a zip", DEFAULT_DOCUMENT).unwrap_err();
        assert!(matches!(err, PlaceDbError::Archive(_)), "got {err:?}");
    }

    #[test]
    fn truncated_archive_fails() {
        let bytes = zip_with(&[("doc.kml", b"<kml>some longer content here</kml>")]);
        let truncated = &bytes[..bytes.len() / 2];
        assert!(read_document(truncated, DEFAULT_DOCUMENT).is_err());
    }

    #[test]
    fn non_utf8_document_is_an_encoding_error() {
        let bytes = zip_with(&[("doc.kml", &[0xff, 0xfe, 0x00])]);
        let err = read_document(&bytes, DEFAULT_DOCUMENT).unwrap_err();
        assert!(matches!(err, PlaceDbError::Encoding { .. }), "got {err:?}");
    }

    #[test]
    fn missing_file_on_disk_is_not_found() {
        let err = read_archive_file(Path::new("/nonexistent/placedb/test.kmz")).unwrap_err();
        assert!(matches!(err, PlaceDbError::NotFound(_)), "got {err:?}");
    }
}
