//! placedb-cli
//! ===========
//!
//! Command-line interface for the `placedb-core` place catalog.
//!
//! This crate primarily provides a binary (`placedb`). The library target
//! exists so docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! placedb --help
//! placedb stats
//! placedb --lat 37.5345 --lng 126.9946 nearby -n 5
//! placedb search kebab
//! placedb --json status masjid
//! ```
//!
//! For programmatic access use the [`placedb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
