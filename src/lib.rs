//! Facade over [`placedb_core`]. Hosts the demos under `demos/`.
pub use placedb_core::*;
