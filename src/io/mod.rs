//! Reader and writer implementations for KML, plus interoperability with the `geo-types`
//! crate.

pub mod geo;
pub mod kml;
