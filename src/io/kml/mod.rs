//! Read from and write to [KML](https://developers.google.com/kml/documentation/kmlreference)
//! geometry markup.
//!
//! Only the geometry elements (`Point`, `LineString`, `Polygon` and `MultiGeometry`) and the
//! `name` and `description` of a `Placemark` are understood. Everything else in a document is
//! skipped.

pub use options::{KmlReaderOptions, KmlWriterOptions};
pub use reader::{read_kml, read_kml_from, KmlReader};
pub use writer::{write_kml, KmlWriter};

mod common;
mod options;
mod reader;
#[cfg(test)]
mod test;
mod writer;
