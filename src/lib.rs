//! Read and write [KML](https://developers.google.com/kml/documentation/kmlreference)
//! geometries.
//!
//! ```
//! use geokml::geometry::{Point, Shape};
//! use geokml::io::kml::{read_kml, write_kml};
//!
//! let geom = read_kml(
//!     "<Placemark><name>A</name><Point><coordinates>1,2</coordinates></Point></Placemark>",
//! )
//! .unwrap();
//! assert_eq!(geom.shape(), &Shape::Point(Point::new(1., 2.)));
//! assert_eq!(geom.property("name"), Some("A"));
//!
//! assert_eq!(
//!     write_kml(&geom, Some("gx")),
//!     "<gx:Point><gx:coordinates>1,2</gx:coordinates></gx:Point>"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use geometry::Geometry;

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
