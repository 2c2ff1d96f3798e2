//! The geometry object model produced by the KML reader and consumed by the KML writer.
//!
//! All types own their coordinates. Coordinates are [`geo_types::Coord`] values, so they can
//! be handed to the wider `geo` ecosystem without copying through an intermediate type.

pub use geo_types::Coord;
pub use geometry_type::GeometryType;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use scalar::{Geometry, Shape};

mod geometry_type;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod scalar;

/// Scalar properties attached to a geometry, keyed by the tag they were read from.
///
/// Insertion order is preserved.
pub type Properties = indexmap::IndexMap<String, String>;
