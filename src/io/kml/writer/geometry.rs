use crate::geometry::{Geometry, GeometryType, Shape};
use crate::io::kml::common::kml_tag;
use crate::io::kml::writer::geometrycollection::{
    write_geometry_collection, write_multi_line_string, write_multi_point, write_multi_polygon,
};
use crate::io::kml::writer::linestring::write_line_string;
use crate::io::kml::writer::point::write_point;
use crate::io::kml::writer::polygon::write_polygon;
use crate::io::kml::writer::Namespace;

/// Write any geometry. Properties are not written.
pub(crate) fn write_geometry(geom: &Geometry, ns: Namespace<'_>, out: &mut String) {
    match geom.shape() {
        Shape::Point(geom) => write_point(geom, ns, out),
        Shape::LineString(geom) => {
            write_line_string(geom, kml_tag(GeometryType::LineString), ns, out)
        }
        Shape::Polygon(geom) => write_polygon(geom, ns, out),
        Shape::MultiPoint(geom) => write_multi_point(geom, ns, out),
        Shape::MultiLineString(geom) => write_multi_line_string(geom, ns, out),
        Shape::MultiPolygon(geom) => write_multi_polygon(geom, ns, out),
        Shape::GeometryCollection(geom) => write_geometry_collection(geom, ns, out),
    }
}
