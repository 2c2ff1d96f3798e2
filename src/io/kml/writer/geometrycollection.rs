use crate::geometry::{
    GeometryCollection, GeometryType, MultiLineString, MultiPoint, MultiPolygon,
};
use crate::io::kml::common::kml_tag;
use crate::io::kml::writer::geometry::write_geometry;
use crate::io::kml::writer::linestring::write_line_string;
use crate::io::kml::writer::point::write_point;
use crate::io::kml::writer::polygon::write_polygon;
use crate::io::kml::writer::Namespace;

/// Wrap the members written by `write_members` in a `<MultiGeometry>`.
fn write_multi_geometry(
    ns: Namespace<'_>,
    out: &mut String,
    write_members: impl FnOnce(&mut String),
) {
    let tag = kml_tag(GeometryType::GeometryCollection);
    ns.open(tag, out);
    write_members(out);
    ns.close(tag, out);
}

pub(crate) fn write_multi_point(geom: &MultiPoint, ns: Namespace<'_>, out: &mut String) {
    write_multi_geometry(ns, out, |out| {
        geom.points()
            .iter()
            .for_each(|point| write_point(point, ns, out))
    });
}

pub(crate) fn write_multi_line_string(
    geom: &MultiLineString,
    ns: Namespace<'_>,
    out: &mut String,
) {
    write_multi_geometry(ns, out, |out| {
        let tag = kml_tag(GeometryType::LineString);
        geom.line_strings()
            .iter()
            .for_each(|line_string| write_line_string(line_string, tag, ns, out))
    });
}

pub(crate) fn write_multi_polygon(geom: &MultiPolygon, ns: Namespace<'_>, out: &mut String) {
    write_multi_geometry(ns, out, |out| {
        geom.polygons()
            .iter()
            .for_each(|polygon| write_polygon(polygon, ns, out))
    });
}

/// Write a collection, recursing into every member with the same namespace.
pub(crate) fn write_geometry_collection(
    geom: &GeometryCollection,
    ns: Namespace<'_>,
    out: &mut String,
) {
    write_multi_geometry(ns, out, |out| {
        geom.geometries()
            .iter()
            .for_each(|member| write_geometry(member, ns, out))
    });
}
