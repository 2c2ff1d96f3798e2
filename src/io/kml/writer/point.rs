use crate::geometry::{GeometryType, Point};
use crate::io::kml::common::kml_tag;
use crate::io::kml::writer::{push_coords, Namespace};

/// Write a `<Point>`, leaving out `<coordinates>` when the point is empty.
pub(crate) fn write_point(geom: &Point, ns: Namespace<'_>, out: &mut String) {
    let tag = kml_tag(GeometryType::Point);
    ns.open(tag, out);
    if let Some(coord) = geom.coord() {
        ns.open("coordinates", out);
        push_coords(&[coord], out);
        ns.close("coordinates", out);
    }
    ns.close(tag, out);
}
