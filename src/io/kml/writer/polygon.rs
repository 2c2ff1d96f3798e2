use crate::geometry::{GeometryType, Polygon};
use crate::io::kml::common::kml_tag;
use crate::io::kml::writer::linestring::write_line_string;
use crate::io::kml::writer::Namespace;

/// Write a `<Polygon>` with its outer ring as a `<LinearRing>` and each inner ring as a
/// `<LineString>` inside its own `<innerBoundaryIs>`.
pub(crate) fn write_polygon(geom: &Polygon, ns: Namespace<'_>, out: &mut String) {
    let tag = kml_tag(GeometryType::Polygon);
    ns.open(tag, out);
    if let Some(exterior) = geom.exterior() {
        ns.open("outerBoundaryIs", out);
        write_line_string(exterior, "LinearRing", ns, out);
        ns.close("outerBoundaryIs", out);

        for interior in geom.interiors() {
            ns.open("innerBoundaryIs", out);
            write_line_string(interior, kml_tag(GeometryType::LineString), ns, out);
            ns.close("innerBoundaryIs", out);
        }
    }
    ns.close(tag, out);
}
