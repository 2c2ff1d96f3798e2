use crate::geometry::LineString;
use crate::io::kml::writer::{push_coords, Namespace};

/// Write a line string under the given tag, `LineString` or `LinearRing`.
///
/// An empty line string is written without `<coordinates>`.
pub(crate) fn write_line_string(
    geom: &LineString,
    tag: &str,
    ns: Namespace<'_>,
    out: &mut String,
) {
    ns.open(tag, out);
    if !geom.is_empty() {
        ns.open("coordinates", out);
        push_coords(geom.coords(), out);
        ns.close("coordinates", out);
    }
    ns.close(tag, out);
}
