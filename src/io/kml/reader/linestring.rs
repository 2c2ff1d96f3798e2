use roxmltree::Node;

use crate::geometry::LineString;
use crate::io::kml::reader::coord::extract_coordinates;

/// Parse a `<LineString>` or `<LinearRing>` element.
pub(crate) fn parse_line_string(node: Node<'_, '_>) -> LineString {
    extract_coordinates(node).iter().map(|set| set.coord()).collect()
}
