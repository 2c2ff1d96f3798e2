use roxmltree::Node;

use crate::geometry::Point;
use crate::io::kml::reader::coord::extract_coordinates;

/// Parse a `<Point>` element.
///
/// Only the first coordinate set is used; a point without coordinates is empty.
pub(crate) fn parse_point(node: Node<'_, '_>) -> Point {
    extract_coordinates(node)
        .first()
        .map(|set| Point::from(set.coord()))
        .unwrap_or_default()
}
