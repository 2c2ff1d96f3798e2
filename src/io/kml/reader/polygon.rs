use roxmltree::Node;

use crate::error::{KmlError, Result};
use crate::geometry::{LineString, Polygon};
use crate::io::kml::common::{INNER_BOUNDARY, LINEAR_RING, LINE_STRING, OUTER_BOUNDARY};
use crate::io::kml::reader::child_elements;
use crate::io::kml::reader::linestring::parse_line_string;

/// Parse a `<Polygon>` element.
///
/// A polygon without `<outerBoundaryIs>` is empty. The outer boundary must hold exactly one
/// `<LinearRing>`. Inner boundaries may hold any number of rings, written either as
/// `<LinearRing>` or `<LineString>`.
pub(crate) fn parse_polygon(node: Node<'_, '_>) -> Result<Polygon> {
    let Some(outer_boundary) = child_elements(node, OUTER_BOUNDARY).next() else {
        return Ok(Polygon::empty());
    };

    let mut outer_rings = child_elements(outer_boundary, LINEAR_RING);
    let exterior = match (outer_rings.next(), outer_rings.next()) {
        (Some(ring), None) => parse_line_string(ring),
        (None, _) => {
            return Err(KmlError::MalformedPolygon(
                "outer boundary holds no linear ring".to_string(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(KmlError::MalformedPolygon(
                "outer boundary holds more than one linear ring".to_string(),
            ))
        }
    };

    let interiors: Vec<LineString> = child_elements(node, INNER_BOUNDARY)
        .flat_map(|boundary| {
            boundary.children().filter(|child| {
                child.is_element()
                    && matches!(child.tag_name().name(), LINEAR_RING | LINE_STRING)
            })
        })
        .map(parse_line_string)
        .collect();

    Ok(Polygon::new(exterior, interiors))
}
