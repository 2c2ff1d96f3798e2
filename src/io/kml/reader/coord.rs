use geo_types::Coord;
use log::trace;
use roxmltree::Node;

use crate::io::kml::common::COORDINATES;
use crate::io::kml::reader::{child_elements, text_content};

/// One `x,y[,z]` tuple from a `<coordinates>` element. Altitude is not kept.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CoordinateSet(Coord);

impl CoordinateSet {
    /// Parse a single comma-separated tuple.
    ///
    /// Returns `None` unless the first two components are numbers. Any further components
    /// are ignored, whether or not they parse.
    fn parse(token: &str) -> Option<Self> {
        let mut components = token.split(',').map(|component| component.trim().parse::<f64>());
        let x = components.next()?.ok()?;
        let y = components.next()?.ok()?;
        Some(Self(Coord { x, y }))
    }

    pub(crate) fn coord(&self) -> Coord {
        self.0
    }
}

/// Split the text of a `<coordinates>` element into coordinate sets.
///
/// Line breaks count as separators. Empty and malformed tuples are dropped.
pub(crate) fn parse_coordinate_text(text: &str) -> Vec<CoordinateSet> {
    text.replace(['\r', '\n'], " ")
        .split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let set = CoordinateSet::parse(token);
            if set.is_none() {
                trace!("dropping malformed coordinate tuple {token:?}");
            }
            set
        })
        .collect()
}

/// Extract the coordinate sets of a geometry element from its first direct `<coordinates>`
/// child.
///
/// A missing `<coordinates>` element yields no coordinates.
pub(crate) fn extract_coordinates(node: Node<'_, '_>) -> Vec<CoordinateSet> {
    child_elements(node, COORDINATES)
        .next()
        .map(|coordinates| parse_coordinate_text(&text_content(coordinates)))
        .unwrap_or_default()
}
