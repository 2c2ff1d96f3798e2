use roxmltree::Node;

use crate::geometry::Properties;
use crate::io::kml::common::PROPERTY_TAGS;
use crate::io::kml::reader::text_content;

/// Whether a normalized tag is one of the scalar fields copied onto geometries.
pub(crate) fn is_property_tag(tag: &str) -> bool {
    PROPERTY_TAGS.contains(&tag)
}

/// Collect the recognized scalar fields among the direct children of a placemark.
///
/// A later field with the same tag replaces an earlier one.
pub(crate) fn extract_properties(placemark: Node<'_, '_>) -> Properties {
    placemark
        .children()
        .filter(Node::is_element)
        .filter(|child| is_property_tag(child.tag_name().name()))
        .map(|child| (child.tag_name().name().to_string(), text_content(child)))
        .collect()
}
