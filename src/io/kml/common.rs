//! The tag vocabulary shared by the KML reader and writer.

use phf::phf_map;

use crate::geometry::GeometryType;

/// Normalized (lower-case) geometry tags and the geometry kind each one is parsed as.
static GEOMETRY_TAGS: phf::Map<&'static str, GeometryType> = phf_map! {
    "point" => GeometryType::Point,
    "linestring" => GeometryType::LineString,
    "polygon" => GeometryType::Polygon,
    "multipoint" => GeometryType::MultiPoint,
    "multilinestring" => GeometryType::MultiLineString,
    "multipolygon" => GeometryType::MultiPolygon,
    "geometrycollection" => GeometryType::GeometryCollection,
};

pub(crate) const PLACEMARK: &str = "placemark";
pub(crate) const COORDINATES: &str = "coordinates";
pub(crate) const OUTER_BOUNDARY: &str = "outerboundaryis";
pub(crate) const INNER_BOUNDARY: &str = "innerboundaryis";
pub(crate) const LINEAR_RING: &str = "linearring";
pub(crate) const LINE_STRING: &str = "linestring";
pub(crate) const MULTI_GEOMETRY: &str = "multigeometry";
pub(crate) const GEOMETRY_COLLECTION: &str = "geometrycollection";

/// Scalar fields of a placemark that are carried over as geometry properties.
pub(crate) const PROPERTY_TAGS: [&str; 2] = ["name", "description"];

/// Look up the geometry kind for a normalized tag name.
///
/// Returns `None` for tags that do not describe a geometry.
pub(crate) fn geometry_type_from_tag(tag: &str) -> Option<GeometryType> {
    GEOMETRY_TAGS.get(tag).copied()
}

/// Rename `MultiGeometry` to the collection tag it is parsed as.
pub(crate) fn alias_tag(tag: &str) -> &str {
    if tag == MULTI_GEOMETRY {
        GEOMETRY_COLLECTION
    } else {
        tag
    }
}

/// Like [`alias_tag`], but also accepts bare rings as line strings, which collections may
/// hold directly.
pub(crate) fn alias_collection_member_tag(tag: &str) -> &str {
    if tag == LINEAR_RING {
        LINE_STRING
    } else {
        alias_tag(tag)
    }
}

/// The tag a geometry kind is written as.
///
/// KML has no typed multi geometries, so every collection kind is written as `MultiGeometry`.
pub(crate) fn kml_tag(geometry_type: GeometryType) -> &'static str {
    match geometry_type {
        GeometryType::Point => "Point",
        GeometryType::LineString => "LineString",
        GeometryType::Polygon => "Polygon",
        GeometryType::MultiPoint
        | GeometryType::MultiLineString
        | GeometryType::MultiPolygon
        | GeometryType::GeometryCollection => "MultiGeometry",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dispatch_known_tags() {
        assert_eq!(geometry_type_from_tag("point"), Some(GeometryType::Point));
        assert_eq!(
            geometry_type_from_tag(alias_tag("multigeometry")),
            Some(GeometryType::GeometryCollection)
        );
        assert_eq!(
            geometry_type_from_tag(alias_collection_member_tag("linearring")),
            Some(GeometryType::LineString)
        );
    }

    #[test]
    fn unknown_tags_are_not_dispatched() {
        assert_eq!(geometry_type_from_tag("name"), None);
        assert_eq!(geometry_type_from_tag("Point"), None);
        assert_eq!(geometry_type_from_tag(alias_tag("linearring")), None);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(kml_tag(GeometryType::Point), "Point");
        assert_eq!(kml_tag(GeometryType::MultiPolygon), "MultiGeometry");
        assert_eq!(kml_tag(GeometryType::GeometryCollection), "MultiGeometry");
    }
}
