use crate::error::{KmlError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon, Shape,
};

/// Convert a [`Point`] to a [`geo_types::Point`].
///
/// `geo_types` has no empty point, so empty points fail to convert.
pub fn point_to_geo(point: &Point) -> Result<geo_types::Point> {
    point
        .coord()
        .map(geo_types::Point)
        .ok_or_else(|| {
            KmlError::IncorrectType("cannot convert an empty point to geo_types".into())
        })
}

/// Convert a [`LineString`] to a [`geo_types::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> geo_types::LineString {
    geo_types::LineString::new(line_string.coords().to_vec())
}

/// Convert a [`Polygon`] to a [`geo_types::Polygon`].
///
/// An empty polygon becomes a polygon with an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo_types::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo_types::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo_types::Polygon::new(exterior, interiors)
}

/// Convert a [`MultiPoint`] to a [`geo_types::MultiPoint`].
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo_types::MultiPoint> {
    Ok(geo_types::MultiPoint::new(
        multi_point
            .points()
            .iter()
            .map(point_to_geo)
            .collect::<Result<_>>()?,
    ))
}

/// Convert a [`MultiLineString`] to a [`geo_types::MultiLineString`].
pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> geo_types::MultiLineString {
    geo_types::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a [`MultiPolygon`] to a [`geo_types::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo_types::MultiPolygon {
    geo_types::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a [`GeometryCollection`] to a [`geo_types::GeometryCollection`].
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo_types::GeometryCollection> {
    Ok(geo_types::GeometryCollection(
        geometry_collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect::<Result<_>>()?,
    ))
}

/// Convert any [`Geometry`] to a [`geo_types::Geometry`].
///
/// Properties are dropped.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo_types::Geometry> {
    let geom = match geometry.shape() {
        Shape::Point(geom) => geo_types::Geometry::Point(point_to_geo(geom)?),
        Shape::LineString(geom) => geo_types::Geometry::LineString(line_string_to_geo(geom)),
        Shape::Polygon(geom) => geo_types::Geometry::Polygon(polygon_to_geo(geom)),
        Shape::MultiPoint(geom) => geo_types::Geometry::MultiPoint(multi_point_to_geo(geom)?),
        Shape::MultiLineString(geom) => {
            geo_types::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Shape::MultiPolygon(geom) => {
            geo_types::Geometry::MultiPolygon(multi_polygon_to_geo(geom))
        }
        Shape::GeometryCollection(geom) => {
            geo_types::Geometry::GeometryCollection(geometry_collection_to_geo(geom)?)
        }
    };
    Ok(geom)
}

fn polygon_from_geo(polygon: geo_types::Polygon) -> Polygon {
    let (exterior, interiors) = polygon.into_inner();
    if exterior.0.is_empty() && interiors.is_empty() {
        return Polygon::empty();
    }
    Polygon::new(
        LineString::new(exterior.0),
        interiors
            .into_iter()
            .map(|interior| LineString::new(interior.0))
            .collect(),
    )
}

/// Convert a [`geo_types::Geometry`] into a [`Geometry`] without properties.
///
/// Lines become two-point line strings; rects and triangles become polygons.
pub fn geometry_from_geo(geometry: geo_types::Geometry) -> Geometry {
    let shape = match geometry {
        geo_types::Geometry::Point(geom) => Shape::Point(Point::from(geom.0)),
        geo_types::Geometry::Line(geom) => {
            Shape::LineString(LineString::new(vec![geom.start, geom.end]))
        }
        geo_types::Geometry::LineString(geom) => Shape::LineString(LineString::new(geom.0)),
        geo_types::Geometry::Polygon(geom) => Shape::Polygon(polygon_from_geo(geom)),
        geo_types::Geometry::MultiPoint(geom) => Shape::MultiPoint(
            geom.0
                .into_iter()
                .map(|point| Point::from(point.0))
                .collect(),
        ),
        geo_types::Geometry::MultiLineString(geom) => Shape::MultiLineString(
            geom.0
                .into_iter()
                .map(|line_string| LineString::new(line_string.0))
                .collect(),
        ),
        geo_types::Geometry::MultiPolygon(geom) => {
            Shape::MultiPolygon(geom.0.into_iter().map(polygon_from_geo).collect())
        }
        geo_types::Geometry::GeometryCollection(geom) => Shape::GeometryCollection(
            geom.0.into_iter().map(geometry_from_geo).collect(),
        ),
        geo_types::Geometry::Rect(geom) => Shape::Polygon(polygon_from_geo(geom.to_polygon())),
        geo_types::Geometry::Triangle(geom) => {
            Shape::Polygon(polygon_from_geo(geom.to_polygon()))
        }
    };
    shape.into()
}

impl From<geo_types::Geometry> for Geometry {
    fn from(value: geo_types::Geometry) -> Self {
        geometry_from_geo(value)
    }
}

impl TryFrom<&Geometry> for geo_types::Geometry {
    type Error = KmlError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}
