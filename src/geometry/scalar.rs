use crate::geometry::{
    GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Properties,
};

/// The shape of a [`Geometry`]: one variant per geometry kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Shape {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Shape::Point(_) => GeometryType::Point,
            Shape::LineString(_) => GeometryType::LineString,
            Shape::Polygon(_) => GeometryType::Polygon,
            Shape::MultiPoint(_) => GeometryType::MultiPoint,
            Shape::MultiLineString(_) => GeometryType::MultiLineString,
            Shape::MultiPolygon(_) => GeometryType::MultiPolygon,
            Shape::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Point(g) => g.is_empty(),
            Shape::LineString(g) => g.is_empty(),
            Shape::Polygon(g) => g.is_empty(),
            Shape::MultiPoint(g) => g.is_empty(),
            Shape::MultiLineString(g) => g.is_empty(),
            Shape::MultiPolygon(g) => g.is_empty(),
            Shape::GeometryCollection(g) => g.is_empty(),
        }
    }
}

/// A geometry of any kind, together with the scalar properties it was read with.
///
/// Properties are only populated by the KML reader for geometries that came out of a
/// `<Placemark>`; geometries built directly start with none.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    shape: Shape,
    properties: Properties,
}

impl Geometry {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            properties: Properties::new(),
        }
    }

    /// Replace the properties of this geometry.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn into_shape(self) -> Shape {
        self.shape
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Look up a single property by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn geometry_type(&self) -> GeometryType {
        self.shape.geometry_type()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }
}

impl From<Shape> for Geometry {
    fn from(value: Shape) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(value: $variant) -> Self {
                    Shape::$variant(value)
                }
            }

            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Self::new(Shape::$variant(value))
                }
            }
        )*
    };
}

impl_from_shape!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
