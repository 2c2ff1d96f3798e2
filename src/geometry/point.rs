use geo_types::Coord;

/// A single position, or nothing at all.
///
/// An empty point has no coordinate. This is distinct from a point at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(Option<Coord>);

impl Point {
    /// Construct a new point from its x and y values.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord { x, y }))
    }

    /// Construct a point without a coordinate.
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn coord(&self) -> Option<Coord> {
        self.0
    }

    pub fn x(&self) -> Option<f64> {
        self.0.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.0.map(|c| c.y)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(Some(value))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
