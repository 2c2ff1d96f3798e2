use geo_types::Coord;

use crate::geometry::Point;

/// An ordered sequence of coordinates.
///
/// Also used for polygon rings. Coordinate order is significant and never changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// Iterate over the coordinates of this line string as [`Point`]s.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().map(|coord| Point::from(*coord))
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(value: Vec<(f64, f64)>) -> Self {
        Self(value.into_iter().map(Coord::from).collect())
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
