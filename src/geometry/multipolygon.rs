use crate::geometry::Polygon;

/// A collection of polygons. Written to KML as a `MultiGeometry` of `Polygon` members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p0, p1};

    #[test]
    fn collect_polygons() {
        let multi: MultiPolygon = [p0(), p1()].into_iter().collect();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.polygons()[1].num_interiors(), 2);
        assert_eq!(multi.into_inner(), vec![p0(), p1()]);
    }
}
