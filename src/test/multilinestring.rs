use crate::geometry::MultiLineString;
use crate::test::linestring::{ls0, ls1};

pub(crate) fn mls0() -> MultiLineString {
    MultiLineString::new(vec![ls0(), ls1()])
}
