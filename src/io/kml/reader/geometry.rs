use itertools::Itertools;
use log::trace;
use roxmltree::Node;

use crate::error::{KmlError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, GeometryType, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Shape,
};
use crate::io::kml::common::{alias_collection_member_tag, geometry_type_from_tag};
use crate::io::kml::options::KmlReaderOptions;
use crate::io::kml::reader::linestring::parse_line_string;
use crate::io::kml::reader::point::parse_point;
use crate::io::kml::reader::polygon::parse_polygon;

/// Reader state threaded through the recursive descent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    options: &'a KmlReaderOptions,
    depth: usize,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(options: &'a KmlReaderOptions) -> Self {
        Self { options, depth: 0 }
    }

    fn descend(self) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(KmlError::RecursionLimit(self.options.max_depth));
        }
        Ok(Self { depth, ..self })
    }
}

/// Parse a geometry element whose tag has already been resolved to `geometry_type`.
pub(crate) fn parse_geometry(
    node: Node<'_, '_>,
    geometry_type: GeometryType,
    ctx: ParseContext<'_>,
) -> Result<Geometry> {
    let ctx = ctx.descend()?;
    let shape = match geometry_type {
        GeometryType::Point => Shape::Point(parse_point(node)),
        GeometryType::LineString => Shape::LineString(parse_line_string(node)),
        GeometryType::Polygon => Shape::Polygon(parse_polygon(node)?),
        GeometryType::MultiPoint => {
            Shape::MultiPoint(collect_points(parse_members(node, ctx)?))
        }
        GeometryType::MultiLineString => {
            Shape::MultiLineString(collect_line_strings(parse_members(node, ctx)?))
        }
        GeometryType::MultiPolygon => {
            Shape::MultiPolygon(collect_polygons(parse_members(node, ctx)?))
        }
        GeometryType::GeometryCollection => {
            let members = parse_members(node, ctx)?;
            if ctx.options.narrow_multi_geometries {
                narrow(members)
            } else {
                Shape::GeometryCollection(GeometryCollection::new(members))
            }
        }
    };
    Ok(shape.into())
}

/// Parse every direct child of a collection element that describes a geometry, in order.
///
/// Rings may appear directly inside a collection and are read as line strings.
fn parse_members(node: Node<'_, '_>, ctx: ParseContext<'_>) -> Result<Vec<Geometry>> {
    let mut members = vec![];
    for child in node.children().filter(Node::is_element) {
        let tag = alias_collection_member_tag(child.tag_name().name());
        match geometry_type_from_tag(tag) {
            Some(geometry_type) => members.push(parse_geometry(child, geometry_type, ctx)?),
            None => trace!("skipping <{tag}> inside collection"),
        }
    }
    Ok(members)
}

fn skip_member(expected: GeometryType, found: GeometryType) {
    trace!("skipping {found} member of {expected}");
}

fn collect_points(members: Vec<Geometry>) -> MultiPoint {
    members
        .into_iter()
        .filter_map(|member| match member.into_shape() {
            Shape::Point(point) => Some(point),
            other => {
                skip_member(GeometryType::MultiPoint, other.geometry_type());
                None
            }
        })
        .collect::<Vec<Point>>()
        .into()
}

fn collect_line_strings(members: Vec<Geometry>) -> MultiLineString {
    members
        .into_iter()
        .filter_map(|member| match member.into_shape() {
            Shape::LineString(line_string) => Some(line_string),
            other => {
                skip_member(GeometryType::MultiLineString, other.geometry_type());
                None
            }
        })
        .collect::<Vec<LineString>>()
        .into()
}

fn collect_polygons(members: Vec<Geometry>) -> MultiPolygon {
    members
        .into_iter()
        .filter_map(|member| match member.into_shape() {
            Shape::Polygon(polygon) => Some(polygon),
            other => {
                skip_member(GeometryType::MultiPolygon, other.geometry_type());
                None
            }
        })
        .collect::<Vec<Polygon>>()
        .into()
}

/// Turn the members of a `MultiGeometry` into a typed multi geometry when they all share a
/// kind that has one.
fn narrow(members: Vec<Geometry>) -> Shape {
    match members.iter().map(Geometry::geometry_type).all_equal_value() {
        Ok(GeometryType::Point) => Shape::MultiPoint(collect_points(members)),
        Ok(GeometryType::LineString) => Shape::MultiLineString(collect_line_strings(members)),
        Ok(GeometryType::Polygon) => Shape::MultiPolygon(collect_polygons(members)),
        _ => Shape::GeometryCollection(GeometryCollection::new(members)),
    }
}
