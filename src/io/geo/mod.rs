//! Convert to and from [`geo_types`] geometries.

mod scalar;

pub use scalar::{
    geometry_collection_to_geo, geometry_from_geo, geometry_to_geo, line_string_to_geo,
    multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo, point_to_geo,
    polygon_to_geo,
};
