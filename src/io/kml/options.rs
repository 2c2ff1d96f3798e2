use serde::{Deserialize, Serialize};

/// Options for reading KML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmlReaderOptions {
    /// The deepest geometry nesting accepted before the read fails with
    /// [`KmlError::RecursionLimit`][crate::error::KmlError::RecursionLimit].
    ///
    /// Every geometry element counts as one level, so a point inside a `MultiGeometry` is at
    /// depth 2.
    pub max_depth: usize,

    /// Return a `MultiGeometry` whose members all share a kind as the matching typed multi
    /// geometry (e.g. [`MultiPoint`][crate::geometry::MultiPoint]) instead of a
    /// [`GeometryCollection`][crate::geometry::GeometryCollection].
    pub narrow_multi_geometries: bool,
}

impl Default for KmlReaderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            narrow_multi_geometries: false,
        }
    }
}

/// Options for writing KML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmlWriterOptions {
    /// Namespace prefix applied to every written tag, e.g. `gx` writes `<gx:Point>`.
    pub namespace: Option<String>,
}

impl KmlWriterOptions {
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }
}
