//! Parse KML text into [`Geometry`] values.

use std::io::Read;

use log::{debug, trace};
use roxmltree::{Document, Node};

use crate::error::{KmlError, Result};
use crate::geometry::{Geometry, GeometryCollection};
use crate::io::kml::common::{alias_tag, geometry_type_from_tag, PLACEMARK};
use crate::io::kml::options::KmlReaderOptions;
use crate::io::kml::reader::geometry::{parse_geometry, ParseContext};
use crate::io::kml::reader::normalize::normalize;
use crate::io::kml::reader::properties::{extract_properties, is_property_tag};

mod coord;
mod geometry;
mod linestring;
mod normalize;
mod point;
mod polygon;
mod properties;

/// Direct element children of `node` with the given normalized tag.
pub(crate) fn child_elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// All text below `node`, concatenated in document order.
pub(crate) fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|text| text.text())
        .collect()
}

/// Reads KML documents into geometries.
#[derive(Debug, Clone, Default)]
pub struct KmlReader {
    options: KmlReaderOptions,
}

impl KmlReader {
    pub fn new(options: KmlReaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &KmlReaderOptions {
        &self.options
    }

    /// Parse a KML document into a single geometry.
    ///
    /// Every `<Placemark>` in the document contributes the geometries among its direct
    /// children, each carrying the placemark's `name` and `description` as properties. A
    /// document without placemarks is read as a bare geometry element at its root.
    ///
    /// One geometry is returned as-is and several are wrapped in a
    /// [`GeometryCollection`] in document order. A document without any geometry yields an
    /// empty [`GeometryCollection`].
    pub fn read(&self, text: &str) -> Result<Geometry> {
        let normalized = normalize(text);
        let doc = Document::parse(&normalized).map_err(|source| KmlError::MalformedDocument {
            text: text.to_string(),
            source,
        })?;
        let geometries = self.read_geometries(&doc)?;
        debug!("read {} top-level geometries", geometries.len());
        Ok(reduce(geometries))
    }

    /// Read a KML document from a [`Read`] source. See [`KmlReader::read`].
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Geometry> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.read(&text)
    }

    fn read_geometries(&self, doc: &Document<'_>) -> Result<Vec<Geometry>> {
        let ctx = ParseContext::new(&self.options);
        let mut geometries = vec![];

        let mut placemarks = doc
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == PLACEMARK)
            .peekable();

        if placemarks.peek().is_none() {
            let root = doc.root_element();
            let tag = alias_tag(root.tag_name().name());
            debug!("no placemarks found, reading <{tag}> root as geometry");
            if let Some(geometry_type) = geometry_type_from_tag(tag) {
                geometries.push(parse_geometry(root, geometry_type, ctx)?);
            }
            return Ok(geometries);
        }

        for placemark in placemarks {
            let properties = extract_properties(placemark);
            for child in placemark.children().filter(Node::is_element) {
                let tag = alias_tag(child.tag_name().name());
                if let Some(geometry_type) = geometry_type_from_tag(tag) {
                    let geometry = parse_geometry(child, geometry_type, ctx)?;
                    geometries.push(geometry.with_properties(properties.clone()));
                } else if !is_property_tag(tag) {
                    trace!("skipping <{tag}> in placemark");
                }
            }
        }
        Ok(geometries)
    }
}

/// Collapse the top-level geometries of a document into one geometry.
fn reduce(mut geometries: Vec<Geometry>) -> Geometry {
    if geometries.len() == 1 {
        if let Some(geometry) = geometries.pop() {
            return geometry;
        }
    }
    GeometryCollection::new(geometries).into()
}

/// Parse a KML document with default options. See [`KmlReader::read`].
pub fn read_kml(text: &str) -> Result<Geometry> {
    KmlReader::default().read(text)
}

/// Read a KML document from a [`Read`] source with default options.
pub fn read_kml_from<R: Read>(reader: R) -> Result<Geometry> {
    KmlReader::default().read_from(reader)
}
