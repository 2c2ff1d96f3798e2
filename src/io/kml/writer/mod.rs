//! Write [`Geometry`] values as KML text.

use std::fmt::Write as _;
use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::geometry::{Coord, Geometry};
use crate::io::kml::options::KmlWriterOptions;
use crate::io::kml::writer::geometry::write_geometry;

mod geometry;
mod geometrycollection;
mod linestring;
mod point;
mod polygon;

/// The namespace prefix applied to every written tag.
///
/// Passed by value into every writer function, including the recursive calls for the members
/// of collections.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Namespace<'a>(Option<&'a str>);

impl<'a> Namespace<'a> {
    /// An empty prefix is treated like no prefix.
    pub(crate) fn new(prefix: Option<&'a str>) -> Self {
        Self(prefix.filter(|prefix| !prefix.is_empty()))
    }

    fn push_name(&self, tag: &str, out: &mut String) {
        if let Some(prefix) = self.0 {
            out.push_str(prefix);
            out.push(':');
        }
        out.push_str(tag);
    }

    pub(crate) fn open(&self, tag: &str, out: &mut String) {
        out.push('<');
        self.push_name(tag, out);
        out.push('>');
    }

    pub(crate) fn close(&self, tag: &str, out: &mut String) {
        out.push_str("</");
        self.push_name(tag, out);
        out.push('>');
    }
}

/// Write `x,y` pairs separated by single spaces.
pub(crate) fn push_coords<'c>(coords: impl IntoIterator<Item = &'c Coord>, out: &mut String) {
    let coords = coords
        .into_iter()
        .format_with(" ", |coord, f| f(&format_args!("{},{}", coord.x, coord.y)));
    // Formatting into a String cannot fail.
    let _ = write!(out, "{coords}");
}

/// Writes geometries as KML fragments.
///
/// The output is the geometry element alone, without a surrounding `<kml>` document or
/// `<Placemark>`.
#[derive(Debug, Clone, Default)]
pub struct KmlWriter {
    options: KmlWriterOptions,
}

impl KmlWriter {
    pub fn new(options: KmlWriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &KmlWriterOptions {
        &self.options
    }

    pub fn write(&self, geometry: &Geometry) -> String {
        let mut out = String::new();
        write_geometry(geometry, Namespace::new(self.options.namespace.as_deref()), &mut out);
        out
    }

    /// Write the KML for `geometry` to a [`Write`] sink.
    pub fn write_to<W: Write>(&self, geometry: &Geometry, mut writer: W) -> Result<()> {
        writer.write_all(self.write(geometry).as_bytes())?;
        Ok(())
    }
}

/// Write a geometry as KML, optionally prefixing every tag with `namespace`.
pub fn write_kml(geometry: &Geometry, namespace: Option<&str>) -> String {
    let mut out = String::new();
    write_geometry(geometry, Namespace::new(namespace), &mut out);
    out
}
