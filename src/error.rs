//! Defines [`KmlError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KmlError {
    /// The input text is not well-formed markup.
    #[error("Malformed KML document: {source}")]
    MalformedDocument {
        /// The text passed to the reader, as given.
        text: String,
        /// The underlying XML error. Its position refers to the text after tag lowercasing and
        /// CDATA removal.
        source: roxmltree::Error,
    },

    /// A polygon's outer boundary does not hold exactly one ring.
    #[error("Malformed polygon: {0}")]
    MalformedPolygon(String),

    /// Geometry nesting exceeded the configured maximum depth.
    #[error("Geometry nesting exceeds the maximum depth of {0}")]
    RecursionLimit(usize),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, KmlError>;
