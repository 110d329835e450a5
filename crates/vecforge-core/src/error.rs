//! Error handling for VecForge
//!
//! Provides the error types raised by the geometry kernel:
//! - Geometry errors (singular matrices, malformed path data, bad attributes)
//! - Color errors (hex, named and functional color notation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures in the transform algebra and in turning external
/// shape descriptions into paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The affine matrix has no inverse
    #[error("Singular matrix: determinant is {determinant}")]
    SingularMatrix {
        /// The 2x2 determinant of the matrix.
        determinant: f64,
    },

    /// Path data could not be parsed
    #[error("Malformed path data at token {position} ({token:?}): {reason}")]
    MalformedPathData {
        /// Index of the offending token.
        position: usize,
        /// The offending token, empty when the data ended early.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// A shape attribute could not be interpreted
    #[error("Invalid attribute '{attribute}' on <{element}>: {value:?}")]
    InvalidAttribute {
        /// Tag name of the element.
        element: String,
        /// Attribute name.
        attribute: String,
        /// The raw attribute value.
        value: String,
    },

    /// A group tree is nested deeper than the kernel will recurse
    #[error("Group nesting too deep: {depth} levels")]
    NestingTooDeep {
        /// The depth at which parsing stopped.
        depth: usize,
    },
}

impl GeometryError {
    /// Create a malformed path data error
    pub fn malformed(position: usize, token: impl Into<String>, reason: impl Into<String>) -> Self {
        GeometryError::MalformedPathData {
            position,
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Color error type
///
/// Represents errors parsing color notations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex notation with a bad length or non-hex digits
    #[error("Invalid hex color: {value}")]
    InvalidHex {
        /// The rejected value.
        value: String,
    },

    /// Name not present in the named color table
    #[error("Unknown color name: {name}")]
    UnknownName {
        /// The rejected name.
        name: String,
    },

    /// Malformed `rgb(...)` / `rgba(...)` notation
    #[error("Invalid color function: {value}")]
    InvalidFunction {
        /// The rejected value.
        value: String,
    },
}

/// Main error type for VecForge
///
/// A unified error type that can represent any kernel error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Color error
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a singular matrix error
    pub fn is_singular_matrix(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::SingularMatrix { .. }))
    }

    /// Check if this is a path data error
    pub fn is_malformed_path_data(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::MalformedPathData { .. }))
    }

    /// Check if this is a color error
    pub fn is_color_error(&self) -> bool {
        matches!(self, Error::Color(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
