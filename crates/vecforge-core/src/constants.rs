//! Kernel-wide default constants.
//!
//! These are the defaults used by path queries when the caller does not
//! supply its own precision. `vecforge-settings` can override them at the
//! application level.

/// Chords per curve when measuring segment lengths.
pub const DEFAULT_CURVE_SAMPLES: usize = 20;

/// Chords per curve used by `Path::length` / `Path::point`.
pub const DEFAULT_PRECISION: usize = 10;

/// Number of polygon samples used by `Path::contains`.
pub const DEFAULT_CONTAINS_PRECISION: usize = 100;

/// Coordinates written to path data are clamped to `[-limit, limit]`.
pub const COORDINATE_LIMIT: f64 = 9999.0;

/// Relative tolerance used when testing bezier coefficients for degeneracy.
pub const FUZZY_EPSILON: f64 = 1e-12;

/// Extents at or below this are treated as zero by fit operations.
pub const ZERO_EXTENT: f64 = 1e-12;

/// Bezier approximation constant for quarter ellipses.
pub const KAPPA: f64 = 0.55;

/// Deepest group nesting the SVG reader will descend into.
pub const MAX_GROUP_DEPTH: usize = 256;

/// Most segments `resample_by_length` will build for one contour.
pub const MAX_RESAMPLE_SEGMENTS: usize = 1_000_000;

/// Default stroke width for generated line shapes.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
