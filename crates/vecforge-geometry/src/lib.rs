//! # VecForge Geometry
//!
//! The immutable vector-geometry kernel: paths, groups, affine transforms,
//! bezier math, SVG element parsing and the shape generators and filters
//! built on top of them.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **PathElement**: MoveTo, LineTo, CurveTo and Close commands
//! - **Path**: Element sequence plus optional fill, stroke and stroke width
//! - **Group / Shape**: Recursive containers of paths
//! - **Transform**: 3x3 affine matrix with builder-style composition
//!
//! ### Algorithms
//! - **Bezier**: Point evaluation, splitting, chord lengths and extrema
//! - **Queries**: Bounds, length, point at `t`, containment, contours
//! - **Resampling**: Fixed point counts or fixed segment lengths
//! - **Seeded randomness**: `scatter` and `wiggle` repeat for a given seed
//!
//! ### Input / Output
//! - **SVG**: `d` path data, basic shapes, `transform` lists and inherited paint
//! - **Path data**: Compact `M0 0L10 0Z` serialisation
//! - **Render**: Primitive replay into any [`PathSink`], including lyon
//!
//! ## Architecture
//!
//! ```text
//! SvgElement tree ──> parse_element ──> Shape
//!                                         ├── Path (elements + paint)
//!                                         └── Group (shapes)
//!
//! generators ──> Path           filters: Shape ──> Shape
//!
//! Shape ──> replay / draw ──> PathSink / Canvas (host renderer)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vecforge_geometry::{parse_path_data, Transform};
//!
//! let path = parse_path_data("M0 0 L100 0 L100 100 Z").unwrap();
//! assert!((path.length() - (200.0 + 100.0 * 2f64.sqrt())).abs() < 1e-9);
//!
//! let moved = path.transform(&Transform::translation(10.0, 0.0));
//! assert_eq!(moved.bounds().x, 10.0);
//! assert!(moved.contains(60.0, 10.0));
//! ```

pub mod bezier;
pub mod element;
pub mod filters;
pub mod generators;
pub mod group;
pub mod path;
pub mod render;
pub mod svg;
pub mod transform;

pub use element::PathElement;
pub use filters::{CopyStep, HAlign, Orientation, StackDirection, VAlign, WiggleScope};
pub use generators::ArcKind;
pub use group::{combine_paths, Group, Shape};
pub use path::{point_in_polygon, Path};
pub use render::{draw, replay, to_lyon_path, Canvas, LyonSink, PathSink, RenderStyle};
pub use svg::{parse_element, parse_path_data, parse_transform, SvgElement};
pub use transform::Transform;

pub use vecforge_core::{Color, ColorError, GeometryError, Point, Rect};
