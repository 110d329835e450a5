//! Groups and the shape tree.
//!
//! A [`Shape`] is either a [`Path`] or a [`Group`] of further shapes. Every
//! recursive operation matches both variants explicitly. Recursion follows
//! the tree depth; the SVG reader refuses trees deeper than
//! [`MAX_GROUP_DEPTH`](vecforge_core::constants::MAX_GROUP_DEPTH), and
//! trees built by hand should stay under the same limit.

use crate::element::PathElement;
use crate::path::Path;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};
use vecforge_core::constants::DEFAULT_CONTAINS_PRECISION;
use vecforge_core::{Color, Point, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Path(Path),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    shapes: Vec<Shape>,
}

impl Group {
    pub fn new() -> Self {
        Group::default()
    }

    pub fn from_shapes<I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = Shape>,
    {
        Group {
            shapes: shapes.into_iter().collect(),
        }
    }

    /// A new group with `shape` appended.
    pub fn push(&self, shape: impl Into<Shape>) -> Self {
        let mut shapes = self.shapes.clone();
        shapes.push(shape.into());
        Group { shapes }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Union of the bounds of every non-empty child. `Rect::ZERO` when
    /// there is none.
    pub fn bounds(&self) -> Rect {
        self.shapes
            .iter()
            .filter(|s| !s.is_empty())
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(Rect::ZERO)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_with(x, y, DEFAULT_CONTAINS_PRECISION)
    }

    pub fn contains_with(&self, x: f64, y: f64, precision: usize) -> bool {
        self.shapes.iter().any(|s| s.contains_with(x, y, precision))
    }

    pub fn colorize(&self, fill: Option<Color>, stroke: Option<Color>, stroke_width: f64) -> Self {
        self.map(|s| s.colorize(fill, stroke, stroke_width))
    }

    pub fn resample_by_amount(&self, amount: usize, per_contour: bool) -> Self {
        self.map(|s| s.resample_by_amount(amount, per_contour))
    }

    pub fn resample_by_length(&self, segment_length: f64) -> Self {
        self.map(|s| s.resample_by_length(segment_length))
    }

    pub fn transform(&self, transform: &Transform) -> Self {
        transform.transform_group(self)
    }

    /// Every path in the tree, depth first.
    pub fn paths(&self) -> Vec<&Path> {
        let mut out = Vec::new();
        for shape in &self.shapes {
            shape.collect_paths(&mut out);
        }
        out
    }

    /// Number of group levels, counting this one.
    pub fn depth(&self) -> usize {
        1 + self
            .shapes
            .iter()
            .map(|s| match s {
                Shape::Path(_) => 0,
                Shape::Group(g) => g.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&Shape) -> Shape,
    {
        Group {
            shapes: self.shapes.iter().map(f).collect(),
        }
    }
}

impl Shape {
    /// A path with no elements, or a group whose children are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Path(p) => p.is_empty(),
            Shape::Group(g) => g.shapes.iter().all(Shape::is_empty),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Path(p) => p.bounds(),
            Shape::Group(g) => g.bounds(),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_with(x, y, DEFAULT_CONTAINS_PRECISION)
    }

    pub fn contains_with(&self, x: f64, y: f64, precision: usize) -> bool {
        match self {
            Shape::Path(p) => p.contains_with(x, y, precision),
            Shape::Group(g) => g.contains_with(x, y, precision),
        }
    }

    pub fn colorize(&self, fill: Option<Color>, stroke: Option<Color>, stroke_width: f64) -> Self {
        match self {
            Shape::Path(p) => Shape::Path(p.colorize(fill, stroke, stroke_width)),
            Shape::Group(g) => Shape::Group(g.colorize(fill, stroke, stroke_width)),
        }
    }

    pub fn resample_by_amount(&self, amount: usize, per_contour: bool) -> Self {
        match self {
            Shape::Path(p) => Shape::Path(p.resample_by_amount(amount, per_contour)),
            Shape::Group(g) => Shape::Group(g.resample_by_amount(amount, per_contour)),
        }
    }

    pub fn resample_by_length(&self, segment_length: f64) -> Self {
        match self {
            Shape::Path(p) => Shape::Path(p.resample_by_length(segment_length)),
            Shape::Group(g) => Shape::Group(g.resample_by_length(segment_length)),
        }
    }

    pub fn transform(&self, transform: &Transform) -> Self {
        transform.transform_shape(self)
    }

    /// Length of the path, or of all paths of a group joined together.
    pub fn length(&self) -> f64 {
        match self {
            Shape::Path(p) => p.length(),
            Shape::Group(_) => combine_paths(self).length(),
        }
    }

    /// Position `t` on the path, or on all paths of a group joined together.
    pub fn point(&self, t: f64) -> Option<PathElement> {
        match self {
            Shape::Path(p) => p.point(t),
            Shape::Group(_) => combine_paths(self).point(t),
        }
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> Point {
        self.bounds().centroid()
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a Path>) {
        match self {
            Shape::Path(p) => out.push(p),
            Shape::Group(g) => {
                for child in &g.shapes {
                    child.collect_paths(out);
                }
            }
        }
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Shape::Path(path)
    }
}

impl From<Group> for Shape {
    fn from(group: Group) -> Self {
        Shape::Group(group)
    }
}

/// Flattens every path of `shape` into one path, depth first.
///
/// The result is unpainted unless `shape` is a single path, which is
/// returned unchanged.
pub fn combine_paths(shape: &Shape) -> Path {
    match shape {
        Shape::Path(p) => p.clone(),
        Shape::Group(g) => Path::from_elements(
            g.paths()
                .into_iter()
                .flat_map(|p| p.elements().iter().copied()),
        ),
    }
}
