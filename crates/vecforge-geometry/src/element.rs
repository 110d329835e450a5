//! Path elements.
//!
//! A path is a flat sequence of drawing commands. Every command except
//! [`PathElement::Close`] ends at an anchor point; curves also carry two
//! control handles.

use serde::{Deserialize, Serialize};
use vecforge_core::Point;

/// One drawing command of a [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum PathElement {
    /// Starts a new contour at `point`.
    MoveTo { point: Point },
    /// Straight line from the current point to `point`.
    LineTo { point: Point },
    /// Cubic bezier. `ctrl1` departs the previous anchor, `ctrl2` is the
    /// incoming handle at `point`.
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        point: Point,
    },
    /// Line back to the most recent `MoveTo`.
    Close,
}

impl PathElement {
    pub fn move_to(x: f64, y: f64) -> Self {
        PathElement::MoveTo {
            point: Point::new(x, y),
        }
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        PathElement::LineTo {
            point: Point::new(x, y),
        }
    }

    pub fn curve_to(c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        PathElement::CurveTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            point: Point::new(x, y),
        }
    }

    /// The anchor point, `None` for `Close`.
    pub fn point(&self) -> Option<Point> {
        match self {
            PathElement::MoveTo { point }
            | PathElement::LineTo { point }
            | PathElement::CurveTo { point, .. } => Some(*point),
            PathElement::Close => None,
        }
    }

    pub fn is_move_to(&self) -> bool {
        matches!(self, PathElement::MoveTo { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, PathElement::Close)
    }

    /// Applies `f` to every point the element carries, handles included.
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Point) -> Point,
    {
        match *self {
            PathElement::MoveTo { point } => PathElement::MoveTo { point: f(point) },
            PathElement::LineTo { point } => PathElement::LineTo { point: f(point) },
            PathElement::CurveTo {
                ctrl1,
                ctrl2,
                point,
            } => PathElement::CurveTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                point: f(point),
            },
            PathElement::Close => PathElement::Close,
        }
    }

    /// True when every coordinate is finite. `Close` is always finite.
    pub fn is_finite(&self) -> bool {
        match self {
            PathElement::MoveTo { point } | PathElement::LineTo { point } => point.is_finite(),
            PathElement::CurveTo {
                ctrl1,
                ctrl2,
                point,
            } => ctrl1.is_finite() && ctrl2.is_finite() && point.is_finite(),
            PathElement::Close => true,
        }
    }
}
