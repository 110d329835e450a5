//! Shape filters.
//!
//! Every filter takes a shape and returns a new one; paint is preserved
//! unless the filter is about paint.

use crate::element::PathElement;
use crate::group::{Group, Shape};
use crate::path::Path;
use crate::transform::Transform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use vecforge_core::constants::ZERO_EXTENT;
use vecforge_core::{Point, Rect};

/// Applies `f` to every path in the tree.
fn map_paths<F>(shape: &Shape, f: &F) -> Shape
where
    F: Fn(&Path) -> Path,
{
    match shape {
        Shape::Path(p) => Shape::Path(f(p)),
        Shape::Group(g) => Shape::Group(Group::from_shapes(
            g.shapes().iter().map(|s| map_paths(s, f)),
        )),
    }
}

fn map_points<F>(shape: &Shape, f: F) -> Shape
where
    F: Fn(Point) -> Point,
{
    map_paths(shape, &|p: &Path| {
        p.with_elements(p.elements().iter().map(|el| el.map_points(&f)))
    })
}

pub fn translate(shape: &Shape, offset: Point) -> Shape {
    shape.transform(&Transform::translation(offset.x, offset.y))
}

/// Scales by percentages, `100` leaves an axis unchanged.
pub fn scale(shape: &Shape, percent: Point) -> Shape {
    shape.transform(&Transform::scaling(percent.x / 100.0, percent.y / 100.0))
}

pub fn rotate(shape: &Shape, angle: f64) -> Shape {
    shape.transform(&Transform::rotation(angle))
}

/// Skews by `skew.x` / `skew.y` degrees around `origin`.
pub fn skew(shape: &Shape, skew: Point, origin: Point) -> Shape {
    let t = Transform::IDENTITY
        .translate(origin.x, origin.y)
        .skew(skew.x, skew.y)
        .translate(-origin.x, -origin.y);
    shape.transform(&t)
}

/// Scales and moves `shape` so its bounds are centred on `position` with
/// the given size.
///
/// Extents of at most `ZERO_EXTENT` count as zero. Without
/// `keep_proportions` a zero axis is left unscaled. With it, a zero axis
/// does not limit the uniform factor, and when both are zero the factor is
/// 1.
pub fn fit(shape: &Shape, position: Point, width: f64, height: f64, keep_proportions: bool) -> Shape {
    let bounds = shape.bounds();
    let flatten = |v: f64| if v.abs() <= ZERO_EXTENT { 0.0 } else { v };
    let (px, py) = (bounds.x, bounds.y);
    let (pw, ph) = (flatten(bounds.width), flatten(bounds.height));

    let (sx, sy) = if keep_proportions {
        let w = if pw != 0.0 { width / pw } else { f64::INFINITY };
        let h = if ph != 0.0 { height / ph } else { f64::INFINITY };
        let s = w.min(h);
        let s = if s.is_infinite() { 1.0 } else { s };
        (s, s)
    } else {
        (
            if pw != 0.0 { width / pw } else { 1.0 },
            if ph != 0.0 { height / ph } else { 1.0 },
        )
    };

    let t = Transform::IDENTITY
        .translate(position.x, position.y)
        .scale(sx, sy)
        .translate(-pw / 2.0 - px, -ph / 2.0 - py);
    shape.transform(&t)
}

/// Fits `shape` into the bounds of `bounding`.
pub fn fit_to(shape: &Shape, bounding: &Shape, keep_proportions: bool) -> Shape {
    let b = bounding.bounds();
    fit(shape, b.centroid(), b.width, b.height, keep_proportions)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    None,
    Top,
    Middle,
    Bottom,
}

/// Moves `shape` so the chosen edge or centre of its bounds sits on
/// `position`. `None` leaves that axis alone.
pub fn align(shape: &Shape, position: Point, h_align: HAlign, v_align: VAlign) -> Shape {
    let b = shape.bounds();
    let dx = match h_align {
        HAlign::Left => position.x - b.x,
        HAlign::Right => position.x - b.x - b.width,
        HAlign::Center => position.x - b.x - b.width / 2.0,
        HAlign::None => 0.0,
    };
    let dy = match v_align {
        VAlign::Top => position.y - b.y,
        VAlign::Bottom => position.y - b.y - b.height,
        VAlign::Middle => position.y - b.y - b.height / 2.0,
        VAlign::None => 0.0,
    };
    translate(shape, Point::new(dx, dy))
}

/// Mirrors `shape` across the line through `position` at `angle` degrees.
///
/// With `keep_original` the result is a group of the original and the
/// mirror image.
pub fn reflect(shape: &Shape, position: Point, angle: f64, keep_original: bool) -> Shape {
    let mirror = |point: Point| {
        let d = point.distance(position);
        let a = point.angle(position);
        let foot = position.coordinates(d * (a - angle).to_radians().cos(), 180.0 + angle);
        let d = point.distance(foot);
        let a = point.angle(foot);
        point.coordinates(d * 2.0, a)
    };
    let reflected = map_points(shape, mirror);
    if keep_original {
        Shape::Group(Group::from_shapes([shape.clone(), reflected]))
    } else {
        reflected
    }
}

/// Pulls every point towards a grid of `distance` spacing offset by
/// `position`. `strength` is a percentage; 100 snaps fully.
pub fn snap(shape: &Shape, distance: f64, strength: f64, position: Point) -> Shape {
    let strength = strength / 100.0;
    let snap_value = |v: f64, offset: f64| {
        let v = v + offset;
        let snapped = if distance != 0.0 {
            (v / distance).round() * distance
        } else {
            v
        };
        v * (1.0 - strength) + strength * snapped - offset
    };
    map_points(shape, |p| {
        Point::new(snap_value(p.x, position.x), snap_value(p.y, position.y))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A ribbon joining the facing sides of two shapes' bounds.
pub fn link(a: &Shape, b: &Shape, orientation: Orientation) -> Path {
    let (a, b): (Rect, Rect) = (a.bounds(), b.bounds());
    let elements = match orientation {
        Orientation::Horizontal => {
            let hw = (b.x - a.max_x()) / 2.0;
            [
                PathElement::move_to(a.max_x(), a.y),
                PathElement::curve_to(a.max_x() + hw, a.y, b.x - hw, b.y, b.x, b.y),
                PathElement::line_to(b.x, b.max_y()),
                PathElement::curve_to(
                    b.x - hw,
                    b.max_y(),
                    a.max_x() + hw,
                    a.max_y(),
                    a.max_x(),
                    a.max_y(),
                ),
            ]
        }
        Orientation::Vertical => {
            let hh = (b.y - a.max_y()) / 2.0;
            [
                PathElement::move_to(a.x, a.max_y()),
                PathElement::curve_to(a.x, a.max_y() + hh, b.x, b.y - hh, b.x, b.y),
                PathElement::line_to(b.max_x(), b.y),
                PathElement::curve_to(
                    b.max_x(),
                    b.y - hh,
                    a.max_x(),
                    a.max_y() + hh,
                    a.max_x(),
                    a.max_y(),
                ),
            ]
        }
    };
    Path::from_elements(elements)
}

/// One step of the per-copy transform built by [`copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyStep {
    Translate,
    Rotate,
    Scale,
}

impl CopyStep {
    /// Reads an order string such as `"tsr"`. Unknown letters are ignored.
    pub fn parse_order(order: &str) -> Vec<CopyStep> {
        order
            .chars()
            .filter_map(|c| match c.to_ascii_lowercase() {
                't' => Some(CopyStep::Translate),
                'r' => Some(CopyStep::Rotate),
                's' => Some(CopyStep::Scale),
                _ => None,
            })
            .collect()
    }
}

/// `copies` transformed copies of `shape`.
///
/// Copy `i` is translated by `i * offset` and rotated by `i * angle`.
/// `scale` is a percentage: each copy grows by `scale - 100` percent over
/// the previous one. The steps are composed in `order`; each one
/// premultiplies, so the last step runs first.
pub fn copy(
    shape: &Shape,
    copies: usize,
    order: &[CopyStep],
    offset: Point,
    angle: f64,
    scale: Point,
) -> Group {
    let step = Point::new(scale.x / 100.0 - 1.0, scale.y / 100.0 - 1.0);
    Group::from_shapes((0..copies).map(|i| {
        let i = i as f64;
        let t = order.iter().fold(Transform::IDENTITY, |t, op| match op {
            CopyStep::Translate => t.translate(offset.x * i, offset.y * i),
            CopyStep::Rotate => t.rotate(angle * i),
            CopyStep::Scale => t.scale(1.0 + step.x * i, 1.0 + step.y * i),
        });
        shape.transform(&t)
    }))
}

/// What [`wiggle`] moves as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WiggleScope {
    /// Every anchor on its own. Curve handles stay put.
    #[default]
    Points,
    Contours,
    Paths,
}

/// Shifts parts of `shape` by random amounts of up to `offset` either way.
///
/// The same `seed` always gives the same result.
pub fn wiggle(shape: &Shape, scope: WiggleScope, offset: Point, seed: u64) -> Shape {
    let mut rng = StdRng::seed_from_u64(seed);
    wiggle_shape(shape, scope, offset, &mut rng)
}

fn random_offset(rng: &mut StdRng, offset: Point) -> Point {
    let dx = (rng.gen::<f64>() - 0.5) * offset.x * 2.0;
    let dy = (rng.gen::<f64>() - 0.5) * offset.y * 2.0;
    Point::new(dx, dy)
}

fn wiggle_shape(shape: &Shape, scope: WiggleScope, offset: Point, rng: &mut StdRng) -> Shape {
    match shape {
        Shape::Group(g) => Shape::Group(Group::from_shapes(
            g.shapes()
                .iter()
                .map(|s| wiggle_shape(s, scope, offset, rng))
                .collect::<Vec<_>>(),
        )),
        Shape::Path(p) => Shape::Path(match scope {
            WiggleScope::Points => {
                let elements: Vec<PathElement> = p
                    .elements()
                    .iter()
                    .map(|el| {
                        let d = random_offset(rng, offset);
                        match *el {
                            PathElement::MoveTo { point } => PathElement::MoveTo { point: point + d },
                            PathElement::LineTo { point } => PathElement::LineTo { point: point + d },
                            PathElement::CurveTo {
                                ctrl1,
                                ctrl2,
                                point,
                            } => PathElement::CurveTo {
                                ctrl1,
                                ctrl2,
                                point: point + d,
                            },
                            PathElement::Close => PathElement::Close,
                        }
                    })
                    .collect();
                p.with_elements(elements)
            }
            WiggleScope::Contours => {
                let elements: Vec<PathElement> = p
                    .contours()
                    .iter()
                    .flat_map(|c| {
                        let d = random_offset(rng, offset);
                        c.transform(&Transform::translation(d.x, d.y))
                            .elements()
                            .to_vec()
                    })
                    .collect();
                p.with_elements(elements)
            }
            WiggleScope::Paths => {
                let d = random_offset(rng, offset);
                p.transform(&Transform::translation(d.x, d.y))
            }
        }),
    }
}

/// Direction [`stack`] lays shapes out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackDirection {
    /// Left to right.
    #[default]
    East,
    /// Right to left.
    West,
    /// Bottom to top.
    North,
    /// Top to bottom.
    South,
}

/// Lines `shapes` up edge to edge, `margin` apart, starting where the
/// first one already is. Only the stacking axis moves.
pub fn stack(shapes: &[Shape], direction: StackDirection, margin: f64) -> Vec<Shape> {
    let Some(first) = shapes.first() else {
        return Vec::new();
    };
    if shapes.len() == 1 {
        return shapes.to_vec();
    }
    let first = first.bounds();
    let mut cursor = match direction {
        StackDirection::East => first.x,
        StackDirection::West => first.max_x(),
        StackDirection::North => first.max_y(),
        StackDirection::South => first.y,
    };
    shapes
        .iter()
        .map(|shape| {
            let b = shape.bounds();
            let offset = match direction {
                StackDirection::East => {
                    let dx = cursor - b.x;
                    cursor += b.width + margin;
                    Point::new(dx, 0.0)
                }
                StackDirection::West => {
                    let dx = cursor - b.max_x();
                    cursor -= b.width + margin;
                    Point::new(dx, 0.0)
                }
                StackDirection::North => {
                    let dy = cursor - b.max_y();
                    cursor -= b.height + margin;
                    Point::new(0.0, dy)
                }
                StackDirection::South => {
                    let dy = cursor - b.y;
                    cursor += b.height + margin;
                    Point::new(0.0, dy)
                }
            };
            translate(shape, offset)
        })
        .collect()
}
