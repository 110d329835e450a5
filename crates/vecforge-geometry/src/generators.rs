//! Shape generators.
//!
//! Pure constructors for the design tool's primitive shapes.
//! Open line-like generators come back stroked in black with width 1 and no
//! fill, so they are visible as-is.

use crate::bezier;
use crate::element::PathElement;
use crate::group::Shape;
use crate::path::Path;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use vecforge_core::constants::DEFAULT_STROKE_WIDTH;
use vecforge_core::{Color, GeometryError, Point};

/// Random tries per point before [`scatter`] gives up on it.
const SCATTER_TRIES: usize = 100;

fn stroked(path: Path) -> Path {
    path.colorize(None, Some(Color::BLACK), DEFAULT_STROKE_WIDTH)
}

/// A straight line, stroked.
pub fn line(p1: Point, p2: Point) -> Path {
    stroked(Path::line(p1, p2))
}

/// A line from `point` running `distance` units in the direction of `angle` degrees.
pub fn line_angle(point: Point, angle: f64, distance: f64) -> Path {
    line(point, point.coordinates(distance, angle))
}

/// A single curve from `p1` to `p2`, bulging `distance` units sideways at
/// `t` percent along the chord.
pub fn quad_curve(p1: Point, p2: Point, t: f64, distance: f64) -> Path {
    let t = t / 100.0;
    let c = p1.lerp(p2, t);
    let q = c.coordinates(distance, p1.angle(p2) + 90.0);
    let ctrl1 = p1 + (q - p1) * (2.0 / 3.0);
    let ctrl2 = p2 + (q - p2) * (2.0 / 3.0);
    stroked(Path::from_elements([
        PathElement::MoveTo { point: p1 },
        PathElement::CurveTo {
            ctrl1,
            ctrl2,
            point: p2,
        },
    ]))
}

/// Regular polygon with at least three sides.
///
/// With `align` the polygon is rotated so its bottom edge is horizontal.
pub fn polygon(center: Point, radius: f64, sides: usize, align: bool) -> Path {
    let sides = sides.max(3);
    let a = 360.0 / sides as f64;
    let da = if align {
        let c0 = center.coordinates(radius, 0.0);
        let c1 = center.coordinates(radius, a);
        -c1.angle(c0)
    } else {
        0.0
    };
    let points: Vec<Point> = (0..sides)
        .map(|i| center.coordinates(radius, a * i as f64 + da))
        .collect();
    Path::polyline(&points, true)
}

/// Star with `points` tips. `outer` and `inner` are diameters.
pub fn star(center: Point, points: usize, outer: f64, inner: f64) -> Path {
    if points == 0 {
        return Path::new();
    }
    let vertices: Vec<Point> = (0..points * 2)
        .map(|i| {
            let angle = i as f64 * PI / points as f64;
            let radius = if i % 2 == 1 { inner / 2.0 } else { outer / 2.0 };
            Point::new(
                center.x + radius * angle.sin(),
                center.y + radius * angle.cos(),
            )
        })
        .collect();
    Path::polyline(&vertices, true)
}

/// `rows` x `columns` points spanning `width` x `height` around `center`.
pub fn grid(rows: usize, columns: usize, width: f64, height: f64, center: Point) -> Vec<Point> {
    let (column_size, left) = if columns > 1 {
        (width / (columns - 1) as f64, center.x - width / 2.0)
    } else {
        (0.0, center.x)
    };
    let (row_size, top) = if rows > 1 {
        (height / (rows - 1) as f64, center.y - height / 2.0)
    } else {
        (0.0, center.y)
    };

    (0..rows)
        .flat_map(|ri| {
            (0..columns).map(move |ci| {
                Point::new(left + ci as f64 * column_size, top + ri as f64 * row_size)
            })
        })
        .collect()
}

/// Joins `points` with straight lines, stroked.
pub fn connect(points: &[Point], closed: bool) -> Path {
    stroked(Path::polyline(points, closed))
}

/// An open, stroked path from a list of contours such as
/// `"M0,0 100,0 100,100 M10,20 30,40"`.
///
/// Each contour starts with `M` and holds `x,y` or `x y` pairs.
pub fn freehand(data: &str) -> Result<Path, GeometryError> {
    let mut elements = Vec::new();
    let mut position = 0;
    for contour in data.split('M') {
        let mut pending: Option<f64> = None;
        let mut first = true;
        for token in contour
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token
                .parse()
                .map_err(|_| GeometryError::malformed(position, token, "expected a number"))?;
            position += 1;
            match pending.take() {
                None => pending = Some(value),
                Some(x) => {
                    let point = Point::new(x, value);
                    elements.push(if first {
                        PathElement::MoveTo { point }
                    } else {
                        PathElement::LineTo { point }
                    });
                    first = false;
                }
            }
        }
        if pending.is_some() {
            return Err(GeometryError::malformed(position, "", "point is missing its y coordinate"));
        }
    }
    Ok(stroked(Path::from_elements(elements)))
}

/// Up to `amount` random points inside `shape`.
///
/// Candidates are drawn from the bounds and kept when the shape contains
/// them. A point that misses [`SCATTER_TRIES`] times is left out, so thin
/// or empty shapes give fewer points. The same `seed` always gives the same
/// points.
pub fn scatter(shape: &Shape, amount: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = shape.bounds();
    let points: Vec<Point> = (0..amount)
        .filter_map(|_| {
            (0..SCATTER_TRIES).find_map(|_| {
                let x = b.x + rng.gen::<f64>() * b.width;
                let y = b.y + rng.gen::<f64>() * b.height;
                shape.contains(x, y).then(|| Point::new(x, y))
            })
        })
        .collect();
    if points.len() < amount {
        debug!("Scattered {} of {} points", points.len(), amount);
    }
    points
}

/// How the ends of an [`arc`] are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcKind {
    /// Just the curve.
    #[default]
    Open,
    /// Closed with a straight line between the ends.
    Chord,
    /// Closed through the center.
    Pie,
}

impl fmt::Display for ArcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcKind::Open => write!(f, "open"),
            ArcKind::Chord => write!(f, "chord"),
            ArcKind::Pie => write!(f, "pie"),
        }
    }
}

impl FromStr for ArcKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ArcKind::Open),
            "chord" => Ok(ArcKind::Chord),
            "pie" => Ok(ArcKind::Pie),
            _ => Err(format!("Unknown arc type: {}", s)),
        }
    }
}

/// Elliptical arc of `sweep` degrees starting at `start_angle`, on the
/// ellipse of size `width` x `height` around `center`.
///
/// Angles grow from the x axis towards the y axis. Each quarter turn or
/// less becomes one cubic.
pub fn arc(
    center: Point,
    width: f64,
    height: f64,
    start_angle: f64,
    sweep: f64,
    kind: ArcKind,
) -> Path {
    let (rx, ry) = (width / 2.0, height / 2.0);
    let on_ellipse = |theta: f64| Point::new(center.x + rx * theta.cos(), center.y + ry * theta.sin());

    let start = start_angle.to_radians();
    let delta = sweep.to_radians();
    let segment_count = bezier::arc_segment_count(delta);
    let delta_seg = delta / segment_count as f64;

    let mut elements = Vec::with_capacity(segment_count + 3);
    if kind == ArcKind::Pie {
        elements.push(PathElement::MoveTo { point: center });
        elements.push(PathElement::LineTo {
            point: on_ellipse(start),
        });
    } else {
        elements.push(PathElement::MoveTo {
            point: on_ellipse(start),
        });
    }

    let k = 4.0 / 3.0 * (delta_seg / 4.0).tan();
    let mut theta = start;
    for _ in 0..segment_count {
        let next = theta + delta_seg;
        let (s0, c0) = theta.sin_cos();
        let (s1, c1) = next.sin_cos();
        elements.push(PathElement::CurveTo {
            ctrl1: Point::new(center.x + rx * (c0 - k * s0), center.y + ry * (s0 + k * c0)),
            ctrl2: Point::new(center.x + rx * (c1 + k * s1), center.y + ry * (s1 - k * c1)),
            point: on_ellipse(next),
        });
        theta = next;
    }

    if kind != ArcKind::Open {
        elements.push(PathElement::Close);
    }
    Path::from_elements(elements)
}
