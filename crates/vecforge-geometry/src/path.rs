//! Immutable paths.
//!
//! A [`Path`] is a sequence of [`PathElement`]s plus optional paint. Every
//! operation returns a new path; the element buffer is shared between
//! clones.

use crate::bezier;
use crate::element::PathElement;
use crate::transform::Transform;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use vecforge_core::constants::{
    COORDINATE_LIMIT, DEFAULT_CONTAINS_PRECISION, DEFAULT_CURVE_SAMPLES, DEFAULT_PRECISION, KAPPA,
    MAX_RESAMPLE_SEGMENTS,
};
use vecforge_core::{Color, Point, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: Arc<[PathElement]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stroke: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stroke_width: Option<f64>,
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl Path {
    /// An empty, unpainted path.
    pub fn new() -> Self {
        Path {
            elements: Arc::from(Vec::new()),
            fill: None,
            stroke: None,
            stroke_width: None,
        }
    }

    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = PathElement>,
    {
        Path {
            elements: elements.into_iter().collect(),
            ..Path::new()
        }
    }

    /// A path with new elements and this path's paint.
    pub fn with_elements<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = PathElement>,
    {
        Path {
            elements: elements.into_iter().collect(),
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
        }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<Color> {
        self.stroke
    }

    pub fn stroke_width(&self) -> Option<f64> {
        self.stroke_width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// True when the last contour ends with a `Close`.
    pub fn is_closed(&self) -> bool {
        matches!(self.elements.last(), Some(PathElement::Close))
    }

    fn push(&self, el: PathElement) -> Self {
        self.with_elements(self.elements.iter().copied().chain(std::iter::once(el)))
    }

    pub fn move_to(&self, x: f64, y: f64) -> Self {
        self.push(PathElement::move_to(x, y))
    }

    pub fn line_to(&self, x: f64, y: f64) -> Self {
        self.push(PathElement::line_to(x, y))
    }

    pub fn curve_to(&self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.push(PathElement::curve_to(c1x, c1y, c2x, c2y, x, y))
    }

    pub fn close_path(&self) -> Self {
        self.push(PathElement::Close)
    }

    /// Appends the elements of `other`, keeping this path's paint.
    pub fn extend(&self, other: &Path) -> Self {
        self.with_elements(self.elements.iter().chain(other.elements.iter()).copied())
    }

    pub fn with_fill(&self, fill: Option<Color>) -> Self {
        Path {
            fill,
            ..self.clone()
        }
    }

    pub fn with_stroke(&self, stroke: Option<Color>) -> Self {
        Path {
            stroke,
            ..self.clone()
        }
    }

    pub fn with_stroke_width(&self, stroke_width: Option<f64>) -> Self {
        Path {
            stroke_width,
            ..self.clone()
        }
    }

    /// Replaces all three paint attributes at once.
    pub fn colorize(&self, fill: Option<Color>, stroke: Option<Color>, stroke_width: f64) -> Self {
        Path {
            elements: Arc::clone(&self.elements),
            fill,
            stroke,
            stroke_width: Some(stroke_width),
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Path::from_elements([
            PathElement::move_to(x, y),
            PathElement::line_to(x + width, y),
            PathElement::line_to(x + width, y + height),
            PathElement::line_to(x, y + height),
            PathElement::Close,
        ])
    }

    pub fn centered_rect(center: Point, width: f64, height: f64) -> Self {
        Path::rect(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Four-curve ellipse inscribed in the rect `x, y, width, height`.
    pub fn ellipse(x: f64, y: f64, width: f64, height: f64) -> Self {
        let dx = KAPPA * 0.5 * width;
        let dy = KAPPA * 0.5 * height;
        let x0 = x + 0.5 * width;
        let y0 = y + 0.5 * height;
        let x1 = x + width;
        let y1 = y + height;
        Path::from_elements([
            PathElement::move_to(x, y0),
            PathElement::curve_to(x, y0 - dy, x0 - dx, y, x0, y),
            PathElement::curve_to(x0 + dx, y, x1, y0 - dy, x1, y0),
            PathElement::curve_to(x1, y0 + dy, x0 + dx, y1, x0, y1),
            PathElement::curve_to(x0 - dx, y1, x, y0 + dy, x, y0),
            PathElement::Close,
        ])
    }

    pub fn centered_ellipse(center: Point, width: f64, height: f64) -> Self {
        Path::ellipse(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn line(p0: Point, p1: Point) -> Self {
        Path::from_elements([
            PathElement::MoveTo { point: p0 },
            PathElement::LineTo { point: p1 },
        ])
    }

    /// Closed four-sided polygon.
    pub fn quad(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Path::from_elements([
            PathElement::MoveTo { point: p1 },
            PathElement::LineTo { point: p2 },
            PathElement::LineTo { point: p3 },
            PathElement::LineTo { point: p4 },
            PathElement::Close,
        ])
    }

    pub fn polyline(points: &[Point], closed: bool) -> Self {
        let mut elements: Vec<PathElement> = points
            .iter()
            .enumerate()
            .map(|(i, &point)| {
                if i == 0 {
                    PathElement::MoveTo { point }
                } else {
                    PathElement::LineTo { point }
                }
            })
            .collect();
        if closed && !elements.is_empty() {
            elements.push(PathElement::Close);
        }
        Path::from_elements(elements)
    }

    /// Bounding box including curve bulges. `Rect::ZERO` when empty.
    pub fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        let mut current = Point::ZERO;
        let mut anchor = Point::ZERO;
        for el in self.elements.iter() {
            let extent = match *el {
                PathElement::MoveTo { point } => {
                    anchor = point;
                    Rect::new(point.x, point.y, 0.0, 0.0)
                }
                PathElement::LineTo { point } => Rect::new(point.x, point.y, 0.0, 0.0),
                PathElement::CurveTo {
                    ctrl1,
                    ctrl2,
                    point,
                } => bezier::extrema(current, ctrl1, ctrl2, point),
                PathElement::Close => {
                    current = anchor;
                    continue;
                }
            };
            if let Some(point) = el.point() {
                current = point;
            }
            bounds = Some(match bounds {
                Some(b) => b.union(&extent),
                None => extent,
            });
        }
        bounds.unwrap_or(Rect::ZERO)
    }

    pub fn length(&self) -> f64 {
        self.length_with(DEFAULT_PRECISION)
    }

    /// Length using `precision` chords per curve.
    pub fn length_with(&self, precision: usize) -> f64 {
        bezier::length(&self.elements, precision)
    }

    pub fn segment_lengths(&self, relative: bool, precision: usize) -> Vec<f64> {
        bezier::segment_lengths(&self.elements, relative, precision)
    }

    /// The element at relative position `t`; see [`bezier::point`].
    pub fn point(&self, t: f64) -> Option<PathElement> {
        let segments = self.segment_lengths(true, DEFAULT_PRECISION);
        self.point_with(t, &segments)
    }

    /// Like [`Path::point`] with precomputed relative segment lengths.
    pub fn point_with(&self, t: f64, segments: &[f64]) -> Option<PathElement> {
        bezier::point(&self.elements, t, segments)
    }

    /// `amount` evenly spaced elements from start to end, both included.
    pub fn points(&self, amount: usize) -> Vec<PathElement> {
        self.points_between(amount, 0.0, 1.0)
    }

    pub fn points_between(&self, amount: usize, start: f64, end: f64) -> Vec<PathElement> {
        if self.is_empty() || amount == 0 {
            return Vec::new();
        }
        let delta = if amount > 1 {
            (end - start) / (amount - 1) as f64
        } else {
            end - start
        };
        let segments = self.segment_lengths(true, DEFAULT_PRECISION);
        (0..amount)
            .filter_map(|i| self.point_with(start + delta * i as f64, &segments))
            .collect()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_with(x, y, DEFAULT_CONTAINS_PRECISION)
    }

    /// Even-odd test against a polygon of `precision` samples, so points
    /// close to a curved edge are approximate.
    pub fn contains_with(&self, x: f64, y: f64, precision: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let polygon: Vec<Point> = self
            .points(precision)
            .iter()
            .filter_map(PathElement::point)
            .collect();
        point_in_polygon(&polygon, Point::new(x, y))
    }

    /// Splits at every `MoveTo`. Each contour keeps this path's paint.
    pub fn contours(&self) -> Vec<Path> {
        split_contours(&self.elements)
            .into_iter()
            .map(|c| self.with_elements(c.iter().copied()))
            .collect()
    }

    /// Rebuilds the path from `amount` evenly spaced points.
    ///
    /// With `per_contour` each contour gets `amount` anchors; otherwise the
    /// whole path becomes one contour. Closed contours stay closed. An
    /// `amount` of zero gives an empty path.
    pub fn resample_by_amount(&self, amount: usize, per_contour: bool) -> Self {
        self.resample_by_amount_with(amount, per_contour, DEFAULT_CURVE_SAMPLES)
    }

    /// Like [`Path::resample_by_amount`], measuring curves with `samples` chords.
    pub fn resample_by_amount_with(&self, amount: usize, per_contour: bool, samples: usize) -> Self {
        if amount == 0 {
            return self.with_elements(std::iter::empty());
        }
        let elements = if per_contour {
            split_contours(&self.elements)
                .into_iter()
                .flat_map(|c| sample_contour(c, amount, is_closed_contour(c), samples))
                .collect::<Vec<_>>()
        } else {
            sample_contour(&self.elements, amount, self.is_closed(), samples)
        };
        self.with_elements(elements)
    }

    /// Rebuilds each contour with segments close to `segment_length` long.
    pub fn resample_by_length(&self, segment_length: f64) -> Self {
        self.resample_by_length_with(segment_length, DEFAULT_CURVE_SAMPLES)
    }

    /// Like [`Path::resample_by_length`], measuring curves with `samples` chords.
    ///
    /// Lengths that would need more than [`MAX_RESAMPLE_SEGMENTS`] segments
    /// for any contour leave the path unchanged.
    pub fn resample_by_length_with(&self, segment_length: f64, samples: usize) -> Self {
        if segment_length.is_nan() || segment_length <= 0.0 {
            warn!("Ignoring resample with segment length {}", segment_length);
            return self.clone();
        }
        let contours: Vec<(&[PathElement], f64)> = split_contours(&self.elements)
            .into_iter()
            .map(|c| (c, bezier::length(c, samples) / segment_length))
            .collect();
        if contours
            .iter()
            .any(|&(_, ratio)| !ratio.is_finite() || ratio > MAX_RESAMPLE_SEGMENTS as f64)
        {
            warn!(
                "Ignoring resample with segment length {}, too many segments",
                segment_length
            );
            return self.clone();
        }
        let elements: Vec<PathElement> = contours
            .into_iter()
            .flat_map(|(c, ratio)| {
                let segments = (ratio.round() as usize).max(1);
                let closed = is_closed_contour(c);
                let amount = if closed {
                    segments
                } else {
                    segments.saturating_add(1)
                };
                sample_contour(c, amount, closed, samples)
            })
            .collect();
        self.with_elements(elements)
    }

    /// Compact SVG path data, coordinates clamped to the default limit.
    pub fn to_path_data(&self) -> String {
        self.to_path_data_clamped(COORDINATE_LIMIT)
    }

    /// Compact SVG path data with coordinates clamped to `[-limit, limit]`.
    /// Elements with non-finite coordinates are skipped.
    pub fn to_path_data_clamped(&self, limit: f64) -> String {
        let fmt = |v: f64| {
            let v = v.clamp(-limit, limit);
            if v == 0.0 {
                0.0
            } else {
                v
            }
        };
        let mut data = String::new();
        for el in self.elements.iter() {
            if !el.is_finite() {
                warn!("Skipping non-finite path element {:?}", el);
                continue;
            }
            let command = match *el {
                PathElement::MoveTo { point } => format!("M{} {}", fmt(point.x), fmt(point.y)),
                PathElement::LineTo { point } => format!("L{} {}", fmt(point.x), fmt(point.y)),
                PathElement::CurveTo {
                    ctrl1,
                    ctrl2,
                    point,
                } => format!(
                    "C{} {} {} {} {} {}",
                    fmt(ctrl1.x),
                    fmt(ctrl1.y),
                    fmt(ctrl2.x),
                    fmt(ctrl2.y),
                    fmt(point.x),
                    fmt(point.y)
                ),
                PathElement::Close => "Z".to_string(),
            };
            data.push_str(&command);
        }
        data
    }

    /// Mean of the anchor points. `Point::ZERO` when empty.
    pub fn centroid(&self) -> Point {
        let anchors: Vec<Point> = self.elements.iter().filter_map(PathElement::point).collect();
        if anchors.is_empty() {
            return Point::ZERO;
        }
        let sum = anchors.iter().fold(Point::ZERO, |acc, &p| acc + p);
        sum * (1.0 / anchors.len() as f64)
    }

    /// Inserts an anchor at relative position `t` without changing the shape.
    ///
    /// Lines and closes gain a `LineTo`; curves are split in two.
    pub fn insert_point(&self, t: f64) -> Self {
        if self.elements.len() < 2 {
            return self.clone();
        }
        let segments = self.segment_lengths(true, DEFAULT_PRECISION);
        let loc = bezier::locate(&self.elements, t.clamp(0.0, 1.0), &segments);
        let at = loc.index + 1;
        let replacement: Vec<PathElement> = match self.elements[at] {
            PathElement::LineTo { point } => vec![
                PathElement::LineTo {
                    point: loc.start.lerp(point, loc.t),
                },
                PathElement::LineTo { point },
            ],
            PathElement::Close => vec![
                PathElement::LineTo {
                    point: loc.start.lerp(loc.anchor, loc.t),
                },
                PathElement::Close,
            ],
            PathElement::CurveTo {
                ctrl1,
                ctrl2,
                point,
            } => {
                let (left, right) = bezier::split_curve(loc.t, loc.start, ctrl1, ctrl2, point);
                vec![
                    PathElement::CurveTo {
                        ctrl1: left[1],
                        ctrl2: left[2],
                        point: left[3],
                    },
                    PathElement::CurveTo {
                        ctrl1: right[1],
                        ctrl2: right[2],
                        point: right[3],
                    },
                ]
            }
            PathElement::MoveTo { .. } => return self.clone(),
        };

        let elements = self.elements[..at]
            .iter()
            .copied()
            .chain(replacement)
            .chain(self.elements[at + 1..].iter().copied());
        self.with_elements(elements)
    }

    pub fn transform(&self, transform: &Transform) -> Self {
        transform.transform_path(self)
    }
}

/// Even-odd ray casting.
pub fn point_in_polygon(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn split_contours(elements: &[PathElement]) -> Vec<&[PathElement]> {
    let mut contours = Vec::new();
    let mut start = 0;
    for (i, el) in elements.iter().enumerate() {
        if el.is_move_to() && i > start {
            contours.push(&elements[start..i]);
            start = i;
        }
    }
    if start < elements.len() {
        contours.push(&elements[start..]);
    }
    contours
}

fn is_closed_contour(elements: &[PathElement]) -> bool {
    matches!(elements.last(), Some(PathElement::Close))
}

/// `amount` anchors along `elements`. Open contours include both ends;
/// closed ones stop one step short and close instead.
fn sample_contour(
    elements: &[PathElement],
    amount: usize,
    closed: bool,
    samples: usize,
) -> Vec<PathElement> {
    if elements.is_empty() || amount == 0 {
        return Vec::new();
    }
    let segments = bezier::segment_lengths(elements, true, samples);
    let delta = if closed {
        1.0 / amount as f64
    } else if amount > 1 {
        1.0 / (amount - 1) as f64
    } else {
        0.0
    };

    let mut sampled: Vec<PathElement> = (0..amount)
        .filter_map(|i| bezier::point(elements, delta * i as f64, &segments))
        .filter_map(|el| el.point())
        .enumerate()
        .map(|(i, point)| {
            if i == 0 {
                PathElement::MoveTo { point }
            } else {
                PathElement::LineTo { point }
            }
        })
        .collect();
    if closed && !sampled.is_empty() {
        sampled.push(PathElement::Close);
    }
    sampled
}
