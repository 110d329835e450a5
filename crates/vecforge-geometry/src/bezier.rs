//! Bezier and arc-length mathematics.
//!
//! Everything here works on plain element slices so it can be shared by
//! [`Path`](crate::Path) and by callers that keep their own element buffers.
//! Segment `i` of a slice is the stretch ending at element `i + 1`; element 0
//! only anchors the walk.

use crate::element::PathElement;
use std::f64::consts::FRAC_PI_2;
use vecforge_core::constants::FUZZY_EPSILON;
use vecforge_core::{Point, Rect};

/// The point at `t` along the line `p0 -> p1`, as a `LineTo`.
pub fn line_point(t: f64, p0: Point, p1: Point) -> PathElement {
    PathElement::LineTo {
        point: p0.lerp(p1, t),
    }
}

pub fn line_length(p0: Point, p1: Point) -> f64 {
    p0.distance(p1)
}

/// Evaluates a cubic at `t` with de Casteljau's construction.
///
/// The returned `CurveTo` holds the position in `point`. Its `ctrl1` is the
/// handle arriving at that position and `ctrl2` the handle leaving it, the
/// pair you get when the curve is split at `t`.
pub fn curve_point(t: f64, p0: Point, c1: Point, c2: Point, p3: Point) -> PathElement {
    let (left, right) = split_curve(t, p0, c1, c2, p3);
    PathElement::CurveTo {
        ctrl1: left[2],
        ctrl2: right[1],
        point: left[3],
    }
}

/// Splits a cubic at `t` into two cubics that trace the same curve.
pub fn split_curve(t: f64, p0: Point, c1: Point, c2: Point, p3: Point) -> ([Point; 4], [Point; 4]) {
    let p01 = p0.lerp(c1, t);
    let p12 = c1.lerp(c2, t);
    let p23 = c2.lerp(p3, t);
    let h1 = p01.lerp(p12, t);
    let h2 = p12.lerp(p23, t);
    let mid = h1.lerp(h2, t);
    ([p0, p01, h1, mid], [mid, h2, p23, p3])
}

/// Control points of the cubic equal to the quadratic `p0, q, p2`.
pub fn quad_to_cubic(p0: Point, q: Point, p2: Point) -> (Point, Point) {
    let cp1 = p0 + (q - p0) * (2.0 / 3.0);
    let cp2 = cp1 + (p2 - p0) * (1.0 / 3.0);
    (cp1, cp2)
}

/// Approximates the arc length of a cubic by summing `n` chords.
pub fn curve_length(p0: Point, c1: Point, c2: Point, p3: Point, n: usize) -> f64 {
    let n = n.max(1);
    let mut length = 0.0;
    let mut prev = p0;
    for i in 1..=n {
        let t = i as f64 / n as f64;
        let next = cubic_at(t, p0, c1, c2, p3);
        length += prev.distance(next);
        prev = next;
    }
    length
}

/// Length of every segment of `elements`.
///
/// Returns one entry per element after the first. With `relative` the
/// entries are divided by their sum so they add up to 1; a path with no
/// length gets all zeros.
pub fn segment_lengths(elements: &[PathElement], relative: bool, n: usize) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(elements.len().saturating_sub(1));
    let mut walker = Walker::default();

    for (i, el) in elements.iter().enumerate() {
        if i > 0 {
            let length = match *el {
                PathElement::MoveTo { .. } => 0.0,
                PathElement::LineTo { point } => line_length(walker.current, point),
                PathElement::CurveTo {
                    ctrl1,
                    ctrl2,
                    point,
                } => curve_length(walker.current, ctrl1, ctrl2, point, n),
                PathElement::Close => line_length(walker.current, walker.anchor),
            };
            lengths.push(length);
        }
        walker.step(i, el);
    }

    if relative {
        let total: f64 = lengths.iter().sum();
        if total > 0.0 {
            lengths.iter_mut().for_each(|l| *l /= total);
        } else {
            lengths.iter_mut().for_each(|l| *l = 0.0);
        }
    }
    lengths
}

/// Total length of `elements`.
pub fn length(elements: &[PathElement], n: usize) -> f64 {
    segment_lengths(elements, false, n).iter().sum()
}

/// Where a relative position falls on a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    /// Segment index; the segment ends at element `index + 1`.
    pub index: usize,
    /// Position within the segment, in `[0, 1]` unless the segment is zero-length.
    pub t: f64,
    /// Start of the contour the segment belongs to, the target of a `Close`.
    pub anchor: Point,
    /// Current point at the start of the segment.
    pub start: Point,
}

/// Finds the segment holding relative position `t`.
///
/// `segments` must be the relative lengths of `elements`. When the walk
/// runs off a zero-length final segment it backs off to the end of the
/// segment before it.
pub fn locate(elements: &[PathElement], t: f64, segments: &[f64]) -> Located {
    let mut walker = Walker::default();
    let mut previous = walker;
    let mut t = t;
    let mut index = 0;

    if segments.is_empty() {
        if let Some(first) = elements.first() {
            walker.step(0, first);
        }
        return Located {
            index: 0,
            t,
            anchor: walker.anchor,
            start: walker.current,
        };
    }

    let last = segments.len() - 1;
    for (i, el) in elements.iter().enumerate().take(segments.len()) {
        previous = walker;
        walker.step(i, el);
        index = i;
        if t <= segments[i] || i == last {
            break;
        }
        t -= segments[i];
    }

    if segments[index] != 0.0 {
        t /= segments[index];
    }
    if index == last && segments[index] == 0.0 && index > 0 {
        tracing::trace!("final segment is zero-length, backing off to segment {}", index - 1);
        index -= 1;
        walker = previous;
        t = 1.0;
    }

    Located {
        index,
        t,
        anchor: walker.anchor,
        start: walker.current,
    }
}

/// Evaluates `elements` at relative position `t`, clamped to `[0, 1]`.
///
/// Returns a `LineTo` on straight segments and closes, and a `CurveTo`
/// shaped like [`curve_point`] on curves. A position that lands on a
/// zero-length `MoveTo` segment returns that `MoveTo`. `None` for an empty
/// slice.
pub fn point(elements: &[PathElement], t: f64, segments: &[f64]) -> Option<PathElement> {
    let first = elements.first()?;
    if elements.len() == 1 {
        return first.point().map(|point| PathElement::MoveTo { point });
    }

    let loc = locate(elements, t.clamp(0.0, 1.0), segments);
    let el = elements.get(loc.index + 1)?;
    Some(match *el {
        PathElement::MoveTo { point } => PathElement::MoveTo { point },
        PathElement::LineTo { point } => line_point(loc.t, loc.start, point),
        PathElement::Close => line_point(loc.t, loc.start, loc.anchor),
        PathElement::CurveTo {
            ctrl1,
            ctrl2,
            point,
        } => curve_point(loc.t, loc.start, ctrl1, ctrl2, point),
    })
}

/// Tight bounding box of a cubic.
///
/// Solves the derivative per axis and evaluates the roots that fall inside
/// `[0, 1]` together with both endpoints.
pub fn extrema(p0: Point, c1: Point, c2: Point, p3: Point) -> Rect {
    let (min_x, max_x) = axis_extrema(p0.x, c1.x, c2.x, p3.x);
    let (min_y, max_y) = axis_extrema(p0.y, c1.y, c2.y, p3.y);
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

fn axis_extrema(v0: f64, v1: f64, v2: f64, v3: f64) -> (f64, f64) {
    let a = 3.0 * (-v0 + 3.0 * v1 - 3.0 * v2 + v3);
    let b = 6.0 * (v0 - 2.0 * v1 + v2);
    let c = 3.0 * (v1 - v0);

    let mut min = v0.min(v3);
    let mut max = v0.max(v3);
    let mut consider = |t: f64| {
        if (0.0..=1.0).contains(&t) {
            let v = cubic_coord(t, v0, v1, v2, v3);
            min = min.min(v);
            max = max.max(v);
        }
    };

    if fuzzy_compare(a + 1.0, 1.0) {
        if !fuzzy_compare(b + 1.0, 1.0) {
            consider(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let root = disc.sqrt();
            consider((-b + root) / (2.0 * a));
            consider((-b - root) / (2.0 * a));
        }
    }
    (min, max)
}

/// Cubics needed for an arc of `sweep` radians, one per quarter turn.
///
/// A small tolerance keeps exact quarter multiples from gaining an extra
/// sliver segment through rounding.
pub(crate) fn arc_segment_count(sweep: f64) -> usize {
    ((sweep.abs() / (FRAC_PI_2 + 0.001)).ceil() as usize).max(1)
}

/// Relative comparison scaled by the smaller magnitude.
fn fuzzy_compare(a: f64, b: f64) -> bool {
    (a - b).abs() <= FUZZY_EPSILON * a.abs().min(b.abs())
}

fn cubic_coord(t: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * v0 + 3.0 * mt * mt * t * v1 + 3.0 * mt * t * t * v2 + t * t * t * v3
}

fn cubic_at(t: f64, p0: Point, c1: Point, c2: Point, p3: Point) -> Point {
    Point::new(
        cubic_coord(t, p0.x, c1.x, c2.x, p3.x),
        cubic_coord(t, p0.y, c1.y, c2.y, p3.y),
    )
}

/// Tracks the current point and contour anchor while walking elements.
#[derive(Debug, Clone, Copy, Default)]
struct Walker {
    current: Point,
    anchor: Point,
}

impl Walker {
    fn step(&mut self, index: usize, el: &PathElement) {
        match *el {
            PathElement::MoveTo { point } => {
                self.current = point;
                self.anchor = point;
            }
            PathElement::LineTo { point } | PathElement::CurveTo { point, .. } => {
                self.current = point;
                if index == 0 {
                    self.anchor = point;
                }
            }
            PathElement::Close => self.current = self.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<PathElement> {
        vec![
            PathElement::move_to(0.0, 0.0),
            PathElement::line_to(10.0, 0.0),
            PathElement::line_to(10.0, 10.0),
            PathElement::line_to(0.0, 10.0),
            PathElement::Close,
        ]
    }

    #[test]
    fn test_line_point() {
        let p = line_point(0.25, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(p.point(), Some(Point::new(25.0, 0.0)));
    }

    #[test]
    fn test_curve_point_midpoint() {
        let p0 = Point::new(0.0, 0.0);
        let c1 = Point::new(0.0, 10.0);
        let c2 = Point::new(10.0, 10.0);
        let p3 = Point::new(10.0, 0.0);
        match curve_point(0.5, p0, c1, c2, p3) {
            PathElement::CurveTo {
                ctrl1,
                ctrl2,
                point,
            } => {
                assert!(point.approx_eq(Point::new(5.0, 7.5), 1e-12));
                assert!(ctrl1.approx_eq(Point::new(2.5, 7.5), 1e-12));
                assert!(ctrl2.approx_eq(Point::new(7.5, 7.5), 1e-12));
            }
            other => panic!("expected a curve, got {:?}", other),
        }
    }

    #[test]
    fn test_straight_curve_length() {
        let len = curve_length(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, 0.0),
            20,
        );
        assert!((len - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_lengths_include_close() {
        let lengths = segment_lengths(&square(), false, 20);
        assert_eq!(lengths, vec![10.0, 10.0, 10.0, 10.0]);

        let relative = segment_lengths(&square(), true, 20);
        assert_eq!(relative, vec![0.25, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_segment_lengths_move_is_zero() {
        let elements = vec![
            PathElement::move_to(0.0, 0.0),
            PathElement::line_to(10.0, 0.0),
            PathElement::move_to(50.0, 50.0),
            PathElement::line_to(50.0, 60.0),
        ];
        assert_eq!(segment_lengths(&elements, false, 20), vec![10.0, 0.0, 10.0]);
    }

    #[test]
    fn test_relative_lengths_of_degenerate_path() {
        let elements = vec![PathElement::move_to(5.0, 5.0), PathElement::line_to(5.0, 5.0)];
        assert_eq!(segment_lengths(&elements, true, 20), vec![0.0]);
    }

    #[test]
    fn test_locate_tracks_close_anchor() {
        let elements = square();
        let segments = segment_lengths(&elements, true, 20);
        let loc = locate(&elements, 0.875, &segments);
        assert_eq!(loc.index, 3);
        assert!((loc.t - 0.5).abs() < 1e-12);
        assert_eq!(loc.anchor, Point::new(0.0, 0.0));
        assert_eq!(loc.start, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_point_endpoints() {
        let elements = square();
        let segments = segment_lengths(&elements, true, 20);
        let start = point(&elements, 0.0, &segments).unwrap();
        assert_eq!(start.point(), Some(Point::new(0.0, 0.0)));
        let end = point(&elements, 1.0, &segments).unwrap();
        assert_eq!(end.point(), Some(Point::new(0.0, 0.0)));
        let mid = point(&elements, 0.5, &segments).unwrap();
        assert_eq!(mid.point(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_point_backs_off_zero_final_segment() {
        let elements = vec![
            PathElement::move_to(0.0, 0.0),
            PathElement::line_to(10.0, 0.0),
            PathElement::move_to(10.0, 0.0),
        ];
        let segments = segment_lengths(&elements, true, 20);
        let loc = locate(&elements, 1.0 + 1e-9, &segments);
        assert_eq!(loc.index, 0);
        assert_eq!(loc.t, 1.0);
    }

    #[test]
    fn test_point_on_empty_and_single() {
        assert_eq!(point(&[], 0.5, &[]), None);
        let single = [PathElement::move_to(3.0, 4.0)];
        assert_eq!(
            point(&single, 0.5, &[]),
            Some(PathElement::move_to(3.0, 4.0))
        );
    }

    #[test]
    fn test_extrema_of_arch() {
        let rect = extrema(
            Point::new(0.0, 0.0),
            Point::new(0.0, -10.0),
            Point::new(10.0, -10.0),
            Point::new(10.0, 0.0),
        );
        assert!((rect.x - 0.0).abs() < 1e-12);
        assert!((rect.width - 10.0).abs() < 1e-12);
        assert!((rect.y + 7.5).abs() < 1e-12);
        assert!((rect.height - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_extrema_of_straight_curve() {
        let rect = extrema(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );
        assert!(rect.approx_eq(&Rect::new(0.0, 0.0, 3.0, 3.0), 1e-12));
    }

    #[test]
    fn test_extrema_of_nearly_flat_curve() {
        // Both the cubic and quadratic terms vanish relative to 1.
        let rect = extrema(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 1e-15),
            Point::new(3.0, 3e-15),
        );
        assert!(rect.approx_eq(&Rect::new(0.0, 0.0, 3.0, 3e-15), 1e-12));
    }

    #[test]
    fn test_arc_segment_count() {
        use std::f64::consts::PI;
        assert_eq!(arc_segment_count(0.0), 1);
        assert_eq!(arc_segment_count(FRAC_PI_2), 1);
        assert_eq!(arc_segment_count(PI * (1.0 + 1e-12)), 2);
        assert_eq!(arc_segment_count(-PI), 2);
        assert_eq!(arc_segment_count(2.0 * PI), 4);
        assert_eq!(arc_segment_count(PI + 0.1), 3);
    }

    #[test]
    fn test_quad_to_cubic() {
        let (cp1, cp2) = quad_to_cubic(
            Point::new(0.0, 0.0),
            Point::new(30.0, 30.0),
            Point::new(60.0, 0.0),
        );
        assert!(cp1.approx_eq(Point::new(20.0, 20.0), 1e-12));
        assert!(cp2.approx_eq(Point::new(40.0, 20.0), 1e-12));
    }

    #[test]
    fn test_split_curve_shares_midpoint() {
        let (left, right) = split_curve(
            0.3,
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(left[3], right[0]);
        assert_eq!(left[0], Point::new(0.0, 0.0));
        assert_eq!(right[3], Point::new(10.0, 0.0));
    }
}
