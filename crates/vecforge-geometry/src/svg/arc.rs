//! Elliptical arc to cubic bezier conversion.
//!
//! Uses the endpoint-to-center parametrisation from the SVG implementation
//! notes, then approximates each quarter (or smaller) sweep with one cubic.

use crate::bezier;
use crate::element::PathElement;
use std::f64::consts::TAU;
use tracing::debug;
use vecforge_core::Point;

fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let dot = u.0 * v.0 + u.1 * v.1;
    let det = u.0 * v.1 - u.1 * v.0;
    det.atan2(dot)
}

fn unit_vector_angle(v: (f64, f64)) -> f64 {
    angle_between((1.0, 0.0), v)
}

struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    cos_phi: f64,
    sin_phi: f64,
}

impl Ellipse {
    /// `[x; y] = [cx; cy] + R(phi) * [rx * u; ry * v]`
    fn point(&self, u: f64, v: f64) -> Point {
        Point::new(
            self.cx + self.cos_phi * (self.rx * u) - self.sin_phi * (self.ry * v),
            self.cy + self.sin_phi * (self.rx * u) + self.cos_phi * (self.ry * v),
        )
    }
}

/// Converts the arc from `from` to `to` into cubic `CurveTo`s.
///
/// A zero radius, or endpoints the ellipse cannot be fitted through, yield
/// a single `LineTo`. Radii too small to span the endpoints are scaled up.
pub fn arc_to_curves(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Vec<PathElement> {
    let line = || vec![PathElement::LineTo { point: to }];
    if rx.abs() < f64::EPSILON || ry.abs() < f64::EPSILON {
        return line();
    }

    let mut rx = rx.abs();
    let mut ry = ry.abs();

    let phi = x_rotation.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Step 1: Compute (x1', y1')
    let dx2 = (from.x - to.x) / 2.0;
    let dy2 = (from.y - to.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Step 2: Ensure radii are large enough
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        debug!("Scaling arc radii by {:.4} to reach the endpoint", scale);
        rx *= scale;
        ry *= scale;
    }

    // Step 3: Compute (cx', cy')
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;
    let denom = rx2 * y1p2 + ry2 * x1p2;
    if denom.abs() < f64::EPSILON {
        return line();
    }

    // Clamp precision noise.
    let numer = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);

    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * (numer / denom).sqrt();
    let cxp = coef * (rx * y1p / ry);
    let cyp = coef * (-ry * x1p / rx);

    // Step 4: Compute (cx, cy)
    let ellipse = Ellipse {
        cx: cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0,
        cy: sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0,
        rx,
        ry,
        cos_phi,
        sin_phi,
    };

    // Step 5: Angles
    let u = ((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v = ((-x1p - cxp) / rx, (-y1p - cyp) / ry);

    let mut theta = unit_vector_angle(u);
    let mut delta = angle_between(u, v);
    if !sweep && delta > 0.0 {
        delta -= TAU;
    } else if sweep && delta < 0.0 {
        delta += TAU;
    }

    // Step 6: Split into <= 90deg segments
    let segment_count = bezier::arc_segment_count(delta);
    let delta_seg = delta / segment_count as f64;

    let mut curves = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let t0 = theta;
        let t1 = theta + delta_seg;
        let k = 4.0 / 3.0 * ((t1 - t0) / 4.0).tan();

        let (s0, c0) = t0.sin_cos();
        let (s1, c1) = t1.sin_cos();
        let ctrl1 = ellipse.point(c0 - k * s0, s0 + k * c0);
        let ctrl2 = ellipse.point(c1 + k * s1, s1 - k * c1);
        // Land exactly on the requested endpoint.
        let point = if i + 1 == segment_count {
            to
        } else {
            ellipse.point(c1, s1)
        };

        curves.push(PathElement::CurveTo {
            ctrl1,
            ctrl2,
            point,
        });
        theta = t1;
    }
    curves
}
