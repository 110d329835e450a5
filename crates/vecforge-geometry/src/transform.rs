//! Affine transforms.
//!
//! A [`Transform`] is a row-major 3x3 matrix whose last column is fixed to
//! `[0, 0, 1]`. Points are row vectors, so a point is mapped as `p' = p * M`
//! and `A * B` applies `A` first, then `B`.
//!
//! The builder methods (`translate`, `scale`, `rotate`, `skew`) premultiply:
//! each builds a small matrix `N` and returns `N * self`, so the operation
//! added last is the one applied to points first.

use crate::element::PathElement;
use crate::group::{Group, Shape};
use crate::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;
use vecforge_core::{GeometryError, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    m: [f64; 9],
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Builds a transform from nine row-major values. The last column is
    /// forced to `[0, 0, 1]`.
    pub fn new(m: [f64; 9]) -> Self {
        let mut m = m;
        m[2] = 0.0;
        m[5] = 0.0;
        m[8] = 1.0;
        Transform { m }
    }

    /// The six-value form used by SVG's `matrix(a b c d e f)`.
    pub fn from_affine(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform {
            m: [a, b, 0.0, c, d, 0.0, e, f, 1.0],
        }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Transform::IDENTITY.translate(tx, ty)
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Transform::IDENTITY.scale(sx, sy)
    }

    pub fn rotation(degrees: f64) -> Self {
        Transform::IDENTITY.rotate(degrees)
    }

    pub fn matrix(&self) -> [f64; 9] {
        self.m
    }

    pub fn translate(&self, tx: f64, ty: f64) -> Self {
        let n = Transform::from_affine(1.0, 0.0, 0.0, 1.0, tx, ty);
        n * *self
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        let n = Transform::from_affine(sx, 0.0, 0.0, sy, 0.0, 0.0);
        n * *self
    }

    pub fn scale_uniform(&self, s: f64) -> Self {
        self.scale(s, s)
    }

    /// Rotation by `degrees`, positive from the x axis towards the y axis.
    pub fn rotate(&self, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        let n = Transform::from_affine(c, s, -s, c, 0.0, 0.0);
        n * *self
    }

    /// Skew by `kx` and `ky` degrees.
    ///
    /// Shears x by `-tan(kx) * y` and y by `tan(ky) * x`. SVG's `skewX` uses
    /// the opposite sign; the SVG reader builds its own matrices.
    pub fn skew(&self, kx: f64, ky: f64) -> Self {
        let n = Transform::from_affine(
            1.0,
            ky.to_radians().tan(),
            -kx.to_radians().tan(),
            1.0,
            0.0,
            0.0,
        );
        n * *self
    }

    /// `self * other`: `self` is applied to points first.
    pub fn prepend(&self, other: &Transform) -> Self {
        *self * *other
    }

    /// `other * self`: `other` is applied to points first.
    pub fn append(&self, other: &Transform) -> Self {
        *other * *self
    }

    /// Determinant of the linear 2x2 part.
    pub fn determinant(&self) -> f64 {
        self.m[0] * self.m[4] - self.m[1] * self.m[3]
    }

    pub fn inverse(&self) -> Result<Transform, GeometryError> {
        let m = &self.m;
        let d = self.determinant();
        if d == 0.0 {
            return Err(GeometryError::SingularMatrix { determinant: d });
        }
        Ok(Transform {
            m: [
                m[4] / d,
                -m[1] / d,
                0.0,
                -m[3] / d,
                m[0] / d,
                0.0,
                (m[3] * m[7] - m[4] * m[6]) / d,
                -(m[0] * m[7] - m[1] * m[6]) / d,
                1.0,
            ],
        })
    }

    /// The horizontal scale term, `m[0]`.
    pub fn x_scale(&self) -> f64 {
        self.m[0]
    }

    pub fn is_identity(&self) -> bool {
        *self == Transform::IDENTITY
    }

    pub fn transform_point(&self, p: Point) -> Point {
        let m = &self.m;
        Point::new(
            p.x * m[0] + p.y * m[3] + m[6],
            p.x * m[1] + p.y * m[4] + m[7],
        )
    }

    pub fn transform_element(&self, el: &PathElement) -> PathElement {
        el.map_points(|p| self.transform_point(p))
    }

    /// Maps every element; fill, stroke and stroke width are kept as is.
    pub fn transform_path(&self, path: &Path) -> Path {
        path.with_elements(path.elements().iter().map(|el| self.transform_element(el)))
    }

    pub fn transform_group(&self, group: &Group) -> Group {
        Group::from_shapes(group.shapes().iter().map(|s| self.transform_shape(s)))
    }

    pub fn transform_shape(&self, shape: &Shape) -> Shape {
        match shape {
            Shape::Path(p) => Shape::Path(self.transform_path(p)),
            Shape::Group(g) => Shape::Group(self.transform_group(g)),
        }
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Matrix product; the left operand is applied to points first.
    fn mul(self, rhs: Transform) -> Transform {
        let a = &self.m;
        let b = &rhs.m;
        Transform {
            m: [
                a[0] * b[0] + a[1] * b[3],
                a[0] * b[1] + a[1] * b[4],
                0.0,
                a[3] * b[0] + a[4] * b[3],
                a[3] * b[1] + a[4] * b[4],
                0.0,
                a[6] * b[0] + a[7] * b[3] + b[6],
                a[6] * b[1] + a[7] * b[4] + b[7],
                1.0,
            ],
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.m;
        write!(
            f,
            "matrix({} {} {} {} {} {})",
            m[0], m[1], m[3], m[4], m[6], m[7]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        a.approx_eq(b, 1e-9)
    }

    #[test]
    fn test_identity() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(Transform::IDENTITY.transform_point(p), p);
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn test_new_forces_last_column() {
        let t = Transform::new([1.0, 2.0, 9.0, 3.0, 4.0, 9.0, 5.0, 6.0, 9.0]);
        assert_eq!(t.matrix(), [1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn test_premultiply_order() {
        // Scale is added last, so it runs first: (1,0) -> (2,0) -> (12,0).
        let t = Transform::IDENTITY.translate(10.0, 0.0).scale(2.0, 2.0);
        assert!(approx(
            t.transform_point(Point::new(1.0, 0.0)),
            Point::new(12.0, 0.0)
        ));

        // Translate added last: (1,0) -> (11,0) -> (22,0).
        let t = Transform::IDENTITY.scale(2.0, 2.0).translate(10.0, 0.0);
        assert!(approx(
            t.transform_point(Point::new(1.0, 0.0)),
            Point::new(22.0, 0.0)
        ));
    }

    #[test]
    fn test_append_and_prepend() {
        let a = Transform::translation(5.0, 0.0);
        let b = Transform::scaling(3.0, 3.0);
        let p = Point::new(1.0, 1.0);
        // prepend: a runs first.
        assert!(approx(a.prepend(&b).transform_point(p), Point::new(18.0, 3.0)));
        // append: b runs first.
        assert!(approx(a.append(&b).transform_point(p), Point::new(8.0, 3.0)));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let t = Transform::rotation(90.0);
        assert!(approx(
            t.transform_point(Point::new(1.0, 0.0)),
            Point::new(0.0, 1.0)
        ));
    }

    #[test]
    fn test_skew_sign() {
        let t = Transform::IDENTITY.skew(45.0, 0.0);
        assert!(approx(
            t.transform_point(Point::new(0.0, 1.0)),
            Point::new(-1.0, 1.0)
        ));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::IDENTITY
            .translate(3.0, 7.0)
            .rotate(30.0)
            .scale(2.0, 0.5);
        let inv = t.inverse().unwrap();
        let p = Point::new(12.5, -3.25);
        assert!(approx(inv.transform_point(t.transform_point(p)), p));
        assert!((t * inv).matrix().iter().zip(Transform::IDENTITY.matrix()).all(|(a, b)| (a - b).abs() < 1e-9));
    }

    #[test]
    fn test_singular_inverse() {
        let t = Transform::scaling(0.0, 1.0);
        assert_eq!(
            t.inverse(),
            Err(GeometryError::SingularMatrix { determinant: 0.0 })
        );
    }

    #[test]
    fn test_transform_path_keeps_close_and_style() {
        let path = Path::rect(0.0, 0.0, 10.0, 10.0).with_stroke_width(Some(2.0));
        let moved = Transform::translation(5.0, 5.0).transform_path(&path);
        assert_eq!(moved.elements().last(), Some(&PathElement::Close));
        assert_eq!(moved.elements()[0], PathElement::move_to(5.0, 5.0));
        assert_eq!(moved.stroke_width(), Some(2.0));
    }

    #[test]
    fn test_display() {
        let t = Transform::from_affine(1.0, 0.0, 0.0, 1.0, 5.0, 6.0);
        assert_eq!(t.to_string(), "matrix(1 0 0 1 5 6)");
    }
}
