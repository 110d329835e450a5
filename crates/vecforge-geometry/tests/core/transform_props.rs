use proptest::prelude::*;
use vecforge_geometry::{GeometryError, Path, Point, Transform};

fn approx(a: Point, b: Point, eps: f64) -> bool {
    a.approx_eq(b, eps)
}

proptest! {
    #[test]
    fn translations_compose(
        tx1 in -1000.0f64..1000.0, ty1 in -1000.0f64..1000.0,
        tx2 in -1000.0f64..1000.0, ty2 in -1000.0f64..1000.0,
        x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
    ) {
        let p = Point::new(x, y);
        let chained = Transform::IDENTITY.translate(tx1, ty1).translate(tx2, ty2);
        let single = Transform::translation(tx1 + tx2, ty1 + ty2);
        prop_assert!(approx(chained.transform_point(p), single.transform_point(p), 1e-9));
    }

    #[test]
    fn inverse_undoes_transform(
        angle in -360.0f64..360.0,
        sx in 0.1f64..10.0, sy in 0.1f64..10.0,
        tx in -100.0f64..100.0, ty in -100.0f64..100.0,
        x in -100.0f64..100.0, y in -100.0f64..100.0,
    ) {
        let t = Transform::IDENTITY.translate(tx, ty).rotate(angle).scale(sx, sy);
        let inv = t.inverse().unwrap();
        let p = Point::new(x, y);
        prop_assert!(approx(inv.transform_point(t.transform_point(p)), p, 1e-6));
    }

    #[test]
    fn inverse_restores_path(
        angle in -360.0f64..360.0,
        kx in -60.0f64..60.0,
        s in 0.2f64..5.0,
        tx in -100.0f64..100.0,
    ) {
        let path = Path::ellipse(-20.0, 5.0, 40.0, 30.0).line_to(100.0, -50.0).close_path();
        let t = Transform::IDENTITY.skew(kx, 0.0).rotate(angle).scale(s, s).translate(tx, 0.0);
        let back = t.inverse().unwrap().transform_path(&t.transform_path(&path));
        prop_assert_eq!(back.len(), path.len());
        for (a, b) in back.elements().iter().zip(path.elements()) {
            match (a.point(), b.point()) {
                (Some(pa), Some(pb)) => prop_assert!(approx(pa, pb, 1e-6)),
                (None, None) => {}
                _ => prop_assert!(false, "element kinds differ"),
            }
        }
    }

    #[test]
    fn product_applies_left_first(
        a in -180.0f64..180.0,
        tx in -100.0f64..100.0,
        x in -100.0f64..100.0, y in -100.0f64..100.0,
    ) {
        let r = Transform::rotation(a);
        let t = Transform::translation(tx, 0.0);
        let p = Point::new(x, y);
        let expected = t.transform_point(r.transform_point(p));
        prop_assert!(approx((r * t).transform_point(p), expected, 1e-9));
        prop_assert!(approx(t.append(&r).transform_point(p), expected, 1e-9));
        prop_assert!(approx(r.prepend(&t).transform_point(p), expected, 1e-9));
    }

    #[test]
    fn rotation_preserves_length(
        angle in -360.0f64..360.0,
        w in 1.0f64..100.0, h in 1.0f64..100.0,
    ) {
        let path = Path::rect(0.0, 0.0, w, h);
        let rotated = path.transform(&Transform::rotation(angle));
        prop_assert!((rotated.length() - path.length()).abs() < 1e-6);
    }
}

#[test]
fn test_zero_scale_has_no_inverse() {
    let t = Transform::scaling(0.0, 3.0);
    assert!(matches!(
        t.inverse(),
        Err(GeometryError::SingularMatrix { .. })
    ));
}
