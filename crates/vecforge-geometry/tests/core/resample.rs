use proptest::prelude::*;
use vecforge_geometry::generators::{arc, connect};
use vecforge_geometry::{ArcKind, Path, PathElement, Point};

#[test]
fn test_resample_square_by_amount() {
    let square = Path::rect(0.0, 0.0, 100.0, 100.0);
    let resampled = square.resample_by_amount(8, false);
    // 8 anchors plus the close.
    assert_eq!(resampled.len(), 9);
    assert!(resampled.is_closed());
    assert_eq!(resampled.elements()[2].point(), Some(Point::new(100.0, 0.0)));
}

#[test]
fn test_resample_per_contour() {
    let two = Path::rect(0.0, 0.0, 10.0, 10.0).extend(&Path::rect(20.0, 0.0, 10.0, 10.0));
    let resampled = two.resample_by_amount(4, true);
    assert_eq!(resampled.contours().len(), 2);
    assert_eq!(resampled.len(), 10);

    let merged = two.resample_by_amount(4, false);
    assert_eq!(merged.contours().len(), 1);
}

#[test]
fn test_resample_open_line_by_length() {
    let line = connect(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)], false);
    let resampled = line.resample_by_length(10.0);
    assert_eq!(resampled.len(), 11);
    assert_eq!(resampled.elements()[10], PathElement::line_to(100.0, 0.0));
    // Paint survives resampling.
    assert_eq!(resampled.stroke(), line.stroke());
}

#[test]
fn test_resample_curve_stays_on_curve() {
    let half = arc(Point::ZERO, 100.0, 100.0, 0.0, 180.0, ArcKind::Open);
    let resampled = half.resample_by_amount(5, false);
    for el in resampled.elements() {
        let p = el.point().unwrap();
        assert!((p.distance(Point::ZERO) - 50.0).abs() < 0.5);
    }
}

#[test]
fn test_resample_by_invalid_length_is_noop() {
    let square = Path::rect(0.0, 0.0, 10.0, 10.0);
    assert_eq!(square.resample_by_length(0.0), square);
    assert_eq!(square.resample_by_length(f64::NAN), square);
}

#[test]
fn test_resample_by_tiny_length_is_noop() {
    let line = Path::line(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    assert_eq!(line.resample_by_length(f64::MIN_POSITIVE), line);
    assert_eq!(line.resample_by_length(1e-9), line);
    // Just under the cap still resamples.
    assert_eq!(line.resample_by_length(1e-3).len(), 100_001);
}

#[test]
fn test_resample_with_curve_samples() {
    let half = arc(Point::ZERO, 100.0, 100.0, 0.0, 180.0, ArcKind::Open);
    let coarse = half.resample_by_amount_with(5, false, 1);
    let fine = half.resample_by_amount_with(5, false, 50);
    assert_eq!(coarse.len(), 5);
    assert_eq!(fine.len(), 5);
    // Both ends are fixed whatever the sampling.
    assert_eq!(coarse.elements()[0].point(), fine.elements()[0].point());
    assert_eq!(half.resample_by_amount(5, false), half.resample_by_amount_with(5, false, 20));
}

fn polyline_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..8)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn resample_whole_open_path_keeps_count_and_ends(
        points in polyline_points(),
        n in 2usize..40,
    ) {
        let path = Path::polyline(&points, false);
        prop_assume!(path.length() > 1e-6);
        let resampled = path.resample_by_amount(n, false);
        let els = resampled.elements();
        prop_assert_eq!(els.len(), n);
        prop_assert!(!resampled.is_closed());
        prop_assert!(els[0].point().unwrap().approx_eq(points[0], 1e-6));
        prop_assert!(els[n - 1].point().unwrap().approx_eq(points[points.len() - 1], 1e-6));
    }

    #[test]
    fn resample_whole_closed_path_keeps_count_and_start(
        points in polyline_points(),
        n in 1usize..40,
    ) {
        let path = Path::polyline(&points, true);
        prop_assume!(path.length() > 1e-6);
        let resampled = path.resample_by_amount(n, false);
        let els = resampled.elements();
        prop_assert_eq!(els.len(), n + 1);
        prop_assert_eq!(els[n], PathElement::Close);
        prop_assert!(els[0].point().unwrap().approx_eq(points[0], 1e-6));
    }
}
