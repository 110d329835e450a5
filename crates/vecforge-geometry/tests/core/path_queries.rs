use vecforge_geometry::{combine_paths, parse_path_data, Group, Path, PathElement, Point, Rect, Shape};

fn triangle() -> Path {
    Path::polyline(
        &[
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(0.0, 40.0),
        ],
        true,
    )
}

#[test]
fn test_triangle_length_includes_close() {
    assert!((triangle().length() - 120.0).abs() < 1e-9);
}

#[test]
fn test_point_walks_the_perimeter() {
    let t = triangle();
    // Sides are 30, 50 and 40 long, so a quarter of the way is the corner.
    let p = t.point(0.25).and_then(|el| el.point()).unwrap();
    assert!(p.approx_eq(Point::new(30.0, 0.0), 1e-9));
    let end = t.point(1.0).and_then(|el| el.point()).unwrap();
    assert!(end.approx_eq(Point::ZERO, 1e-9));
    let half = t.point(0.5).and_then(|el| el.point()).unwrap();
    assert!(half.approx_eq(Point::new(12.0, 24.0), 1e-9));
}

#[test]
fn test_point_with_cached_lengths_matches() {
    let path = parse_path_data("M0 0 C0 50 100 50 100 0 L100 100").unwrap();
    let lengths = path.segment_lengths(true, 10);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert_eq!(path.point(t), path.point_with(t, &lengths));
    }
}

#[test]
fn test_curve_bounds_are_tight() {
    let arch = parse_path_data("M0 0 C0 -40 100 -40 100 0").unwrap();
    let b = arch.bounds();
    assert!(b.approx_eq(&Rect::new(0.0, -30.0, 100.0, 30.0), 1e-9));
}

#[test]
fn test_contains_with_holes_is_even_odd() {
    let outer = Path::rect(0.0, 0.0, 100.0, 100.0);
    let inner = Path::rect(25.0, 25.0, 50.0, 50.0);
    let donut = outer.extend(&inner);
    assert!(donut.contains(10.0, 50.0));
    assert!(!donut.contains(50.0, 50.0));
    assert!(!donut.contains(200.0, 10.0));
    assert_eq!(donut.contours().len(), 2);
}

#[test]
fn test_group_queries_flatten_children() {
    let group = Group::new()
        .push(Path::rect(0.0, 0.0, 10.0, 10.0))
        .push(Group::new().push(Path::rect(50.0, 50.0, 10.0, 10.0)));
    let shape = Shape::Group(group);
    assert_eq!(shape.bounds(), Rect::new(0.0, 0.0, 60.0, 60.0));
    assert!(shape.contains(55.0, 55.0));
    assert!(!shape.contains(30.0, 30.0));
    assert!((shape.length() - 80.0).abs() < 1e-9);

    let combined = combine_paths(&shape);
    assert_eq!(combined.len(), 10);
    assert!(combined.elements()[5].is_move_to());
}

#[test]
fn test_insert_point_keeps_geometry() {
    let path = triangle();
    let longer = path.insert_point(0.1);
    assert_eq!(longer.len(), path.len() + 1);
    assert!((longer.length() - path.length()).abs() < 1e-9);
    assert_eq!(longer.bounds(), path.bounds());
    let inserted = longer.elements()[1];
    assert!(matches!(inserted, PathElement::LineTo { .. }));
    assert!(inserted.point().unwrap().approx_eq(Point::new(12.0, 0.0), 1e-9));
}
