use vecforge_geometry::{parse_path_data, GeometryError, Path, PathElement, Point};

#[test]
fn test_serialised_path_data_parses_back() {
    let original = Path::new()
        .move_to(0.0, 0.0)
        .line_to(10.5, -3.25)
        .curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
        .close_path()
        .move_to(100.0, 100.0)
        .line_to(120.0, 100.0);
    let data = original.to_path_data();
    assert_eq!(data, "M0 0L10.5 -3.25C1 2 3 4 5 6ZM100 100L120 100");
    assert_eq!(parse_path_data(&data).unwrap().elements(), original.elements());
}

#[test]
fn test_compact_real_world_data() {
    // Exported by a drawing tool: no separators between signed numbers.
    let path = parse_path_data("M10-20l5.5.5h-3v2z").unwrap();
    assert_eq!(
        path.elements(),
        &[
            PathElement::move_to(10.0, -20.0),
            PathElement::line_to(15.5, -19.5),
            PathElement::line_to(12.5, -19.5),
            PathElement::line_to(12.5, -17.5),
            PathElement::Close,
        ]
    );
}

#[test]
fn test_relative_move_after_close_starts_at_subpath() {
    let path = parse_path_data("M10 10 l10 0 l0 10 z m5 5 l1 0").unwrap();
    assert_eq!(path.elements()[4], PathElement::move_to(15.0, 15.0));
    assert_eq!(path.contours().len(), 2);
}

#[test]
fn test_arc_circle_matches_ellipse_bounds() {
    let circle = parse_path_data("M0 50 A50 50 0 1 0 100 50 A50 50 0 1 0 0 50 Z").unwrap();
    let b = circle.bounds();
    assert!((b.width - 100.0).abs() < 1e-6);
    assert!((b.height - 100.0).abs() < 1e-6);
    assert!(circle.contains(50.0, 50.0));
    assert!(!circle.contains(2.0, 2.0));
}

#[test]
fn test_clamped_output() {
    let far = Path::line(Point::new(-1e9, 0.0), Point::new(1e9, 0.0));
    assert_eq!(far.to_path_data(), "M-9999 0L9999 0");
    assert_eq!(far.to_path_data_clamped(5.0), "M-5 0L5 0");
}

#[test]
fn test_errors_report_position() {
    match parse_path_data("M0 0 L10") {
        Err(GeometryError::MalformedPathData { .. }) => {}
        other => panic!("expected malformed data, got {:?}", other),
    }
    assert!(parse_path_data("X1 2").is_err());
    assert!(parse_path_data("10 20").is_err());
}
