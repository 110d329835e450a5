use vecforge_geometry::filters::{
    align, copy, fit, reflect, rotate, scale, skew, snap, stack, translate, wiggle,
};
use vecforge_geometry::generators::{freehand, grid, polygon, scatter, star};
use vecforge_geometry::{
    CopyStep, Group, HAlign, Path, Point, Rect, Shape, StackDirection, VAlign, WiggleScope,
};

fn square() -> Shape {
    Shape::Path(Path::rect(0.0, 0.0, 10.0, 10.0))
}

#[test]
fn test_translate_then_translate() {
    let a = translate(&translate(&square(), Point::new(5.0, 0.0)), Point::new(0.0, 5.0));
    let b = translate(&square(), Point::new(5.0, 5.0));
    assert_eq!(a, b);
}

#[test]
fn test_rotate_full_turn_is_identity() {
    let turned = rotate(&square(), 360.0);
    assert!(turned.bounds().approx_eq(&square().bounds(), 1e-9));
}

#[test]
fn test_scale_then_fit_restores_size() {
    let big = scale(&square(), Point::new(300.0, 300.0));
    let fitted = fit(&big, Point::new(5.0, 5.0), 10.0, 10.0, true);
    assert!(fitted.bounds().approx_eq(&square().bounds(), 1e-9));
}

#[test]
fn test_skew_around_origin_keeps_origin_row() {
    let skewed = skew(&square(), Point::new(45.0, 0.0), Point::new(0.0, 0.0));
    let b = skewed.bounds();
    assert!((b.height - 10.0).abs() < 1e-9);
    assert!((b.width - 20.0).abs() < 1e-9);
}

#[test]
fn test_align_star_left_top() {
    let s = Shape::Path(star(Point::new(40.0, 40.0), 5, 100.0, 40.0));
    let aligned = align(&s, Point::ZERO, HAlign::Left, VAlign::Top);
    let b = aligned.bounds();
    assert!(b.x.abs() < 1e-9);
    assert!(b.y.abs() < 1e-9);
}

#[test]
fn test_reflect_twice_is_identity() {
    let hexagon = Shape::Path(polygon(Point::new(30.0, 10.0), 20.0, 6, false));
    let there = reflect(&hexagon, Point::new(0.0, 0.0), 30.0, false);
    let back = reflect(&there, Point::new(0.0, 0.0), 30.0, false);
    assert!(back.bounds().approx_eq(&hexagon.bounds(), 1e-9));
}

#[test]
fn test_snap_grid_points() {
    let points = grid(3, 3, 21.0, 21.0, Point::ZERO);
    let path = Shape::Path(Path::polyline(&points, false));
    let snapped = snap(&path, 10.0, 100.0, Point::ZERO);
    assert_eq!(snapped.bounds(), Rect::new(-10.0, -10.0, 20.0, 20.0));
}

#[test]
fn test_copy_rotates_around_origin() {
    let order = CopyStep::parse_order("rt");
    let copies = copy(&square(), 4, &order, Point::ZERO, 90.0, Point::new(100.0, 100.0));
    assert_eq!(copies.len(), 4);
    assert!(copies
        .bounds()
        .approx_eq(&Rect::new(-10.0, -10.0, 20.0, 20.0), 1e-9));
}

#[test]
fn test_scatter_points_land_in_group_children() {
    let group = Shape::Group(
        Group::new()
            .push(Path::rect(0.0, 0.0, 10.0, 10.0))
            .push(Path::rect(15.0, 0.0, 10.0, 10.0)),
    );
    let points = scatter(&group, 20, 3);
    assert_eq!(points.len(), 20);
    for p in &points {
        assert!(group.contains(p.x, p.y));
    }
}

#[test]
fn test_stacked_freehand_strokes() {
    let strokes: Vec<Shape> = ["M0,0 10,10", "M50,50 70,55", "M-5,0 0,20"]
        .iter()
        .map(|d| Shape::Path(freehand(d).unwrap()))
        .collect();
    let stacked = stack(&strokes, StackDirection::South, 2.0);
    assert_eq!(stacked[1].bounds(), Rect::new(50.0, 12.0, 20.0, 5.0));
    assert_eq!(stacked[2].bounds(), Rect::new(-5.0, 19.0, 5.0, 20.0));

    let still = wiggle(&stacked[0], WiggleScope::Points, Point::ZERO, 9);
    assert_eq!(still, stacked[0]);
}
