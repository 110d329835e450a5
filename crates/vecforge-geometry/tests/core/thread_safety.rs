use vecforge_geometry::{
    ArcKind, Color, Group, Path, PathElement, Point, Rect, RenderStyle, Shape, SvgElement,
    Transform,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_value_types_are_send_and_sync() {
    assert_send_sync::<Point>();
    assert_send_sync::<Rect>();
    assert_send_sync::<Color>();
    assert_send_sync::<Transform>();
    assert_send_sync::<PathElement>();
    assert_send_sync::<Path>();
    assert_send_sync::<Group>();
    assert_send_sync::<Shape>();
    assert_send_sync::<SvgElement>();
    assert_send_sync::<RenderStyle>();
    assert_send_sync::<ArcKind>();
}

#[test]
fn test_paths_are_shared_across_threads() {
    let path = Path::ellipse(0.0, 0.0, 100.0, 50.0);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let path = path.clone();
            std::thread::spawn(move || path.point(i as f64 / 4.0))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_some());
    }
}
