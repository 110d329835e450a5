use vecforge_geometry::{Color, Group, Path, PathElement, Shape, Transform};

#[test]
fn test_element_json_shape() {
    let json = serde_json::to_value(PathElement::curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)).unwrap();
    assert_eq!(json["cmd"], "curveto");
    assert_eq!(json["ctrl2"]["x"], 3.0);
    assert_eq!(serde_json::to_value(PathElement::Close).unwrap()["cmd"], "close");
}

#[test]
fn test_unpainted_path_omits_paint() {
    let json = serde_json::to_value(Path::rect(0.0, 0.0, 1.0, 1.0)).unwrap();
    let object = json.as_object().unwrap();
    assert!(object.contains_key("elements"));
    assert!(!object.contains_key("fill"));
    assert!(!object.contains_key("stroke_width"));
}

#[test]
fn test_shape_tree_round_trip() {
    let tree = Shape::Group(
        Group::new()
            .push(Path::ellipse(0.0, 0.0, 10.0, 20.0).with_fill(Some(Color::rgb(0.2, 0.4, 0.6, 1.0))))
            .push(Group::new().push(Path::line((0.0, 0.0).into(), (5.0, 5.0).into()))),
    );
    let text = serde_json::to_string(&tree).unwrap();
    assert!(text.contains("\"type\":\"group\""));
    let back: Shape = serde_json::from_str(&text).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_transform_round_trip() {
    let t = Transform::IDENTITY.translate(3.0, 4.0).rotate(30.0);
    let back: Transform = serde_json::from_str(&serde_json::to_string(&t).unwrap()).unwrap();
    assert_eq!(back, t);
}
