use vecforge_geometry::{parse_element, Color, GeometryError, Rect, Shape, SvgElement};

fn document() -> SvgElement {
    SvgElement::new("svg")
        .with_attr("width", "200")
        .with_child(
            SvgElement::new("g")
                .with_attr("transform", "translate(50,50) scale(2)")
                .with_attr("style", "fill:none;stroke:#336699;stroke-width:1.5")
                .with_child(
                    SvgElement::new("circle")
                        .with_attr("cx", "0")
                        .with_attr("cy", "0")
                        .with_attr("r", "10"),
                )
                .with_child(
                    SvgElement::new("path")
                        .with_attr("d", "M-10-10h20v20h-20z")
                        .with_attr("fill", "rgb(255, 0, 0)"),
                ),
        )
        .with_child(SvgElement::new("desc"))
        .with_child(
            SvgElement::new("polyline")
                .with_attr("points", "0,190 100,150 200,190")
                .with_attr("stroke", "black"),
        )
}

#[test]
fn test_document_structure() {
    let shape = parse_element(&document()).unwrap().unwrap();
    let Shape::Group(root) = &shape else {
        panic!("expected a group");
    };
    // `desc` produces nothing.
    assert_eq!(root.len(), 2);
    assert_eq!(root.paths().len(), 3);
    assert_eq!(root.depth(), 2);
}

#[test]
fn test_group_transform_and_style_are_inherited() {
    let shape = parse_element(&document()).unwrap().unwrap();
    let Shape::Group(root) = shape else {
        panic!("expected a group");
    };
    let paths = root.paths();

    let circle = paths[0];
    assert!(circle
        .bounds()
        .approx_eq(&Rect::new(30.0, 30.0, 40.0, 40.0), 1e-9));
    assert_eq!(circle.fill(), None);
    assert_eq!(circle.stroke(), Some(Color::from_hex("#336699").unwrap()));
    assert_eq!(circle.stroke_width(), Some(3.0));

    let square = paths[1];
    assert_eq!(square.fill(), Some(Color::rgb(255.0, 0.0, 0.0, 255.0)));
    assert_eq!(square.bounds(), Rect::new(30.0, 30.0, 40.0, 40.0));

    let polyline = paths[2];
    assert_eq!(polyline.fill(), Some(Color::BLACK));
    assert_eq!(polyline.stroke_width(), Some(1.0));
    assert!(!polyline.is_closed());
}

#[test]
fn test_bad_attribute_names_the_element() {
    let doc = SvgElement::new("svg").with_child(SvgElement::new("circle").with_attr("r", "ten"));
    match parse_element(&doc) {
        Err(GeometryError::InvalidAttribute { element, attribute, value }) => {
            assert_eq!(element, "circle");
            assert_eq!(attribute, "r");
            assert_eq!(value, "ten");
        }
        other => panic!("expected an invalid attribute, got {:?}", other),
    }
}
