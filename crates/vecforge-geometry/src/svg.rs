//! # SVG shape reader
//!
//! Turns an already-parsed SVG element tree into [`Shape`]s. XML syntax is
//! left to the caller; this module only interprets elements and attributes.
//!
//! Supported elements: `path`, `rect`, `ellipse`, `circle`, `line`,
//! `polygon`, `polyline`, `g` and `svg`. Unknown elements are skipped.
//!
//! Supported attributes: `transform`, `fill`, `stroke`, `stroke-width` and
//! `style`. Paint and transforms are inherited down the tree and baked into
//! each path, so the resulting shapes need no further context.

mod arc;
mod attributes;
mod path_data;

pub use arc::arc_to_curves;
pub use attributes::{parse_length, parse_points, parse_style, parse_transform};
pub use path_data::parse_path_data;

use crate::group::{Group, Shape};
use crate::path::Path;
use crate::transform::Transform;
use tracing::debug;
use vecforge_core::constants::{DEFAULT_STROKE_WIDTH, MAX_GROUP_DEPTH};
use vecforge_core::{Color, GeometryError, Point};

/// One element of a parsed SVG document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: SvgElement) -> Self {
        self.children.push(child);
        self
    }

    /// The value of the last attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Lowercased tag name without an `svg:` prefix.
    fn local_name(&self) -> String {
        let tag = self.tag.to_ascii_lowercase();
        match tag.strip_prefix("svg:") {
            Some(local) => local.to_string(),
            None => tag,
        }
    }
}

/// Paint and placement inherited from enclosing elements.
#[derive(Debug, Clone, Copy)]
struct Presentation {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
    transform: Transform,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: None,
            stroke_width: DEFAULT_STROKE_WIDTH,
            transform: Transform::IDENTITY,
        }
    }
}

impl Presentation {
    /// Applies the element's own attributes on top of the inherited ones.
    /// Declarations in `style` win over plain attributes.
    fn resolve(&self, element: &SvgElement, tag: &str) -> Result<Self, GeometryError> {
        let style = element.attr("style").map(parse_style).unwrap_or_default();
        let property = |name: &str| declared(&style, element, name);

        let mut resolved = *self;
        if let Some(value) = property("fill") {
            resolved.fill = resolve_paint(value, self.fill);
        }
        if let Some(value) = property("stroke") {
            resolved.stroke = resolve_paint(value, self.stroke);
        }
        if let Some(value) = property("stroke-width") {
            resolved.stroke_width = parse_length(value)
                .ok_or_else(|| invalid_attribute(tag, "stroke-width", value))?;
        }
        if let Some(value) = element.attr("transform") {
            let local =
                parse_transform(value).map_err(|_| invalid_attribute(tag, "transform", value))?;
            resolved.transform = self.transform.append(&local);
        }
        Ok(resolved)
    }

    fn apply(&self, path: Path) -> Path {
        path.transform(&self.transform)
            .with_fill(self.fill)
            .with_stroke(self.stroke)
            .with_stroke_width(Some(self.stroke_width * self.transform.x_scale()))
    }
}

/// A presentation property, preferring a `style` declaration.
fn declared<'a>(style: &'a [(String, String)], element: &'a SvgElement, name: &str) -> Option<&'a str> {
    style
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .or_else(|| element.attr(name))
}

fn resolve_paint(value: &str, inherited: Option<Color>) -> Option<Color> {
    if value.eq_ignore_ascii_case("inherit") {
        return inherited;
    }
    match Color::parse(value) {
        Ok(color) => color,
        Err(e) => {
            debug!("Keeping inherited paint for unsupported value {:?}: {}", value, e);
            inherited
        }
    }
}

fn invalid_attribute(element: &str, attribute: &str, value: &str) -> GeometryError {
    GeometryError::InvalidAttribute {
        element: element.to_string(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

/// A numeric attribute, 0 when missing.
fn number(element: &SvgElement, tag: &str, name: &str) -> Result<f64, GeometryError> {
    match element.attr(name) {
        None => Ok(0.0),
        Some(value) => parse_length(value).ok_or_else(|| invalid_attribute(tag, name, value)),
    }
}

/// Converts an element tree into a shape.
///
/// Returns `Ok(None)` for elements that do not produce geometry. Groups
/// nested deeper than [`MAX_GROUP_DEPTH`] fail with `NestingTooDeep`.
pub fn parse_element(element: &SvgElement) -> Result<Option<Shape>, GeometryError> {
    read_element(element, &Presentation::default(), 0)
}

fn read_element(
    element: &SvgElement,
    inherited: &Presentation,
    depth: usize,
) -> Result<Option<Shape>, GeometryError> {
    let tag = element.local_name();
    let path = match tag.as_str() {
        "svg" | "g" => {
            if depth >= MAX_GROUP_DEPTH {
                return Err(GeometryError::NestingTooDeep { depth: depth + 1 });
            }
            let presentation = inherited.resolve(element, &tag)?;
            let mut shapes = Vec::with_capacity(element.children.len());
            for child in &element.children {
                if let Some(shape) = read_element(child, &presentation, depth + 1)? {
                    shapes.push(shape);
                }
            }
            return Ok(Some(Shape::Group(Group::from_shapes(shapes))));
        }
        "path" => match element.attr("d") {
            Some(d) => parse_path_data(d)?,
            None => Path::new(),
        },
        "rect" => Path::rect(
            number(element, &tag, "x")?,
            number(element, &tag, "y")?,
            number(element, &tag, "width")?,
            number(element, &tag, "height")?,
        ),
        "ellipse" => {
            let (cx, cy) = (number(element, &tag, "cx")?, number(element, &tag, "cy")?);
            let (rx, ry) = (number(element, &tag, "rx")?, number(element, &tag, "ry")?);
            Path::ellipse(cx - rx, cy - ry, rx * 2.0, ry * 2.0)
        }
        "circle" => {
            let (cx, cy) = (number(element, &tag, "cx")?, number(element, &tag, "cy")?);
            let r = number(element, &tag, "r")?;
            Path::ellipse(cx - r, cy - r, r * 2.0, r * 2.0)
        }
        "line" => Path::line(
            Point::new(number(element, &tag, "x1")?, number(element, &tag, "y1")?),
            Point::new(number(element, &tag, "x2")?, number(element, &tag, "y2")?),
        ),
        "polygon" | "polyline" => {
            let points = match element.attr("points") {
                Some(value) => {
                    parse_points(value).map_err(|_| invalid_attribute(&tag, "points", value))?
                }
                None => Vec::new(),
            };
            Path::polyline(&points, tag == "polygon")
        }
        _ => {
            debug!("Skipping unsupported element <{}>", element.tag);
            return Ok(None);
        }
    };

    let presentation = inherited.resolve(element, &tag)?;
    Ok(Some(Shape::Path(presentation.apply(path))))
}
