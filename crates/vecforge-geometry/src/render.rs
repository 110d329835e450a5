//! Render replay.
//!
//! Paths do not draw themselves. A host renderer implements [`PathSink`]
//! and receives the drawing primitives in element order, then paints with
//! the colors from [`RenderStyle`]. [`LyonSink`] feeds a `lyon` path
//! builder so the host can tessellate or hit-test with lyon.

use crate::element::PathElement;
use crate::group::Shape;
use crate::path::Path;
use lyon::math::point;
use tracing::trace;
use vecforge_core::Point;

/// The four drawing primitives a path is replayed as.
pub trait PathSink {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn close(&mut self);
}

/// Feeds every element of `path` to `sink`, in order.
pub fn replay<S: PathSink + ?Sized>(path: &Path, sink: &mut S) {
    for el in path.elements() {
        match *el {
            PathElement::MoveTo { point } => sink.move_to(point.x, point.y),
            PathElement::LineTo { point } => sink.line_to(point.x, point.y),
            PathElement::CurveTo {
                ctrl1,
                ctrl2,
                point,
            } => sink.curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, point.x, point.y),
            PathElement::Close => sink.close(),
        }
    }
}

/// Paint for one path, as CSS color strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderStyle {
    pub fill: Option<String>,
    /// Color and width. Only present for a positive stroke width.
    pub stroke: Option<(String, f64)>,
}

impl RenderStyle {
    pub fn for_path(path: &Path) -> Self {
        let stroke = match (path.stroke(), path.stroke_width()) {
            (Some(color), Some(width)) if width > 0.0 => Some((color.to_css(), width)),
            _ => None,
        };
        RenderStyle {
            fill: path.fill().map(|c| c.to_css()),
            stroke,
        }
    }

    /// True when nothing would be painted.
    pub fn is_invisible(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none()
    }
}

/// A renderer that paints whole paths.
pub trait Canvas {
    fn draw_path(&mut self, path: &Path, style: &RenderStyle);
}

/// Draws every path of `shape` onto `canvas`, depth first.
pub fn draw<C: Canvas + ?Sized>(shape: &Shape, canvas: &mut C) {
    match shape {
        Shape::Path(p) => {
            let style = RenderStyle::for_path(p);
            if style.is_invisible() {
                trace!("Skipping unpainted path with {} elements", p.len());
                return;
            }
            canvas.draw_path(p, &style);
        }
        Shape::Group(g) => {
            for child in g.shapes() {
                draw(child, canvas);
            }
        }
    }
}

/// Builds a `lyon` path from replayed primitives.
///
/// Drawing without a preceding `move_to` starts a sub-path at the current
/// point, and a `close` returns the current point to the sub-path start.
pub struct LyonSink {
    builder: lyon::path::path::Builder,
    open: bool,
    start: Point,
    current: Point,
}

impl Default for LyonSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LyonSink {
    pub fn new() -> Self {
        LyonSink {
            builder: lyon::path::Path::builder(),
            open: false,
            start: Point::ZERO,
            current: Point::ZERO,
        }
    }

    fn ensure_open(&mut self) {
        if !self.open {
            self.builder
                .begin(point(self.current.x as f32, self.current.y as f32));
            self.start = self.current;
            self.open = true;
        }
    }

    pub fn finish(mut self) -> lyon::path::Path {
        if self.open {
            self.builder.end(false);
        }
        self.builder.build()
    }
}

impl PathSink for LyonSink {
    fn move_to(&mut self, x: f64, y: f64) {
        if self.open {
            self.builder.end(false);
            self.open = false;
        }
        self.current = Point::new(x, y);
        self.ensure_open();
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ensure_open();
        self.builder.line_to(point(x as f32, y as f32));
        self.current = Point::new(x, y);
    }

    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ensure_open();
        self.builder.cubic_bezier_to(
            point(c1x as f32, c1y as f32),
            point(c2x as f32, c2y as f32),
            point(x as f32, y as f32),
        );
        self.current = Point::new(x, y);
    }

    fn close(&mut self) {
        if self.open {
            self.builder.end(true);
            self.open = false;
            self.current = self.start;
        }
    }
}

/// Converts `path` to a `lyon` path. Paint is not carried over.
pub fn to_lyon_path(path: &Path) -> lyon::path::Path {
    let mut sink = LyonSink::new();
    replay(path, &mut sink);
    sink.finish()
}
