// File: crates/chart-core/src/render.rs
// Summary: Backend-neutral draw target trait, an in-memory command recorder, and the chart renderer.

use crate::geometry::PointF;
use crate::layout::ChartGeometry;
use crate::theme::{ChartStyle, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    FillAndStroke,
}

/// Minimal paint description shared by every primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    /// Only used by text.
    pub text_size: f32,
}

impl Paint {
    pub fn stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke, stroke_width: width, text_size: 0.0 }
    }

    pub fn fill_and_stroke(color: Color, width: f32) -> Self {
        Self { color, style: PaintStyle::FillAndStroke, stroke_width: width, text_size: 0.0 }
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }
}

/// Sink for the drawing primitives the chart uses.
pub trait DrawTarget {
    fn line(&mut self, from: PointF, to: PointF, paint: &Paint);
    fn circle(&mut self, center: PointF, radius: f32, paint: &Paint);
    /// Closed polygon through `points`, filled with the even-odd rule.
    fn polygon(&mut self, points: &[PointF], paint: &Paint);
    /// Text whose left baseline sits at `at`.
    fn text(&mut self, text: &str, at: PointF, paint: &Paint);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: PointF, to: PointF, paint: Paint },
    Circle { center: PointF, radius: f32, paint: Paint },
    Polygon { points: Vec<PointF>, paint: Paint },
    Text { text: String, at: PointF, paint: Paint },
}

/// Records draw calls in order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Text { .. }))
    }
}

impl DrawTarget for DrawList {
    fn line(&mut self, from: PointF, to: PointF, paint: &Paint) {
        self.commands.push(DrawCommand::Line { from, to, paint: *paint });
    }
    fn circle(&mut self, center: PointF, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle { center, radius, paint: *paint });
    }
    fn polygon(&mut self, points: &[PointF], paint: &Paint) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), paint: *paint });
    }
    fn text(&mut self, text: &str, at: PointF, paint: &Paint) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, paint: *paint });
    }
}

/// Issue the draw calls for one frame.
///
/// Order: axes, arrowheads, point circles, then for each point its label and
/// the segment from the previous point.
pub fn draw_chart<T: DrawTarget + ?Sized>(target: &mut T, geometry: &ChartGeometry, style: &ChartStyle) {
    let axis_paint = Paint::stroke(style.axis, style.axis_width);
    let arrow_paint = Paint::fill_and_stroke(style.arrow, style.arrow_width);
    let series_paint = Paint::stroke(style.series, style.series_width).with_text_size(style.label_size);

    target.line(geometry.x_axis.from, geometry.x_axis.to, &axis_paint);
    target.line(geometry.y_axis.from, geometry.y_axis.to, &axis_paint);

    target.polygon(&geometry.x_arrow.outline(), &arrow_paint);
    target.polygon(&geometry.y_arrow.outline(), &arrow_paint);

    for p in &geometry.points {
        target.circle(*p, style.dot_radius, &axis_paint);
    }

    for (i, (p, label)) in geometry.points.iter().zip(&geometry.labels).enumerate() {
        target.text(&label.text, label.anchor, &series_paint);
        if i == 0 {
            continue;
        }
        target.line(geometry.points[i - 1], *p, &series_paint);
    }
}
