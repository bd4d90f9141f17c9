// File: crates/chart-core/src/layout.rs
// Summary: Geometry builder: turns a series and view bounds into axis, arrow, point and label geometry.

use tracing::trace;

use crate::geometry::{ArrowHead, PointF, Segment, ViewBounds};
use crate::scale::Scale;
use crate::types::{ARROW, LABEL_OFFSET, VERTICAL_DOT_BIAS};

/// Value text anchored at its left baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: PointF,
}

/// Everything the renderer needs for one frame, in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub bounds: ViewBounds,
    pub scale: Scale,
    pub x_axis: Segment,
    pub y_axis: Segment,
    pub x_arrow: ArrowHead,
    pub y_arrow: ArrowHead,
    pub points: Vec<PointF>,
    pub labels: Vec<Label>,
}

impl ChartGeometry {
    /// Lay out `values` inside `bounds`.
    ///
    /// `axis_overhang` extends the x axis left past the y axis so the two
    /// strokes meet without a notch; callers pass the axis stroke width.
    pub fn build(values: &[i32], bounds: ViewBounds, axis_overhang: f32) -> Self {
        let scale = Scale::compute(values, &bounds, VERTICAL_DOT_BIAS);

        let x_axis = Segment::new(
            PointF::new(bounds.left - axis_overhang, bounds.bottom),
            PointF::new(bounds.right - ARROW, bounds.bottom),
        );
        let y_axis = Segment::new(
            PointF::new(bounds.left, bounds.bottom),
            PointF::new(bounds.left, bounds.top + ARROW),
        );

        let points: Vec<PointF> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| scale.to_px(i, v))
            .collect();
        let labels = values
            .iter()
            .zip(&points)
            .map(|(v, p)| Label { text: v.to_string(), anchor: PointF::new(p.x, p.y - LABEL_OFFSET) })
            .collect();

        trace!(count = points.len(), min = scale.min, max = scale.max, "chart geometry rebuilt");

        Self {
            bounds,
            scale,
            x_axis,
            y_axis,
            x_arrow: ArrowHead::x_axis(&bounds),
            y_arrow: ArrowHead::y_axis(&bounds),
            points,
            labels,
        }
    }

    /// Straight segments joining consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}
