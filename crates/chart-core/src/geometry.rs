// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, view bounds, arrowheads).

use crate::types::{Insets, ARROW, BIAS_HORIZONTAL, BIAS_VERTICAL};

/// A point in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drawable rectangle of the chart after padding and margins.
/// Contract: `right >= left` and `bottom >= top`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ViewBounds {
    /// Build bounds from raw edges, collapsing an inverted rectangle to zero size.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right: right.max(left), bottom: bottom.max(top) }
    }

    /// Bounds for a view of `width` x `height` pixels with the given padding.
    ///
    /// The left edge is pushed right by [`BIAS_HORIZONTAL`] and the bottom edge
    /// up by [`BIAS_VERTICAL`] so the axes have room for the value labels.
    pub fn from_view(width: u32, height: u32, padding: &Insets) -> Self {
        let left = padding.left as f32 + BIAS_HORIZONTAL;
        let right = width as f32 - padding.right as f32;
        let top = padding.top as f32;
        let bottom = height as f32 - padding.bottom as f32 - BIAS_VERTICAL;
        Self::from_ltrb(left, top, right, bottom)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// A filled triangle marking the end of an axis. `vertices[0]` is the tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    pub vertices: [PointF; 3],
}

impl ArrowHead {
    /// Arrow at the right end of the x axis, pointing right.
    pub fn x_axis(bounds: &ViewBounds) -> Self {
        let half = ARROW / 2.0;
        Self {
            vertices: [
                PointF::new(bounds.right, bounds.bottom),
                PointF::new(bounds.right - ARROW, bounds.bottom - half),
                PointF::new(bounds.right - ARROW, bounds.bottom + half),
            ],
        }
    }

    /// Arrow at the top end of the y axis, pointing up.
    pub fn y_axis(bounds: &ViewBounds) -> Self {
        let half = ARROW / 2.0;
        Self {
            vertices: [
                PointF::new(bounds.left, bounds.top),
                PointF::new(bounds.left - half, bounds.top + ARROW),
                PointF::new(bounds.left + half, bounds.top + ARROW),
            ],
        }
    }

    pub fn tip(&self) -> PointF { self.vertices[0] }

    /// Closed outline: the three vertices followed by the first one again.
    pub fn outline(&self) -> [PointF; 4] {
        let [a, b, c] = self.vertices;
        [a, b, c, a]
    }
}

/// A straight line between two pixel points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: PointF,
    pub to: PointF,
}

impl Segment {
    pub const fn new(from: PointF, to: PointF) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_apply_padding_and_margins() {
        let b = ViewBounds::from_view(500, 400, &Insets::new(10, 5, 8, 12));
        assert_eq!(b.left, 30.0);
        assert_eq!(b.right, 495.0);
        assert_eq!(b.top, 8.0);
        assert_eq!(b.bottom, 368.0);
    }

    #[test]
    fn bounds_never_invert() {
        let b = ViewBounds::from_view(0, 0, &Insets::default());
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
    }
}
