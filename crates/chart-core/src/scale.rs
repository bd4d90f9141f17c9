// File: crates/chart-core/src/scale.rs
// Summary: Linear value -> pixel transform for a single series inside view bounds.

use crate::geometry::{PointF, ViewBounds};
use crate::series::min_max;

/// Linear mapping of series index/value into pixel space.
///
/// Vertically, `min` sits `bias` pixels above `bounds.bottom` and `max` sits
/// `bias` pixels below `bounds.top`. Horizontally the width is split into
/// `count + 1` cells so neither end point touches an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub min: f32,
    pub max: f32,
    /// `max - min`, or 1 when every value is equal.
    pub range: f32,
    /// Pixels per value unit.
    pub unit_height: f32,
    /// Horizontal distance between consecutive points.
    pub cell_width: f32,
    pub bias: f32,
    left: f32,
    bottom: f32,
}

impl Scale {
    /// Derive the scale for `values` drawn inside `bounds`.
    /// An empty slice yields a unit range around zero.
    pub fn compute(values: &[i32], bounds: &ViewBounds, bias: f32) -> Self {
        let (min, max) = min_max(values).map(|(lo, hi)| (lo as f32, hi as f32)).unwrap_or((0.0, 0.0));
        let mut range = max - min;
        if range == 0.0 {
            range = 1.0;
        }
        let unit_height = (bounds.height() - bias * 2.0) / range;
        let cell_width = bounds.width() / (values.len() + 1) as f32;
        Self { min, max, range, unit_height, cell_width, bias, left: bounds.left, bottom: bounds.bottom }
    }

    #[inline]
    pub fn to_px_x(&self, index: usize) -> f32 {
        self.left + (index + 1) as f32 * self.cell_width
    }

    #[inline]
    pub fn to_px_y(&self, value: i32) -> f32 {
        self.bottom - (value as f32 - self.min) * self.unit_height - self.bias
    }

    #[inline]
    pub fn to_px(&self, index: usize, value: i32) -> PointF {
        PointF::new(self.to_px_x(index), self.to_px_y(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_unit_range() {
        let b = ViewBounds::from_ltrb(0.0, 0.0, 100.0, 300.0);
        let s = Scale::compute(&[], &b, 100.0);
        assert_eq!(s.range, 1.0);
        assert_eq!(s.cell_width, 100.0);
        assert!(s.unit_height.is_finite());
    }
}
