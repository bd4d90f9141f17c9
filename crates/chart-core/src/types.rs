// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (layout margins, arrow size, paddings).

/// Horizontal margin between the left padding edge and the y axis, in pixels.
pub const BIAS_HORIZONTAL: f32 = 20.0;
/// Vertical margin between the bottom padding edge and the x axis, in pixels.
pub const BIAS_VERTICAL: f32 = 20.0;
/// Length of an arrowhead along its axis; the base is the same width.
pub const ARROW: f32 = 30.0;
/// Space kept free above the highest and below the lowest data point.
pub const VERTICAL_DOT_BIAS: f32 = 100.0;
/// Distance between a data point and the baseline of its value label.
pub const LABEL_OFFSET: f32 = 50.0;
/// Series shown by a freshly constructed widget.
pub const DEFAULT_DATA: [i32; 6] = [0; 6];

/// View padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}
