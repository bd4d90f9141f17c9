// File: crates/chart-core/src/theme.rs
// Summary: Chart style: colors, stroke widths and label sizes, with light/dark presets.

use crate::error::{ChartError, ChartResult};

/// 8-bit ARGB color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const DARK_GRAY: Color = Color::from_argb(255, 0x44, 0x44, 0x44);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

/// Axis stroke width in density-independent pixels.
const AXIS_WIDTH_DP: f32 = 3.0;
/// Series stroke width in density-independent pixels.
const SERIES_WIDTH_DP: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub name: &'static str,
    pub background: Color,
    /// Axes and data point circles.
    pub axis: Color,
    pub axis_width: f32,
    /// Arrowhead fill; stroked with `arrow_width`.
    pub arrow: Color,
    pub arrow_width: f32,
    /// Connecting segments and value labels.
    pub series: Color,
    pub series_width: f32,
    pub dot_radius: f32,
    pub label_size: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::light()
    }
}

impl ChartStyle {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis: Color::BLACK,
            axis_width: AXIS_WIDTH_DP,
            arrow: Color::BLACK,
            arrow_width: 2.0,
            series: Color::DARK_GRAY,
            series_width: SERIES_WIDTH_DP,
            dot_radius: 4.0,
            label_size: 30.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis: Color::from_argb(255, 180, 180, 190),
            arrow: Color::from_argb(255, 180, 180, 190),
            series: Color::from_argb(255, 64, 160, 255),
            ..Self::light()
        }
    }

    /// Scale the dp-based stroke widths for a display with `density` pixels per dp.
    pub fn for_density(mut self, density: f32) -> Self {
        let d = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        self.axis_width = AXIS_WIDTH_DP * d;
        self.series_width = SERIES_WIDTH_DP * d;
        self
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<ChartStyle> {
    vec![ChartStyle::light(), ChartStyle::dark()]
}

/// Find a preset by its `name` (case-insensitive).
pub fn find(name: &str) -> ChartResult<ChartStyle> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::UnknownTheme(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_scales_dp_widths_only() {
        let s = ChartStyle::light().for_density(2.0);
        assert_eq!(s.axis_width, 6.0);
        assert_eq!(s.series_width, 2.0);
        assert_eq!(s.arrow_width, 2.0);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("DARK").unwrap().name, "dark");
        assert!(matches!(find("neon"), Err(ChartError::UnknownTheme(_))));
    }
}
