// File: crates/chart-core/src/view.rs
// Summary: Chart widget state: series, size, padding and cached geometry, with redraw requests.

use tracing::{debug, warn};

use crate::error::ChartResult;
use crate::geometry::{PointF, ViewBounds};
use crate::layout::ChartGeometry;
use crate::render::{draw_chart, DrawTarget};
use crate::scale::Scale;
use crate::series::Series;
use crate::theme::ChartStyle;
use crate::types::{Insets, DEFAULT_DATA};

/// A line chart widget.
///
/// Every mutation rebuilds the geometry and raises the redraw flag; `draw`
/// clears it. All methods run on the thread that owns the widget.
#[derive(Clone, Debug)]
pub struct ChartView {
    style: ChartStyle,
    width: u32,
    height: u32,
    padding: Insets,
    series: Series,
    geometry: ChartGeometry,
    needs_redraw: bool,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new(ChartStyle::default())
    }
}

impl ChartView {
    pub fn new(style: ChartStyle) -> Self {
        let padding = Insets::default();
        let bounds = ViewBounds::from_view(0, 0, &padding);
        let series = Series::try_new(DEFAULT_DATA.to_vec()).unwrap_or_default();
        let geometry = ChartGeometry::build(series.values(), bounds, style.axis_width);
        Self { style, width: 0, height: 0, padding, series, geometry, needs_redraw: true }
    }

    /// Builder-style size setter.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.resize(width, height);
        self
    }

    /// Replace the series. Empty input is rejected and leaves the widget unchanged.
    pub fn set_data(&mut self, values: &[i32]) -> ChartResult<()> {
        let series = Series::try_new(values).inspect_err(|e| warn!(error = %e, "set_data rejected"))?;
        debug!(count = series.len(), "chart data replaced");
        self.series = series;
        self.invalidate();
        Ok(())
    }

    /// Forward a size change from the host.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        debug!(width, height, "chart resized");
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    pub fn set_padding(&mut self, padding: Insets) {
        if padding == self.padding {
            return;
        }
        self.padding = padding;
        self.invalidate();
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
        self.invalidate();
    }

    /// Render the current frame and clear the redraw request.
    pub fn draw<T: DrawTarget + ?Sized>(&mut self, target: &mut T) {
        draw_chart(target, &self.geometry, &self.style);
        self.needs_redraw = false;
    }

    pub fn data(&self) -> &[i32] { self.series.values() }
    pub fn style(&self) -> &ChartStyle { &self.style }
    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
    pub fn padding(&self) -> Insets { self.padding }
    pub fn geometry(&self) -> &ChartGeometry { &self.geometry }
    pub fn points(&self) -> &[PointF] { &self.geometry.points }
    pub fn bounds(&self) -> ViewBounds { self.geometry.bounds }
    pub fn scale(&self) -> Scale { self.geometry.scale }
    pub fn needs_redraw(&self) -> bool { self.needs_redraw }

    fn invalidate(&mut self) {
        let bounds = ViewBounds::from_view(self.width, self.height, &self.padding);
        self.geometry = ChartGeometry::build(self.series.values(), bounds, self.style.axis_width);
        self.needs_redraw = true;
    }
}
