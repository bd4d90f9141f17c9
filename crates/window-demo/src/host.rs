// File: crates/window-demo/src/host.rs
// Summary: Host screen state: a chart above a button strip; clicking the button reveals the chart and feeds it new random data.

use anyhow::Result;
use chart_core::{ChartStyle, ChartView, DataSource};
use chart_render_skia::{to_skia_color, SkiaCanvas};
use skia_safe as skia;
use tracing::{debug, info};

/// Height of the button strip under the chart, in pixels.
pub const BUTTON_STRIP: u32 = 72;
const BUTTON_W: f32 = 200.0;
const BUTTON_H: f32 = 44.0;
const BUTTON_LABEL: &str = "New data";

pub struct HostScreen {
    view: ChartView,
    source: Box<dyn DataSource>,
    chart_visible: bool,
    dirty: bool,
    width: u32,
    height: u32,
}

impl HostScreen {
    /// The chart starts hidden until the button is clicked.
    pub fn new(style: ChartStyle, source: Box<dyn DataSource>) -> Self {
        Self { view: ChartView::new(style), source, chart_visible: false, dirty: true, width: 0, height: 0 }
    }

    pub fn view(&self) -> &ChartView { &self.view }
    pub fn chart_visible(&self) -> bool { self.chart_visible }
    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }

    /// Window shown or focused again.
    pub fn on_resume(&mut self) {
        self.setup_random_data();
    }

    pub fn on_button_click(&mut self) {
        self.chart_visible = true;
        self.dirty = true;
        self.setup_random_data();
    }

    /// Handle a pointer release at window coordinates; returns true when it hit the button.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> bool {
        let r = self.button_rect();
        let (x, y) = (x as f32, y as f32);
        let hit = x >= r.left && x < r.right && y >= r.top && y < r.bottom;
        if hit {
            self.on_button_click();
        }
        hit
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.dirty = true;
        self.view.resize(width, height.saturating_sub(BUTTON_STRIP));
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty || (self.chart_visible && self.view.needs_redraw())
    }

    pub fn button_rect(&self) -> skia::Rect {
        let strip_top = self.height.saturating_sub(BUTTON_STRIP) as f32;
        let cx = self.width as f32 / 2.0;
        let cy = strip_top + BUTTON_STRIP as f32 / 2.0;
        skia::Rect::from_ltrb(cx - BUTTON_W / 2.0, cy - BUTTON_H / 2.0, cx + BUTTON_W / 2.0, cy + BUTTON_H / 2.0)
    }

    fn setup_random_data(&mut self) {
        let data = self.source.next_series();
        match self.view.set_data(&data) {
            Ok(()) => info!(?data, "random data set"),
            Err(e) => debug!(error = %e, "data source produced no values"),
        }
    }

    /// Render the whole screen to an unpremultiplied RGBA8 buffer of the window size.
    pub fn render_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.width.max(1), self.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let style = *self.view.style();
        let button = self.button_rect();
        {
            let canvas = surface.canvas();
            canvas.clear(to_skia_color(style.background));
            if self.chart_visible {
                let mut target = SkiaCanvas::new(canvas);
                self.view.draw(&mut target);
            }
            draw_button(canvas, button, &style);
        }
        self.dirty = false;

        let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        anyhow::ensure!(surface.read_pixels(&info, &mut pixels, stride, (0, 0)), "reading surface pixels failed");
        Ok(pixels)
    }
}

fn draw_button(canvas: &skia::Canvas, rect: skia::Rect, style: &ChartStyle) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(to_skia_color(style.series));
    canvas.draw_round_rect(rect, 6.0, 6.0, &fill);

    let mut text = skia::Paint::default();
    text.set_anti_alias(true);
    text.set_color(to_skia_color(style.background));
    let font = skia::FontMgr::default()
        .legacy_make_typeface(None::<&str>, skia::FontStyle::bold())
        .map(|tf| skia::Font::from_typeface(tf, 20.0))
        .unwrap_or_default();
    let (advance, _) = font.measure_str(BUTTON_LABEL, Some(&text));
    canvas.draw_str(BUTTON_LABEL, (rect.center_x() - advance / 2.0, rect.center_y() + 7.0), &font, &text);
}
