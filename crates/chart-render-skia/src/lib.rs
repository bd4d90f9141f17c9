// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer: DrawTarget over a Skia canvas plus headless PNG / RGBA8 rendering of a ChartView.

use anyhow::{Context, Result};
use chart_core::{ChartView, Color, DrawTarget, Paint, PaintStyle, PointF};
use skia_safe as skia;
use tracing::debug;

/// Backend options that are not part of the chart style.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Overrides the style background when set.
    pub background: Option<Color>,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { background: None, anti_alias: true }
    }
}

#[inline]
pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Maps chart draw calls onto a borrowed Skia canvas.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    typeface: Option<skia::Typeface>,
    anti_alias: bool,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal());
        Self { canvas, typeface, anti_alias: true }
    }

    pub fn with_anti_alias(mut self, on: bool) -> Self {
        self.anti_alias = on;
        self
    }

    fn paint(&self, p: &Paint) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.anti_alias);
        paint.set_color(to_skia_color(p.color));
        paint.set_stroke_width(p.stroke_width);
        paint.set_style(match p.style {
            PaintStyle::Stroke => skia::paint::Style::Stroke,
            PaintStyle::Fill => skia::paint::Style::Fill,
            PaintStyle::FillAndStroke => skia::paint::Style::StrokeAndFill,
        });
        paint
    }

    fn font(&self, size: f32) -> skia::Font {
        let mut font = match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => skia::Font::default(),
        };
        font.set_size(size.max(1.0));
        font
    }
}

impl DrawTarget for SkiaCanvas<'_> {
    fn line(&mut self, from: PointF, to: PointF, paint: &Paint) {
        self.canvas.draw_line((from.x, from.y), (to.x, to.y), &self.paint(paint));
    }

    fn circle(&mut self, center: PointF, radius: f32, paint: &Paint) {
        self.canvas.draw_circle((center.x, center.y), radius, &self.paint(paint));
    }

    fn polygon(&mut self, points: &[PointF], paint: &Paint) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.set_fill_type(skia::PathFillType::EvenOdd);
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        path.close();
        self.canvas.draw_path(&path, &self.paint(paint));
    }

    fn text(&mut self, text: &str, at: PointF, paint: &Paint) {
        // Glyphs are filled regardless of the paint's stroke style.
        let mut p = self.paint(paint);
        p.set_style(skia::paint::Style::Fill);
        self.canvas.draw_str(text, (at.x, at.y), &self.font(paint.text_size), &p);
    }
}

/// Draw `view` onto a fresh raster surface of the view's size.
fn render_surface(view: &mut ChartView, opts: &RenderOptions) -> Result<skia::Surface> {
    let (w, h) = view.size();
    anyhow::ensure!(w > 0 && h > 0, "chart view has no size ({w}x{h})");
    let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

    let background = opts.background.unwrap_or(view.style().background);
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(background));
        let mut target = SkiaCanvas::new(canvas).with_anti_alias(opts.anti_alias);
        view.draw(&mut target);
    }
    debug!(width = w, height = h, points = view.points().len(), "rendered chart surface");
    Ok(surface)
}

/// Render to in-memory PNG bytes.
pub fn render_to_png_bytes(view: &mut ChartView, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = render_surface(view, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    view: &mut ChartView,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(view, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Render to an unpremultiplied RGBA8 buffer.
/// Returns `(pixels, width, height, row_stride_bytes)`.
pub fn render_to_rgba8(view: &mut ChartView, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = render_surface(view, opts)?;
    let (w, h) = view.size();
    let info = skia::ImageInfo::new(
        (w as i32, h as i32),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    anyhow::ensure!(
        surface.read_pixels(&info, &mut pixels, stride, (0, 0)),
        "reading surface pixels failed"
    );
    Ok((pixels, w, h, stride))
}
