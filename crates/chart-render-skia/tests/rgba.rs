// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{ChartStyle, ChartView, Color};
use chart_render_skia::{render_to_rgba8, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: u32, y: u32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut view = ChartView::new(ChartStyle::light()).with_size(320, 240);
    view.set_data(&[1, 4, 2]).unwrap();

    let (px, w, h, stride) = render_to_rgba8(&mut view, &RenderOptions::default()).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert!(!view.needs_redraw());

    // Top-right corner is background (white in the light style).
    assert_eq!(pixel(&px, stride, w - 1, 0), [255, 255, 255, 255]);

    // The y axis runs down the left edge of the bounds.
    let b = view.bounds();
    let axis = pixel(&px, stride, b.left as u32, ((b.top + b.bottom) / 2.0) as u32);
    assert_eq!(axis, [0, 0, 0, 255]);
}

#[test]
fn background_override_applies() {
    let mut view = ChartView::default().with_size(64, 64);
    let opts = RenderOptions { background: Some(Color::from_argb(255, 10, 20, 30)), ..RenderOptions::default() };
    let (px, w, _, stride) = render_to_rgba8(&mut view, &opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, w - 1, 0), [10, 20, 30, 255]);
}
