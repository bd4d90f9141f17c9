// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{ChartStyle, ChartView};
use chart_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

#[test]
fn render_smoke_png() {
    let mut view = ChartView::new(ChartStyle::light()).with_size(640, 480);
    view.set_data(&[0, 10, 5, 20, 1]).unwrap();

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&mut view, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&mut view, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (640, 480));
}

#[test]
fn zero_sized_view_is_an_error() {
    let mut view = ChartView::default();
    assert!(render_to_png_bytes(&mut view, &RenderOptions::default()).is_err());
}
