// File: crates/chart-core/tests/scale.rs
// Purpose: Validate value -> pixel scaling, degenerate ranges and horizontal spacing.

use chart_core::{Scale, ViewBounds};

#[test]
fn constant_series_defaults_to_unit_range() {
    let bounds = ViewBounds::from_ltrb(0.0, 0.0, 300.0, 400.0);
    let s = Scale::compute(&[5, 5, 5], &bounds, 100.0);
    assert_eq!(s.min, 5.0);
    assert_eq!(s.max, 5.0);
    assert_eq!(s.range, 1.0);
    assert_eq!(s.unit_height, 200.0);
    // Every point sits on the lower bias line.
    assert_eq!(s.to_px_y(5), 300.0);
}

#[test]
fn highest_value_maps_to_smallest_y() {
    let data = [0, 10, 5, 20, 1];
    let bounds = ViewBounds::from_ltrb(0.0, 0.0, 600.0, 400.0);
    let s = Scale::compute(&data, &bounds, 100.0);
    assert_eq!(s.unit_height, 10.0);

    let ys: Vec<f32> = data.iter().map(|&v| s.to_px_y(v)).collect();
    let top = ys.iter().cloned().fold(f32::INFINITY, f32::min);
    let bottom = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(top, s.to_px_y(20));
    assert_eq!(bottom, s.to_px_y(0));
    assert_eq!(s.to_px_y(20), 100.0);
    assert_eq!(s.to_px_y(0), 300.0);
}

#[test]
fn points_are_evenly_spaced_across_width() {
    let bounds = ViewBounds::from_ltrb(20.0, 0.0, 620.0, 400.0);
    let n = 5;
    let s = Scale::compute(&[1, 2, 3, 4, 5], &bounds, 100.0);
    let expected = bounds.width() / (n as f32 + 1.0);
    assert!((s.cell_width - expected).abs() < 1e-4);

    let xs: Vec<f32> = (0..n).map(|i| s.to_px_x(i)).collect();
    assert!((xs[0] - (bounds.left + expected)).abs() < 1e-4);
    for w in xs.windows(2) {
        assert!((w[1] - w[0] - expected).abs() < 1e-4);
    }
    // Last point keeps one cell of clearance from the right edge.
    assert!((bounds.right - xs[n - 1] - expected).abs() < 1e-4);
}

#[test]
fn negative_values_scale_linearly() {
    let bounds = ViewBounds::from_ltrb(0.0, 0.0, 100.0, 400.0);
    let s = Scale::compute(&[-10, 10], &bounds, 100.0);
    assert_eq!(s.to_px_y(-10), 300.0);
    assert_eq!(s.to_px_y(0), 200.0);
    assert_eq!(s.to_px_y(10), 100.0);
}
