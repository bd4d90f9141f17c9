// File: crates/chart-core/tests/render.rs
// Purpose: Validate draw call sequence emitted by the renderer.

use chart_core::{ChartStyle, ChartView, DrawCommand, DrawList, PaintStyle};

#[test]
fn emits_expected_primitives() {
    let data = [3, 1, 4, 1, 5];
    let mut view = ChartView::new(ChartStyle::light()).with_size(800, 600);
    view.set_data(&data).unwrap();

    let mut list = DrawList::new();
    view.draw(&mut list);

    let n = data.len();
    // 2 axes + (n - 1) connecting segments.
    assert_eq!(list.lines().count(), 2 + n - 1);
    assert_eq!(list.polygons().count(), 2);
    assert_eq!(list.circles().count(), n);
    assert_eq!(list.texts().count(), n);
}

#[test]
fn axes_and_arrows_come_first() {
    let mut view = ChartView::default().with_size(400, 400);
    view.set_data(&[1, 2]).unwrap();
    let mut list = DrawList::new();
    view.draw(&mut list);

    assert!(matches!(list.commands[0], DrawCommand::Line { .. }));
    assert!(matches!(list.commands[1], DrawCommand::Line { .. }));
    match &list.commands[2] {
        DrawCommand::Polygon { points, paint } => {
            assert_eq!(points.len(), 4);
            assert_eq!(points.first(), points.last());
            assert_eq!(paint.style, PaintStyle::FillAndStroke);
        }
        other => panic!("expected arrow polygon, got {other:?}"),
    }
}

#[test]
fn labels_use_series_paint_and_raw_values() {
    let style = ChartStyle::light();
    let mut view = ChartView::new(style).with_size(400, 400);
    view.set_data(&[12, -4]).unwrap();
    let mut list = DrawList::new();
    view.draw(&mut list);

    let texts: Vec<_> = list
        .texts()
        .map(|c| match c {
            DrawCommand::Text { text, paint, .. } => (text.clone(), paint.color, paint.text_size),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        texts,
        vec![
            ("12".to_string(), style.series, style.label_size),
            ("-4".to_string(), style.series, style.label_size),
        ]
    );
}
