use chart_core::{ChartGeometry, ChartView, DataSource, DrawList, RandomSource, ViewBounds};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let bounds = ViewBounds::from_ltrb(20.0, 0.0, 1004.0, 620.0);
    for &n in &[5usize, 1_000usize, 50_000usize] {
        let data = RandomSource::seeded(42).with_shape(n, 0..1_000).next_series();
        group.bench_function(format!("geometry_{n}"), |b| {
            b.iter(|| black_box(ChartGeometry::build(black_box(&data), bounds, 3.0)));
        });
    }
    group.finish();
}

fn bench_draw_list(c: &mut Criterion) {
    let data = RandomSource::seeded(42).with_shape(1_000, 0..1_000).next_series();
    let mut view = ChartView::default().with_size(1024, 640);
    view.set_data(&data).expect("non-empty series");
    c.bench_function("draw_list_1000", |b| {
        b.iter(|| {
            let mut list = DrawList::new();
            view.draw(&mut list);
            black_box(list.commands.len())
        });
    });
}

criterion_group!(benches, bench_layout, bench_draw_list);
criterion_main!(benches);
