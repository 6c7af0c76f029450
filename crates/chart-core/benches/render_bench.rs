use swell_chart_core::{RenderOptions, WaveChart};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let chart = WaveChart::barcelona_week().expect("dataset");
    let mut group = c.benchmark_group("render_week");

    group.bench_function("layout", |b| {
        let opts = RenderOptions::default();
        b.iter(|| black_box(chart.layout(&opts)));
    });
    group.bench_function("svg", |b| {
        let opts = RenderOptions::default();
        b.iter(|| black_box(chart.render_to_svg(&opts)));
    });
    group.bench_function("png_bytes", |b| {
        let mut opts = RenderOptions::default();
        opts.draw_labels = false;
        b.iter(|| black_box(chart.render_to_png_bytes(&opts).expect("render")));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
