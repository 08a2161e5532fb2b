use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::{BarDatum, BarId, BarMetrics, ContentScale, Viewport};
use barchart_rs::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn generated_bars(count: i32) -> Vec<BarDatum> {
    (0..count)
        .map(|i| {
            let value = f64::from((i * 37) % 1_000);
            BarDatum::new(BarId(i), format!("b{i}"), value, format!("{value}"))
        })
        .collect()
}

fn bench_bar_height_10k(c: &mut Criterion) {
    let scale = ContentScale::for_chart_height(480.0, 1_000.0).expect("valid scale");
    let values: Vec<f64> = (0..10_000).map(|i| f64::from(i % 1_000)).collect();

    c.bench_function("bar_height_10k", |b| {
        b.iter(|| {
            let total: f64 = values
                .iter()
                .map(|value| BarMetrics::bar_height(black_box(scale.per_unit()), *value))
                .sum();
            black_box(total)
        })
    });
}

fn bench_render_frame_1k_bars(c: &mut Criterion) {
    let config = BarChartConfig::new(Viewport::new(1600, 480), 1_000.0, "1000")
        .with_bars(generated_bars(1_000))
        .with_selected_id(BarId(10));
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");

    c.bench_function("render_frame_1k_bars", |b| {
        b.iter(|| {
            let _ = chart
                .build_render_frame()
                .expect("frame build should succeed");
        })
    });
}

fn bench_animation_step_1k_bars(c: &mut Criterion) {
    let config = BarChartConfig::new(Viewport::new(1600, 480), 1_000.0, "1000")
        .with_bars(generated_bars(1_000));
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("chart init");

    c.bench_function("animation_step_1k_bars", |b| {
        b.iter(|| {
            chart
                .set_max_value(black_box(2_000.0), "2000")
                .expect("rescale");
            chart.advance(Duration::from_millis(16));
            chart.set_max_value(1_000.0, "1000").expect("rescale back");
        })
    });
}

criterion_group!(
    benches,
    bench_bar_height_10k,
    bench_render_frame_1k_bars,
    bench_animation_step_1k_bars
);
criterion_main!(benches);
