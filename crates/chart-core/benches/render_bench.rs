// File: crates/chart-core/benches/render_bench.rs
// Summary: Rendering cost of a sample-index line chart to PNG bytes.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sensor_chart_core::{build_index, Chart, RenderOptions};

fn build_chart(n: usize) -> Chart {
    let samples: Vec<f64> = (0..n).map(|i| 1.0 + (i as f64 * 0.01).sin() * 0.2).collect();
    let index: Vec<f64> = build_index(&samples).into_iter().map(|i| i as f64).collect();
    Chart::line(&index, &samples, "sample", "acc (g)", "Acceleration").expect("equal lengths")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let ch = build_chart(n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
