// File: crates/plot-core/benches/render_bench.rs
// Purpose: Render throughput for line and contour charts, inline delivery.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{call_tool, DeliveryConfig, PlotResult};
use serde_json::{json, Value};

fn line_args(n: usize) -> Value {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001).collect();
    json!({ "series": [{ "name": "s", "x": x, "y": y }], "width": 800, "height": 500 })
}

fn contour_args(n: usize) -> Value {
    let axis: Vec<f64> = (0..n).map(|i| -2.0 + 4.0 * i as f64 / (n - 1) as f64).collect();
    let z: Vec<Vec<f64>> = axis
        .iter()
        .map(|&y| axis.iter().map(|&x| (-(x * x + y * y)).exp()).collect())
        .collect();
    json!({ "x": axis, "y": axis, "z": z, "levels": 8 })
}

fn bench_render(c: &mut Criterion) {
    let inline = DeliveryConfig::inline();
    let mut group = c.benchmark_group("render_svg");
    for &n in &[1_000usize, 10_000usize] {
        let args = line_args(n);
        group.bench_function(format!("line_{n}"), |b| {
            b.iter(|| -> PlotResult<()> {
                black_box(call_tool("plot_line", args.clone(), &inline)?);
                Ok(())
            });
        });
    }
    let args = contour_args(60);
    group.bench_function("contour_60x60", |b| {
        b.iter(|| -> PlotResult<()> {
            black_box(call_tool("plot_contour", args.clone(), &inline)?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
