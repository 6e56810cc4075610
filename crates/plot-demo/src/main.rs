// File: crates/plot-demo/src/main.rs
// Summary: Demo loads an x,y CSV (or synthesizes one) and renders every chart kind to SVG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plot_core::{call_tool, parse_marker, DeliveryConfig, ToolOutput};
use serde_json::{json, Value};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_target(false).init();

    // args: [input.csv] [output dir]
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out".to_string()));

    let points = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            load_xy_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input given, using a synthetic signal");
            synthetic(200)
        }
    };
    if points.len() < 8 {
        anyhow::bail!("need at least eight x,y rows, got {}", points.len());
    }
    info!(rows = points.len(), "data loaded");

    let config = DeliveryConfig::to_dir(&out_dir)?;
    for (tool, args) in gallery(&points) {
        let out = call_tool(tool, args, &config).with_context(|| format!("{tool} failed"))?;
        match out {
            ToolOutput::Marker(m) => match parse_marker(&m) {
                Some(path) => println!("Wrote {path}"),
                None => warn!(tool, "unexpected marker text"),
            },
            ToolOutput::Result(_) => warn!(tool, "renderer returned inline output in file mode"),
        }
    }
    Ok(())
}

/// One request per chart kind, all derived from the same series.
fn gallery(points: &[(f64, f64)]) -> Vec<(&'static str, Value)> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let smooth = moving_average(&ys, 10);
    let diffs: Vec<f64> = ys.windows(2).map(|w| w[1] - w[0]).collect();

    // Quartile buckets of y feed the bar, box and pie charts.
    let n = ys.len();
    let quarters: Vec<&[f64]> = (0..4).map(|q| &ys[q * n / 4..(q + 1) * n / 4]).filter(|s| !s.is_empty()).collect();
    let names: Vec<String> = (1..=quarters.len()).map(|q| format!("Q{q}")).collect();
    let means: Vec<f64> = quarters.iter().map(|s| s.iter().sum::<f64>() / s.len() as f64).collect();
    let spans: Vec<f64> = quarters
        .iter()
        .map(|s| s.iter().copied().fold(f64::NEG_INFINITY, f64::max) - s.iter().copied().fold(f64::INFINITY, f64::min))
        .collect();

    // Correlation-style matrix of lagged series.
    let lags = [0usize, 1, 2, 5, 10];
    let matrix: Vec<Vec<f64>> = lags.iter().map(|&a| lags.iter().map(|&b| lag_corr(&ys, a.max(b) - a.min(b))).collect()).collect();
    let lag_labels: Vec<String> = lags.iter().map(|l| format!("lag {l}")).collect();

    let grid: Vec<f64> = (0..40).map(|i| -3.0 + 6.0 * i as f64 / 39.0).collect();
    let z: Vec<Vec<f64>> = grid
        .iter()
        .map(|&y| grid.iter().map(|&x| (-(x * x + y * y) / 2.0).exp() - 0.5 * (-((x - 1.5).powi(2) + (y - 1.0).powi(2))).exp()).collect())
        .collect();

    vec![
        ("plot_line", json!({
            "title": "Signal",
            "series": [{"name": "raw", "x": xs, "y": ys}, {"name": "smoothed", "x": xs, "y": smooth}],
            "x_label": "x", "y_label": "y",
        })),
        ("plot_scatter", json!({"title": "Lag plot", "x": &ys[..n - 1], "y": &ys[1..], "opacity": 0.6})),
        ("plot_bar", json!({"title": "Quarter means", "categories": names, "values": means})),
        ("plot_area", json!({"title": "Area", "x": xs, "y": ys, "fill_color": "#2ca02c"})),
        ("plot_histogram", json!({"title": "Step sizes", "values": diffs, "bins": 20, "density": true})),
        ("plot_box", json!({
            "title": "Quarter spread",
            "groups": names.iter().zip(&quarters).map(|(n, v)| json!({"name": n, "values": v})).collect::<Vec<_>>(),
            "box_width": 0.5, "color": "lightsteelblue",
        })),
        ("plot_heatmap", json!({
            "title": "Lag correlation",
            "matrix": matrix, "x_labels": lag_labels, "y_labels": lag_labels,
            "show_values": true, "color_scale": "plasma",
        })),
        ("plot_contour", json!({"title": "Two bumps", "x": grid, "y": grid, "z": z, "levels": 8})),
        ("plot_pie", json!({"title": "Quarter ranges", "labels": names, "values": spans, "inner_radius_ratio": 0.4, "start_angle": 90})),
    ]
}

/// Load an `x,y` CSV. Headers are matched loosely; without recognizable
/// headers the first two columns are used.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let ix = idx(&["x", "time", "t", "index"]).unwrap_or(0);
    let iy = idx(&["y", "value", "close", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(x), Some(y)) = (parse(ix), parse(iy)) {
            out.push((x, y));
        }
    }
    Ok(out)
}

fn synthetic(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.1;
            (x, (x * 0.7).sin() * 3.0 + (x * 2.3).cos() + x * 0.05)
        })
        .collect()
}

fn moving_average(v: &[f64], window: usize) -> Vec<f64> {
    (0..v.len())
        .map(|i| {
            let lo = i.saturating_sub(window - 1);
            let s = &v[lo..=i];
            s.iter().sum::<f64>() / s.len() as f64
        })
        .collect()
}

fn lag_corr(v: &[f64], lag: usize) -> f64 {
    if lag >= v.len() {
        return 0.0;
    }
    let (a, b) = (&v[..v.len() - lag], &v[lag..]);
    let mean = |s: &[f64]| s.iter().sum::<f64>() / s.len() as f64;
    let (ma, mb) = (mean(a), mean(b));
    let cov: f64 = a.iter().zip(b).map(|(x, y)| (x - ma) * (y - mb)).sum();
    let va: f64 = a.iter().map(|x| (x - ma).powi(2)).sum();
    let vb: f64 = b.iter().map(|y| (y - mb).powi(2)).sum();
    let denom = (va * vb).sqrt();
    if denom > 0.0 { cov / denom } else { 0.0 }
}
