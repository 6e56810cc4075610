// File: crates/plot-core/src/render/heatmap.rs
// Summary: Heatmap: one colormapped cell per matrix entry, row 0 at the top.

use skia_safe as skia;

use crate::axes::{Axes, AxisMap};
use crate::colormap::normalize;
use crate::figure::{fill_paint, Figure};
use crate::request::HeatmapChart;
use crate::scale::Extent;
use crate::text::{HAlign, VAlign};

use super::with_axes;

const X_TICK_ROTATION: f32 = 45.0;

pub(crate) fn draw(fig: &Figure, chart: &HeatmapChart) -> crate::PlotResult<()> {
    let plot = fig.plot;
    let frame = &chart.frame;
    let axes = Axes::new(
        plot,
        AxisMap::categorical(&chart.x_labels, &frame.x_axis(), plot.left, plot.right)
            .with_rotation(X_TICK_ROTATION),
        AxisMap::categorical(&chart.y_labels, &frame.y_axis(), plot.top, plot.bottom),
    );

    let range = Extent::of(chart.matrix.iter().flatten().copied());
    let (lo, hi) = if range.is_empty() { (0.0, 1.0) } else { (range.min, range.max) };

    with_axes(fig, &axes, |canvas| {
        for (r, row) in chart.matrix.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if !v.is_finite() {
                    continue;
                }
                let (x, y) = (c as f64, r as f64);
                let (x0, y0) = axes.px(x - 0.5, y - 0.5);
                let (x1, y1) = axes.px(x + 0.5, y + 0.5);
                let cell = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
                canvas.draw_rect(cell, &fill_paint(chart.color_scale.sample(normalize(v, lo, hi))));
            }
        }

        if chart.show_values {
            for (r, row) in chart.matrix.iter().enumerate() {
                for (c, v) in row.iter().enumerate() {
                    fig.shaper.draw(
                        canvas,
                        &format!("{v:.2}"),
                        axes.px(c as f64, r as f64),
                        fig.theme.tick_font,
                        fig.theme.cell_text,
                        HAlign::Center,
                        VAlign::Center,
                    );
                }
            }
        }
    });
    Ok(())
}
