// File: crates/plot-core/src/render/histogram.rs
// Summary: Histogram: equal-width bins drawn as edged bars.

use skia_safe as skia;

use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::request::HistogramChart;
use crate::scale::{Extent, Fit};
use crate::stats::histogram_bins;

use super::{continuous_axes, style_color, with_axes, AUTO_MARGIN};

const EDGE_WIDTH: f32 = 1.0;

pub(crate) fn draw(fig: &Figure, chart: &HistogramChart) -> crate::PlotResult<()> {
    let fill = fill_paint(style_color(&chart.color, 1.0)?);
    let edge = stroke_paint(fig.theme.edge, EDGE_WIDTH);

    let hist = histogram_bins(&chart.values, chart.bins, chart.density);
    let mut heights = Extent::of(hist.heights.iter().copied());
    heights.push(0.0);
    let axes = continuous_axes(
        fig,
        &chart.frame,
        &Extent::of(hist.edges.iter().copied()),
        Fit::Padded(AUTO_MARGIN),
        &heights,
        Fit::Sticky { pad: AUTO_MARGIN, at: 0.0 },
    );

    with_axes(fig, &axes, |canvas| {
        for (i, &h) in hist.heights.iter().enumerate() {
            let (x0, y0) = axes.px(hist.edges[i], 0.0);
            let (x1, y1) = axes.px(hist.edges[i + 1], h);
            let rect = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
            if !rect.is_finite() {
                continue;
            }
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &edge);
        }
    });
    Ok(())
}
