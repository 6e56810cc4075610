// File: crates/plot-core/src/render/boxplot.rs
// Summary: Box-and-whisker glyphs, one per group in request order.

use skia_safe as skia;

use crate::axes::{Axes, AxisMap};
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::request::BoxChart;
use crate::scale::{Extent, Fit};
use crate::stats::box_stats;

use super::{style_color, with_axes, AUTO_MARGIN};

const LINE_WIDTH: f32 = 1.0;
const FLIER_RADIUS: f32 = 3.0;

pub(crate) fn draw(fig: &Figure, chart: &BoxChart) -> crate::PlotResult<()> {
    let fill = fill_paint(style_color(&chart.color, 1.0)?);
    let edge = stroke_paint(fig.theme.edge, LINE_WIDTH);
    let median = stroke_paint(fig.theme.accent, LINE_WIDTH);

    let names: Vec<String> = chart.groups.iter().map(|g| g.name.clone()).collect();
    let values = Extent::of(chart.groups.iter().flat_map(|g| g.values.iter().copied()));
    let plot = fig.plot;
    let axes = Axes::new(
        plot,
        AxisMap::categorical(&names, &chart.frame.x_axis(), plot.left, plot.right),
        AxisMap::continuous(&chart.frame.y_axis(), &values, Fit::Padded(AUTO_MARGIN), plot.bottom, plot.top),
    );

    let half = chart.box_width * 0.5;
    let cap = chart.box_width * 0.25;
    let segment = |canvas: &skia::Canvas, a: (f64, f64), b: (f64, f64), paint: &skia::Paint| {
        canvas.draw_line(axes.px(a.0, a.1), axes.px(b.0, b.1), paint);
    };

    with_axes(fig, &axes, |canvas| {
        for (i, group) in chart.groups.iter().enumerate() {
            let Some(s) = box_stats(&group.values) else { continue };
            let c = i as f64;

            segment(canvas, (c, s.q1), (c, s.whisker_lo), &edge);
            segment(canvas, (c, s.q3), (c, s.whisker_hi), &edge);
            segment(canvas, (c - cap, s.whisker_lo), (c + cap, s.whisker_lo), &edge);
            segment(canvas, (c - cap, s.whisker_hi), (c + cap, s.whisker_hi), &edge);

            let (x0, y0) = axes.px(c - half, s.q1);
            let (x1, y1) = axes.px(c + half, s.q3);
            let body = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
            canvas.draw_rect(body, &fill);
            canvas.draw_rect(body, &edge);

            segment(canvas, (c - half, s.median), (c + half, s.median), &median);

            for &v in &s.outliers {
                canvas.draw_circle(axes.px(c, v), FLIER_RADIUS, &edge);
            }
        }
    });
    Ok(())
}
