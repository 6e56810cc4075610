// File: crates/plot-core/src/render/bar.rs
// Summary: Bar chart: categorical axis with bars centered on category ticks.

use skia_safe as skia;

use crate::axes::{Axes, AxisMap};
use crate::figure::{fill_paint, Figure};
use crate::request::{BarChart, Orientation};
use crate::scale::{Extent, Fit};

use super::{style_color, with_axes, AUTO_MARGIN};

pub(crate) fn draw(fig: &Figure, chart: &BarChart) -> crate::PlotResult<()> {
    let paint = fill_paint(style_color(&chart.color, 1.0)?);
    let frame = &chart.frame;
    let plot = fig.plot;

    let mut values = Extent::of(chart.values.iter().copied());
    values.push(0.0);
    let fit = Fit::Sticky { pad: AUTO_MARGIN, at: 0.0 };

    let axes = match chart.orientation {
        Orientation::Vertical => Axes::new(
            plot,
            AxisMap::categorical(&chart.categories, &frame.x_axis(), plot.left, plot.right),
            AxisMap::continuous(&frame.y_axis(), &values, fit, plot.bottom, plot.top),
        ),
        Orientation::Horizontal => Axes::new(
            plot,
            AxisMap::continuous(&frame.x_axis(), &values, fit, plot.left, plot.right),
            AxisMap::categorical(&chart.categories, &frame.y_axis(), plot.bottom, plot.top),
        ),
    };

    let half = chart.bar_width * 0.5;
    with_axes(fig, &axes, |canvas| {
        for (i, &v) in chart.values.iter().enumerate() {
            let c = i as f64;
            let ((x0, y0), (x1, y1)) = match chart.orientation {
                Orientation::Vertical => (axes.px(c - half, 0.0), axes.px(c + half, v)),
                Orientation::Horizontal => (axes.px(0.0, c - half), axes.px(v, c + half)),
            };
            let rect = skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1));
            if rect.is_finite() {
                canvas.draw_rect(rect, &paint);
            }
        }
    });
    Ok(())
}
