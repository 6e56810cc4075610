// File: crates/plot-core/src/render/area.rs
// Summary: Area chart: the region between the curve and y = 0, filled without outline.

use skia_safe as skia;

use crate::figure::{fill_paint, Figure};
use crate::request::AreaChart;
use crate::scale::{Extent, Fit};

use super::{continuous_axes, style_color, with_axes, AUTO_MARGIN};

pub(crate) fn draw(fig: &Figure, chart: &AreaChart) -> crate::PlotResult<()> {
    let paint = fill_paint(style_color(&chart.fill_color, chart.opacity)?);

    let mut ys = Extent::of(chart.y.iter().copied());
    ys.push(0.0);
    let axes = continuous_axes(
        fig,
        &chart.frame,
        &Extent::of(chart.x.iter().copied()),
        Fit::Padded(AUTO_MARGIN),
        &ys,
        Fit::Sticky { pad: AUTO_MARGIN, at: 0.0 },
    );

    let points: Vec<(f64, f64)> = chart
        .x
        .iter()
        .copied()
        .zip(chart.y.iter().copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    with_axes(fig, &axes, |canvas| {
        let (Some(&(first_x, _)), Some(&(last_x, _))) = (points.first(), points.last()) else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to(axes.px(first_x, 0.0));
        for &(x, y) in &points {
            path.line_to(axes.px(x, y));
        }
        path.line_to(axes.px(last_x, 0.0));
        path.close();
        canvas.draw_path(&path, &paint);
    });
    Ok(())
}
