// File: crates/plot-core/src/render/scatter.rs
// Summary: Scatter chart: uniform circles whose area is the squared point radius.

use crate::figure::{fill_paint, Figure};
use crate::request::ScatterChart;
use crate::scale::{Extent, Fit};

use super::{continuous_axes, style_color, with_axes, AUTO_MARGIN};

pub(crate) fn draw(fig: &Figure, chart: &ScatterChart) -> crate::PlotResult<()> {
    let color = style_color(&chart.color, chart.opacity)?;
    let fit = Fit::Padded(AUTO_MARGIN);
    let axes = continuous_axes(
        fig,
        &chart.frame,
        &Extent::of(chart.x.iter().copied()),
        fit,
        &Extent::of(chart.y.iter().copied()),
        fit,
    );

    // Marker area is radius^2 px^2, so the drawn circle has diameter `radius`.
    let r = chart.point_radius * 0.5;
    let paint = fill_paint(color);
    with_axes(fig, &axes, |canvas| {
        for (&x, &y) in chart.x.iter().zip(&chart.y) {
            let (px, py) = axes.px(x, y);
            if px.is_finite() && py.is_finite() {
                canvas.draw_circle((px, py), r, &paint);
            }
        }
    });
    Ok(())
}
