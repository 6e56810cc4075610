// File: crates/plot-core/src/render/line.rs
// Summary: Line chart: one stroked polyline per series, optional markers and legend.

use skia_safe as skia;

use crate::axes::{draw_legend, LegendEntry};
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::request::{LineChart, LineStyle};
use crate::scale::{Extent, Fit};

use super::{continuous_axes, polyline, with_axes, AUTO_MARGIN};

const MARKER_RADIUS: f32 = 3.0;

/// Dash pattern for `style`, scaled by the stroke width.
fn dash_intervals(style: LineStyle, width: f32) -> Option<[f32; 2]> {
    match style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some([3.7 * width, 1.6 * width]),
        LineStyle::Dotted => Some([width, 1.65 * width]),
    }
}

pub(crate) fn draw(fig: &Figure, chart: &LineChart) -> crate::PlotResult<()> {
    let mut xs = Extent::default();
    let mut ys = Extent::default();
    for s in &chart.series {
        xs.extend(s.x.iter().copied());
        ys.extend(s.y.iter().copied());
    }
    let fit = Fit::Padded(AUTO_MARGIN);
    let axes = continuous_axes(fig, &chart.frame, &xs, fit, &ys, fit);

    let mut legend = Vec::with_capacity(chart.series.len());
    with_axes(fig, &axes, |canvas| {
        for (i, s) in chart.series.iter().enumerate() {
            let color = fig.theme.series_color(i);
            let mut paint = stroke_paint(color, chart.stroke_width);
            paint.set_stroke_join(skia::paint::Join::Round);
            if let Some(intervals) = dash_intervals(chart.line_style, chart.stroke_width) {
                paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
            } else {
                paint.set_stroke_cap(skia::paint::Cap::Round);
            }

            let points = s.x.iter().copied().zip(s.y.iter().copied());
            canvas.draw_path(&polyline(&axes, points.clone()), &paint);

            if chart.show_markers {
                let marker = fill_paint(color);
                for (x, y) in points {
                    let (px, py) = axes.px(x, y);
                    if px.is_finite() && py.is_finite() {
                        canvas.draw_circle((px, py), MARKER_RADIUS, &marker);
                    }
                }
            }
            legend.push(LegendEntry { label: &s.name, paint, marker: chart.show_markers });
        }
    });

    if chart.series.len() > 1 {
        draw_legend(fig, axes.rect, &legend);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_patterns_scale_with_width() {
        assert_eq!(dash_intervals(LineStyle::Solid, 2.0), None);
        assert_eq!(dash_intervals(LineStyle::Dashed, 2.0), Some([7.4, 3.2]));
        assert_eq!(dash_intervals(LineStyle::Dotted, 1.0), Some([1.0, 1.65]));
    }
}
