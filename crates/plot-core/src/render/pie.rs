// File: crates/plot-core/src/render/pie.rs
// Summary: Pie and donut charts on a frameless canvas.

use skia_safe as skia;

use crate::figure::{fill_paint, Figure};
use crate::request::PieChart;
use crate::text::{HAlign, VAlign};

/// The pie fills a square of half-size 1.25 radii.
const VIEW_LIMIT: f32 = 1.25;
const LABEL_DISTANCE: f32 = 1.1;

/// One wedge in degrees, counter-clockwise from 3 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub theta1: f64,
    pub theta2: f64,
    /// Radial thickness as a fraction of the outer radius; 1.0 is a full sector.
    pub width: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 {
        self.theta2 - self.theta1
    }

    pub fn mid_angle(&self) -> f64 {
        (self.theta1 + self.theta2) * 0.5
    }
}

/// Lay out wedges proportional to each value's share of the total.
pub fn wedge_layout(values: &[f64], start_angle: f64, inner_radius_ratio: f64) -> Vec<Wedge> {
    let total: f64 = values.iter().filter(|v| v.is_finite()).sum();
    let width = if inner_radius_ratio > 0.0 { 1.0 - inner_radius_ratio } else { 1.0 };
    let mut theta = start_angle;
    values
        .iter()
        .map(|&v| {
            let share = if total > 0.0 && v.is_finite() { v / total } else { 0.0 };
            let wedge = Wedge { theta1: theta, theta2: theta + 360.0 * share, width };
            theta = wedge.theta2;
            wedge
        })
        .collect()
}

/// Outline of `wedge` around `center` with outer radius `r`. Angles flip sign
/// because pixel y grows downward.
fn wedge_path(center: (f32, f32), r: f32, wedge: &Wedge) -> skia::Path {
    let (cx, cy) = center;
    let oval = |radius: f32| skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);
    let start = -wedge.theta1 as f32;
    let sweep = -wedge.sweep() as f32;
    let inner = r * (1.0 - wedge.width as f32);
    let full = wedge.sweep() >= 360.0 - 1e-9;

    let mut path = skia::Path::new();
    if full {
        path.add_circle((cx, cy), r, None);
        if inner > 0.0 {
            path.add_circle((cx, cy), inner, None);
            path.set_fill_type(skia::PathFillType::EvenOdd);
        }
        return path;
    }
    if inner > 0.0 {
        path.arc_to(oval(r), start, sweep, true);
        path.arc_to(oval(inner), start + sweep, -sweep, false);
    } else {
        path.move_to((cx, cy));
        path.arc_to(oval(r), start, sweep, false);
    }
    path.close();
    path
}

pub(crate) fn draw(fig: &Figure, chart: &PieChart) -> crate::PlotResult<()> {
    let canvas = fig.canvas();
    let theme = &fig.theme;
    let plot = fig.plot;
    let center = plot.center();
    let r = plot.width().min(plot.height()) * 0.5 / VIEW_LIMIT;

    let wedges = wedge_layout(&chart.values, chart.start_angle, chart.inner_radius_ratio);
    for (i, wedge) in wedges.iter().enumerate() {
        if wedge.sweep() <= 0.0 {
            continue;
        }
        canvas.draw_path(&wedge_path(center, r, wedge), &fill_paint(theme.series_color(i)));
    }

    for (wedge, label) in wedges.iter().zip(&chart.labels) {
        let theta = wedge.mid_angle().to_radians();
        let (cos, sin) = (theta.cos() as f32, theta.sin() as f32);
        let at = (center.0 + LABEL_DISTANCE * r * cos, center.1 - LABEL_DISTANCE * r * sin);
        let h = if cos >= 0.0 { HAlign::Left } else { HAlign::Right };
        fig.shaper.draw(canvas, label, at, theme.tick_font, theme.tick_label, h, VAlign::Center);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedges_are_proportional_and_contiguous() {
        let w = wedge_layout(&[1.0, 1.0, 2.0], 90.0, 0.0);
        assert_eq!(w.len(), 3);
        assert_eq!((w[0].theta1, w[0].theta2), (90.0, 180.0));
        assert_eq!((w[1].theta1, w[1].theta2), (180.0, 270.0));
        assert_eq!((w[2].theta1, w[2].theta2), (270.0, 450.0));
        assert!(w.iter().all(|x| x.width == 1.0));
    }

    #[test]
    fn donut_width_is_one_minus_ratio() {
        let w = wedge_layout(&[3.0, 1.0], 0.0, 0.4);
        assert!(w.iter().all(|x| (x.width - 0.6).abs() < 1e-12));
    }

    #[test]
    fn zero_values_take_no_angle() {
        let w = wedge_layout(&[0.0, 5.0], 0.0, 0.0);
        assert_eq!(w[0].sweep(), 0.0);
        assert_eq!(w[1].sweep(), 360.0);
    }
}
