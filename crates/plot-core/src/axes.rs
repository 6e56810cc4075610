// File: crates/plot-core/src/axes.rs
// Summary: Cartesian axes: data-to-pixel mapping, ticks, spines, axis labels and legend.

use skia_safe as skia;

use crate::axis::Axis;
use crate::figure::{fill_paint, stroke_paint, Figure};
use crate::geometry::RectF;
use crate::grid::{format_tick, ticks_for};
use crate::scale::{auto_range, Extent, Fit, ValueScale};
use crate::text::{HAlign, VAlign};

/// Space between a tick mark and its label.
const LABEL_PAD: f32 = 3.5;
/// Space between tick labels and the axis label.
const AXIS_LABEL_PAD: f32 = 4.0;
/// Roughly one tick per this many pixels.
const PX_PER_TICK: f32 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// One axis resolved against its pixel span.
#[derive(Clone, Debug)]
pub struct AxisMap {
    pub scale: ValueScale,
    pub ticks: Vec<Tick>,
    pub label: Option<String>,
    /// Counter-clockwise tick label rotation in degrees.
    pub tick_rotation: f32,
}

impl AxisMap {
    /// Continuous axis over `extent`, fitted per `fit`, then clamped by the
    /// axis' explicit bounds.
    pub fn continuous(axis: &Axis, extent: &Extent, fit: Fit, px_start: f32, px_end: f32) -> Self {
        let (lo, hi) = auto_range(axis.kind, extent, fit);
        Self::fixed(axis, lo, hi, px_start, px_end)
    }

    /// Continuous axis with an explicit automatic range (still subject to bounds).
    pub fn fixed(axis: &Axis, lo: f64, hi: f64, px_start: f32, px_end: f32) -> Self {
        let (lo, hi) = axis.bound(lo, hi);
        let scale = ValueScale::new(axis.kind, lo, hi, px_start, px_end);
        let target = (((px_end - px_start).abs() / PX_PER_TICK).round() as usize).max(3);
        let values: Vec<f64> = ticks_for(axis.kind, scale.vmin, scale.vmax, target)
            .into_iter()
            .filter(|v| scale.contains(*v))
            .collect();
        let ticks = values
            .iter()
            .map(|&v| Tick { value: v, label: format_tick(axis.kind, v, &values) })
            .collect();
        Self { scale, ticks, label: axis.label.clone(), tick_rotation: 0.0 }
    }

    /// Category `i` sits at value `i`; the domain spans `[-0.5, n - 0.5]`
    /// unless the axis bounds override either side. Always linear.
    pub fn categorical(labels: &[String], axis: &Axis, px_start: f32, px_end: f32) -> Self {
        let n = labels.len().max(1) as f64;
        let (lo, hi) = axis.bound(-0.5, n - 0.5);
        let scale = ValueScale::linear(lo, hi, px_start, px_end);
        let ticks = labels
            .iter()
            .enumerate()
            .map(|(i, l)| Tick { value: i as f64, label: l.clone() })
            .filter(|t| scale.contains(t.value))
            .collect();
        Self { scale, ticks, label: axis.label.clone(), tick_rotation: 0.0 }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }
}

pub struct Axes {
    pub rect: RectF,
    pub x: AxisMap,
    pub y: AxisMap,
}

impl Axes {
    pub fn new(rect: RectF, x: AxisMap, y: AxisMap) -> Self {
        Self { rect, x, y }
    }

    #[inline]
    pub fn px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.scale.to_px(x), self.y.scale.to_px(y))
    }

    /// Push a clip to the plot rectangle; pair with `canvas.restore()`.
    pub fn clip(&self, canvas: &skia::Canvas) {
        canvas.save();
        canvas.clip_rect(self.rect.to_skia(), None, Some(true));
    }

    /// Spines, ticks, tick labels and axis labels.
    pub fn draw_frame(&self, fig: &Figure) {
        let canvas = fig.canvas();
        let theme = &fig.theme;
        let r = self.rect;

        canvas.draw_rect(r.to_skia(), &stroke_paint(theme.spine, theme.spine_width));

        let tick_paint = stroke_paint(theme.tick, theme.spine_width);

        // x axis (bottom)
        let mut label_depth: f32 = 0.0;
        for t in &self.x.ticks {
            let px = self.x.scale.to_px(t.value);
            canvas.draw_line((px, r.bottom), (px, r.bottom + theme.tick_length), &tick_paint);
            let anchor = (px, r.bottom + theme.tick_length + LABEL_PAD);
            let (w, h) = fig.shaper.measure(&t.label, theme.tick_font);
            if self.x.tick_rotation == 0.0 {
                fig.shaper.draw(canvas, &t.label, anchor, theme.tick_font, theme.tick_label, HAlign::Center, VAlign::Top);
                label_depth = label_depth.max(h);
            } else {
                fig.shaper.draw_rotated(
                    canvas,
                    &t.label,
                    anchor,
                    -self.x.tick_rotation,
                    theme.tick_font,
                    theme.tick_label,
                    HAlign::Right,
                    VAlign::Top,
                );
                let rad = self.x.tick_rotation.to_radians();
                label_depth = label_depth.max(w * rad.sin().abs() + h * rad.cos().abs());
            }
        }
        if let Some(label) = &self.x.label {
            let (cx, _) = r.center();
            let y = r.bottom + theme.tick_length + LABEL_PAD + label_depth + AXIS_LABEL_PAD;
            fig.shaper.draw(canvas, label, (cx, y), theme.label_font, theme.axis_label, HAlign::Center, VAlign::Top);
        }

        // y axis (left)
        let mut label_width: f32 = 0.0;
        for t in &self.y.ticks {
            let py = self.y.scale.to_px(t.value);
            canvas.draw_line((r.left - theme.tick_length, py), (r.left, py), &tick_paint);
            let anchor = (r.left - theme.tick_length - LABEL_PAD, py);
            fig.shaper.draw(canvas, &t.label, anchor, theme.tick_font, theme.tick_label, HAlign::Right, VAlign::Center);
            label_width = label_width.max(fig.shaper.measure(&t.label, theme.tick_font).0);
        }
        if let Some(label) = &self.y.label {
            let (_, cy) = r.center();
            let x = r.left - theme.tick_length - LABEL_PAD - label_width - AXIS_LABEL_PAD;
            fig.shaper.draw_rotated(
                canvas,
                label,
                (x, cy),
                -90.0,
                theme.label_font,
                theme.axis_label,
                HAlign::Center,
                VAlign::Bottom,
            );
        }
    }
}

/// One legend row.
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub paint: skia::Paint,
    pub marker: bool,
}

/// Framed legend in the upper-right corner of the plot rectangle.
pub fn draw_legend(fig: &Figure, rect: RectF, entries: &[LegendEntry<'_>]) {
    if entries.is_empty() {
        return;
    }
    let canvas = fig.canvas();
    let theme = &fig.theme;
    let font = theme.tick_font;
    let (pad, sample, gap, row) = (5.0, 20.0, 6.0, font * 1.6);

    let text_w = entries
        .iter()
        .map(|e| fig.shaper.measure(e.label, font).0)
        .fold(0.0f32, f32::max);
    let w = pad * 2.0 + sample + gap + text_w;
    let h = pad * 2.0 + row * entries.len() as f32;
    let left = rect.right - 8.0 - w;
    let top = rect.top + 8.0;
    let frame = skia::Rect::from_xywh(left, top, w, h);

    canvas.draw_rect(frame, &fill_paint(theme.legend_fill));
    canvas.draw_rect(frame, &stroke_paint(theme.legend_frame, 0.8));

    for (i, e) in entries.iter().enumerate() {
        let cy = top + pad + row * (i as f32 + 0.5);
        let x0 = left + pad;
        canvas.draw_line((x0, cy), (x0 + sample, cy), &e.paint);
        if e.marker {
            canvas.draw_circle((x0 + sample * 0.5, cy), 3.0, &fill_paint(e.paint.color()));
        }
        fig.shaper.draw(canvas, e.label, (x0 + sample + gap, cy), font, theme.tick_label, HAlign::Left, VAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::ScaleKind;

    #[test]
    fn categorical_ticks_sit_on_integers() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let m = AxisMap::categorical(&labels, &Axis::new(None, ScaleKind::Linear, None, None), 0.0, 300.0);
        assert_eq!(m.ticks.len(), 3);
        assert!((m.scale.to_px(0.0) - 50.0).abs() < 1e-3);
        assert!((m.scale.to_px(2.0) - 250.0).abs() < 1e-3);
        assert_eq!(m.ticks[1].label, "b");
    }

    #[test]
    fn explicit_bounds_override_auto_range() {
        let axis = Axis::new(Some("v".into()), ScaleKind::Linear, Some(0.0), Some(100.0));
        let m = AxisMap::continuous(&axis, &Extent::of([10.0, 20.0]), Fit::Padded(0.05), 0.0, 400.0);
        assert_eq!(m.scale.vmin, 0.0);
        assert_eq!(m.scale.vmax, 100.0);
        assert!(m.ticks.iter().all(|t| (0.0..=100.0).contains(&t.value)));
        assert_eq!(m.label.as_deref(), Some("v"));
    }

    #[test]
    fn explicit_bounds_apply_to_categories() {
        let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        // Log is ignored for categories; only the bounds carry over.
        let axis = Axis::new(Some("group".into()), ScaleKind::Log, Some(0.5), None);
        let m = AxisMap::categorical(&labels, &axis, 0.0, 300.0);
        assert_eq!(m.scale.vmin, 0.5);
        assert_eq!(m.scale.vmax, 3.5);
        assert!((m.scale.to_px(2.0) - 150.0).abs() < 1e-3);
        let shown: Vec<&str> = m.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(shown, vec!["b", "c", "d"]);
        assert_eq!(m.label.as_deref(), Some("group"));
    }

    #[test]
    fn log_axis_gets_decade_ticks() {
        let axis = Axis::new(None, ScaleKind::Log, None, None);
        let m = AxisMap::continuous(&axis, &Extent::of([1.0, 1000.0]), Fit::Tight, 0.0, 400.0);
        let values: Vec<f64> = m.ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![1.0, 10.0, 100.0, 1000.0]);
    }
}
