// File: crates/plot-core/src/render/contour.rs
// Summary: Contour chart: viridis-colored iso-lines, each level labeled inline on its longest line.

use skia_safe as skia;

use crate::colormap::{normalize, ColorScale};
use crate::contour::{contour_levels, iso_lines};
use crate::figure::{stroke_paint, Figure};
use crate::grid::format_level;
use crate::request::ContourChart;
use crate::scale::{Extent, Fit};
use crate::text::{HAlign, VAlign};

use super::{continuous_axes, with_axes};

const LABEL_FONT: f32 = 10.0;
/// Extra gap either side of an inline label.
const LABEL_GAP: f32 = 2.0;

type Px = (f32, f32);

/// Where an inline label goes and what remains of the line around it.
#[derive(Debug)]
struct LabelCut {
    at: Px,
    /// Clockwise text rotation in degrees, kept upright.
    angle: f32,
    pieces: Vec<Vec<Px>>,
}

fn length(pts: &[Px]) -> f32 {
    pts.windows(2).map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1)).sum()
}

/// Break `pts` around its midpoint, leaving `gap` pixels free for a label.
/// `None` when the line is too short to carry the label.
fn cut_for_label(pts: &[Px], gap: f32) -> Option<LabelCut> {
    let total = length(pts);
    if pts.len() < 2 || total < gap * 1.5 {
        return None;
    }
    let (s0, s1) = ((total - gap) * 0.5, (total + gap) * 0.5);
    let mid = total * 0.5;

    let mut before = Vec::new();
    let mut after = Vec::new();
    let mut at = pts[0];
    let mut angle = 0.0;
    let mut walked = 0.0;

    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        let seg = (b.0 - a.0).hypot(b.1 - a.1);
        let lerp = |s: f32| {
            let t = if seg > 0.0 { ((s - walked) / seg).clamp(0.0, 1.0) } else { 0.0 };
            (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
        };
        let end = walked + seg;

        if walked < s0 {
            if before.is_empty() {
                before.push(a);
            }
            before.push(if end <= s0 { b } else { lerp(s0) });
        }
        if end > s1 {
            if after.is_empty() {
                after.push(if walked >= s1 { a } else { lerp(s1) });
            }
            after.push(b);
        }
        if walked <= mid && mid <= end {
            at = lerp(mid);
            angle = (b.1 - a.1).atan2(b.0 - a.0).to_degrees();
        }
        walked = end;
    }

    if angle > 90.0 {
        angle -= 180.0;
    }
    if angle < -90.0 {
        angle += 180.0;
    }
    let pieces = [before, after].into_iter().filter(|p| p.len() > 1).collect();
    Some(LabelCut { at, angle, pieces })
}

fn stroke(canvas: &skia::Canvas, pts: &[Px], closed: bool, paint: &skia::Paint) {
    let Some((&first, rest)) = pts.split_first() else { return };
    let mut path = skia::Path::new();
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    if closed {
        path.close();
    }
    canvas.draw_path(&path, paint);
}

pub(crate) fn draw(fig: &Figure, chart: &ContourChart) -> crate::PlotResult<()> {
    let axes = continuous_axes(
        fig,
        &chart.frame,
        &Extent::of(chart.x.iter().copied()),
        Fit::Tight,
        &Extent::of(chart.y.iter().copied()),
        Fit::Tight,
    );

    let z = Extent::of(chart.z.iter().flatten().copied());
    let levels = if z.is_empty() { Vec::new() } else { contour_levels(z.min, z.max, chart.levels) };
    let (first, last) = (levels.first().copied().unwrap_or(0.0), levels.last().copied().unwrap_or(1.0));
    tracing::debug!(count = levels.len(), "contour levels");

    with_axes(fig, &axes, |canvas| {
        for &level in &levels {
            let color = ColorScale::Viridis.sample(normalize(level, first, last));
            let paint = stroke_paint(color, chart.stroke_width);

            let lines: Vec<(Vec<Px>, bool)> = iso_lines(&chart.x, &chart.y, &chart.z, level)
                .into_iter()
                .map(|l| (l.points.iter().map(|&(x, y)| axes.px(x, y)).collect(), l.closed))
                .collect();

            let label = format_level(level);
            let (label_w, _) = fig.shaper.measure(&label, LABEL_FONT);
            let longest = lines
                .iter()
                .enumerate()
                .map(|(i, (pts, _))| (i, length(pts)))
                .max_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(i, _)| i);

            for (i, (pts, closed)) in lines.iter().enumerate() {
                let cut = if Some(i) == longest { cut_for_label(pts, label_w + 2.0 * LABEL_GAP) } else { None };
                match cut {
                    Some(cut) => {
                        for piece in &cut.pieces {
                            stroke(canvas, piece, false, &paint);
                        }
                        fig.shaper.draw_rotated(
                            canvas,
                            &label,
                            cut.at,
                            cut.angle,
                            LABEL_FONT,
                            color,
                            HAlign::Center,
                            VAlign::Center,
                        );
                    }
                    None => stroke(canvas, pts, *closed, &paint),
                }
            }
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_gap_splits_straight_line() {
        let pts = vec![(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)];
        let cut = cut_for_label(&pts, 20.0).unwrap();
        assert_eq!(cut.at, (50.0, 0.0));
        assert_eq!(cut.angle, 0.0);
        assert_eq!(cut.pieces.len(), 2);
        assert_eq!(cut.pieces[0].last(), Some(&(40.0, 0.0)));
        assert_eq!(cut.pieces[1].first(), Some(&(60.0, 0.0)));
        assert_eq!(cut.pieces[1].last(), Some(&(100.0, 0.0)));
    }

    #[test]
    fn short_lines_get_no_label() {
        assert!(cut_for_label(&[(0.0, 0.0), (10.0, 0.0)], 20.0).is_none());
    }

    #[test]
    fn labels_stay_upright() {
        let cut = cut_for_label(&[(100.0, 0.0), (0.0, 0.0)], 10.0).unwrap();
        assert_eq!(cut.angle, 0.0);
    }
}
