// File: crates/plot-core/src/validate.rs
// Summary: Request validation run before rendering; renderers assume checked input.

use crate::color::parse_color;
use crate::error::{PlotError, PlotResult};
use crate::request::*;

type Check = PlotResult<()>;

/// Largest accepted histogram bin count.
pub const MAX_BINS: usize = 10_000;
/// Largest accepted contour level count.
pub const MAX_LEVELS: usize = 1_000;

fn fail(msg: impl Into<String>) -> Check {
    Err(PlotError::validation(msg))
}

fn non_empty<T>(field: &str, v: &[T]) -> Check {
    if v.is_empty() {
        fail(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn same_len<A, B>(a_name: &str, a: &[A], b_name: &str, b: &[B]) -> Check {
    if a.len() == b.len() {
        Ok(())
    } else {
        fail(format!("{a_name} has {} entries but {b_name} has {}", a.len(), b.len()))
    }
}

fn positive(field: &str, v: f64) -> Check {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        fail(format!("{field} must be positive, got {v}"))
    }
}

fn unit_interval(field: &str, v: f64) -> Check {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        fail(format!("{field} must be within [0, 1], got {v}"))
    }
}

fn color(field: &str, v: &str) -> Check {
    if parse_color(v).is_some() {
        Ok(())
    } else {
        fail(format!("{field}: unknown color '{v}'"))
    }
}

fn frame(f: &Frame) -> Check {
    positive("width", f.width as f64)?;
    positive("height", f.height as f64)?;
    for (name, m) in [
        ("margin_top", f.margin_top),
        ("margin_right", f.margin_right),
        ("margin_bottom", f.margin_bottom),
        ("margin_left", f.margin_left),
    ] {
        if !(m.is_finite() && m >= 0.0) {
            return fail(format!("{name} must be a non-negative number, got {m}"));
        }
    }
    if !f.is_transparent() {
        color("background", &f.background)?;
    }
    for (name, v) in [("x_min", f.x_min), ("x_max", f.x_max), ("y_min", f.y_min), ("y_max", f.y_max)] {
        if v.is_some_and(|v| !v.is_finite()) {
            return fail(format!("{name} must be finite"));
        }
    }
    Ok(())
}

fn line(c: &LineChart) -> Check {
    non_empty("series", &c.series)?;
    for s in &c.series {
        non_empty(&format!("series '{}' x", s.name), &s.x)?;
        same_len(&format!("series '{}' x", s.name), &s.x, "y", &s.y)?;
    }
    positive("stroke_width", c.stroke_width as f64)
}

fn scatter(c: &ScatterChart) -> Check {
    non_empty("x", &c.x)?;
    same_len("x", &c.x, "y", &c.y)?;
    positive("point_radius", c.point_radius as f64)?;
    unit_interval("opacity", c.opacity)?;
    color("color", &c.color)
}

fn bar(c: &BarChart) -> Check {
    non_empty("categories", &c.categories)?;
    same_len("categories", &c.categories, "values", &c.values)?;
    positive("bar_width", c.bar_width)?;
    color("color", &c.color)
}

fn area(c: &AreaChart) -> Check {
    non_empty("x", &c.x)?;
    same_len("x", &c.x, "y", &c.y)?;
    unit_interval("opacity", c.opacity)?;
    color("fill_color", &c.fill_color)
}

fn histogram(c: &HistogramChart) -> Check {
    non_empty("values", &c.values)?;
    if !(1..=MAX_BINS).contains(&c.bins) {
        return fail(format!("bins must be within 1..={MAX_BINS}, got {}", c.bins));
    }
    color("color", &c.color)
}

fn boxes(c: &BoxChart) -> Check {
    non_empty("groups", &c.groups)?;
    for g in &c.groups {
        non_empty(&format!("group '{}' values", g.name), &g.values)?;
    }
    positive("box_width", c.box_width)?;
    color("color", &c.color)
}

fn heatmap(c: &HeatmapChart) -> Check {
    non_empty("matrix", &c.matrix)?;
    let cols = c.matrix[0].len();
    if cols == 0 {
        return fail("matrix rows must not be empty");
    }
    if let Some(r) = c.matrix.iter().position(|row| row.len() != cols) {
        return fail(format!("matrix is ragged: row {r} has {} columns, expected {cols}", c.matrix[r].len()));
    }
    if c.y_labels.len() != c.matrix.len() {
        return fail(format!("y_labels has {} entries but matrix has {} rows", c.y_labels.len(), c.matrix.len()));
    }
    if c.x_labels.len() != cols {
        return fail(format!("x_labels has {} entries but matrix has {cols} columns", c.x_labels.len()));
    }
    Ok(())
}

fn contour(c: &ContourChart) -> Check {
    if c.x.len() < 2 || c.y.len() < 2 {
        return fail("contour grids need at least 2 points along x and y");
    }
    if c.z.len() != c.y.len() || c.z.iter().any(|row| row.len() != c.x.len()) {
        return fail(format!("z must have shape len(y) x len(x) = {} x {}", c.y.len(), c.x.len()));
    }
    if !(1..=MAX_LEVELS).contains(&c.levels) {
        return fail(format!("levels must be within 1..={MAX_LEVELS}, got {}", c.levels));
    }
    positive("stroke_width", c.stroke_width as f64)
}

fn pie(c: &PieChart) -> Check {
    non_empty("values", &c.values)?;
    same_len("labels", &c.labels, "values", &c.values)?;
    if c.values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return fail("pie values must be finite and non-negative");
    }
    if c.values.iter().sum::<f64>() <= 0.0 {
        return fail("pie values must not sum to zero");
    }
    if !(0.0..1.0).contains(&c.inner_radius_ratio) {
        return fail(format!("inner_radius_ratio must be within [0, 1), got {}", c.inner_radius_ratio));
    }
    if !c.start_angle.is_finite() {
        return fail("start_angle must be finite");
    }
    Ok(())
}

/// Check `spec` for the errors renderers do not guard against.
pub fn validate(spec: &ChartSpec) -> Check {
    frame(spec.frame())?;
    match spec {
        ChartSpec::Line(c) => line(c),
        ChartSpec::Scatter(c) => scatter(c),
        ChartSpec::Bar(c) => bar(c),
        ChartSpec::Area(c) => area(c),
        ChartSpec::Histogram(c) => histogram(c),
        ChartSpec::Box(c) => boxes(c),
        ChartSpec::Heatmap(c) => heatmap(c),
        ChartSpec::Contour(c) => contour(c),
        ChartSpec::Pie(c) => pie(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(kind: ChartKind, v: serde_json::Value) -> Check {
        validate(&ChartSpec::from_json(kind, v)?)
    }

    #[test]
    fn heatmap_labels_must_match_matrix() {
        let m = json!([[1.0, 2.0], [3.0, 4.0]]);
        assert!(check(ChartKind::Heatmap, json!({"matrix": m, "x_labels": ["a", "b"], "y_labels": ["r1", "r2"]})).is_ok());
        for (xl, yl) in [(json!(["a", "b", "c"]), json!(["r1", "r2"])), (json!(["a", "b"]), json!(["r1"]))] {
            let err = check(ChartKind::Heatmap, json!({"matrix": m, "x_labels": xl, "y_labels": yl}));
            assert!(matches!(err, Err(PlotError::Validation(_))));
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert!(check(ChartKind::Scatter, json!({"x": [1, 2], "y": [1]})).is_err());
        assert!(check(ChartKind::Bar, json!({"categories": ["a"], "values": [1, 2]})).is_err());
        assert!(check(ChartKind::Pie, json!({"labels": ["a"], "values": [1, 2]})).is_err());
    }

    #[test]
    fn dimensions_and_margins() {
        assert!(check(ChartKind::Area, json!({"x": [1], "y": [1], "width": 0})).is_err());
        assert!(check(ChartKind::Area, json!({"x": [1], "y": [1], "margin_left": -1})).is_err());
        // Oversized margins are clamped at render time, not rejected.
        assert!(check(ChartKind::Area, json!({"x": [1], "y": [1], "margin_left": 900})).is_ok());
    }

    #[test]
    fn contour_shape_is_checked() {
        let ok = json!({"x": [0, 1, 2], "y": [0, 1], "z": [[0, 1, 2], [1, 2, 3]]});
        assert!(check(ChartKind::Contour, ok).is_ok());
        let transposed = json!({"x": [0, 1, 2], "y": [0, 1], "z": [[0, 1], [1, 2], [2, 3]]});
        assert!(check(ChartKind::Contour, transposed).is_err());
    }

    #[test]
    fn pie_and_style_ranges() {
        assert!(check(ChartKind::Pie, json!({"labels": ["a", "b"], "values": [0, 0]})).is_err());
        assert!(check(ChartKind::Pie, json!({"labels": ["a"], "values": [1], "inner_radius_ratio": 1.0})).is_err());
        assert!(check(ChartKind::Histogram, json!({"values": [1], "bins": 0})).is_err());
        assert!(check(ChartKind::Scatter, json!({"x": [1], "y": [1], "opacity": 1.5})).is_err());
        assert!(check(ChartKind::Bar, json!({"categories": ["a"], "values": [1], "color": "notacolor"})).is_err());
        assert!(check(ChartKind::Line, json!({"series": []})).is_err());
    }

    #[test]
    fn oversized_counts_are_rejected() {
        let grid = json!({"x": [0, 1], "y": [0, 1], "z": [[0, 1], [1, 2]]});
        let mut at_limit = grid.clone();
        at_limit["levels"] = json!(MAX_LEVELS);
        assert!(check(ChartKind::Contour, at_limit).is_ok());
        let mut huge = grid;
        huge["levels"] = json!(1_000_000_000u64);
        assert!(matches!(check(ChartKind::Contour, huge), Err(PlotError::Validation(_))));

        assert!(check(ChartKind::Histogram, json!({"values": [1, 2], "bins": MAX_BINS})).is_ok());
        let err = check(ChartKind::Histogram, json!({"values": [1, 2], "bins": 1u64 << 42}));
        assert!(matches!(err, Err(PlotError::Validation(_))));
    }
}
