// File: crates/plot-core/src/grid.rs
// Summary: Tick placement and tick-label formatting for linear, log and symlog axes.

use crate::axis::ScaleKind;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` up to the next 1/2/2.5/5 x 10^n step.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Evenly stepped "nice" values inside `[lo, hi]`, roughly `target` of them.
pub fn linear_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        return vec![lo];
    }
    let step = nice_step(span / target.max(1) as f64);
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Powers of ten inside `[lo, hi]`; falls back to linear ticks when fewer than
/// two decades are visible.
pub fn log_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi <= 0.0 {
        return Vec::new();
    }
    let lo = lo.max(f64::MIN_POSITIVE);
    let first = (lo.log10() - 1e-9).ceil() as i32;
    let last = (hi.log10() + 1e-9).floor() as i32;
    if last - first < 1 {
        return linear_ticks(lo, hi, target).into_iter().filter(|v| *v > 0.0).collect();
    }
    let stride = (((last - first + 1) as usize).div_ceil(target.max(1))).max(1);
    (first..=last).step_by(stride).map(|k| 10f64.powi(k)).collect()
}

/// Zero plus signed powers of ten inside `[lo, hi]`.
pub fn symlog_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut out = Vec::new();
    let max_abs = lo.abs().max(hi.abs());
    if max_abs < 1.0 {
        return linear_ticks(lo, hi, 4);
    }
    let top = max_abs.log10().floor() as i32;
    for k in (0..=top).rev() {
        let v = -10f64.powi(k);
        if v >= lo {
            out.push(v);
        }
    }
    if lo <= 0.0 && hi >= 0.0 {
        out.push(0.0);
    }
    for k in 0..=top {
        let v = 10f64.powi(k);
        if v <= hi {
            out.push(v);
        }
    }
    out
}

pub fn ticks_for(kind: ScaleKind, lo: f64, hi: f64, target: usize) -> Vec<f64> {
    match kind {
        ScaleKind::Linear => linear_ticks(lo, hi, target),
        ScaleKind::Log => log_ticks(lo, hi, target),
        ScaleKind::Symlog => symlog_ticks(lo, hi),
    }
}

/// Format a tick value for `kind`. Linear labels use just enough decimals to
/// tell neighbouring ticks apart.
pub fn format_tick(kind: ScaleKind, v: f64, ticks: &[f64]) -> String {
    let is_decade = v != 0.0 && (v.abs().log10() - v.abs().log10().round()).abs() < 1e-9;
    match kind {
        ScaleKind::Log | ScaleKind::Symlog if is_decade => {
            let exp = v.abs().log10().round() as i32;
            let sign = if v < 0.0 { "-" } else { "" };
            format!("{sign}10{}", superscript(exp))
        }
        _ => {
            let step = ticks
                .windows(2)
                .map(|w| (w[1] - w[0]).abs())
                .fold(f64::INFINITY, f64::min);
            format_number(v, if step.is_finite() { step } else { v.abs() })
        }
    }
}

/// Format `v` with the decimals implied by `resolution`.
pub fn format_number(v: f64, resolution: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if v.abs() >= 1e6 || v.abs() < 1e-4 {
        return format!("{v:.2e}");
    }
    let mut decimals = 0usize;
    if resolution > 0.0 && resolution.is_finite() {
        while decimals < 6 {
            let scaled = resolution * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0) {
                break;
            }
            decimals += 1;
        }
    }
    format!("{v:.decimals$}")
}

/// Compact label for a contour level: up to three decimals, trailing zeros trimmed.
pub fn format_level(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn superscript(n: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for c in n.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    out
}
