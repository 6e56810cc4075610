// File: crates/plot-core/src/scale.rs
// Summary: Data extents, automatic ranges and value-to-pixel transforms for linear/log/symlog axes.

use crate::axis::ScaleKind;

/// Smallest value accepted on a log axis.
const LOG_EPS: f64 = 1e-12;
/// Linear threshold of the symmetric-log transform.
const SYMLOG_THRESHOLD: f64 = 1.0;

/// Map a data value into the scale's transformed (linear) space.
#[inline]
pub fn forward(kind: ScaleKind, v: f64) -> f64 {
    match kind {
        ScaleKind::Linear => v,
        ScaleKind::Log => v.max(LOG_EPS).log10(),
        ScaleKind::Symlog => v.signum() * (1.0 + v.abs() / SYMLOG_THRESHOLD).log10(),
    }
}

/// Inverse of [`forward`].
#[inline]
pub fn inverse(kind: ScaleKind, t: f64) -> f64 {
    match kind {
        ScaleKind::Linear => t,
        ScaleKind::Log => 10f64.powf(t),
        ScaleKind::Symlog => t.signum() * (10f64.powf(t.abs()) - 1.0) * SYMLOG_THRESHOLD,
    }
}

/// Running min/max over finite samples, also tracking the smallest positive
/// value so log axes can ignore non-positive data.
#[derive(Clone, Copy, Debug)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
    pub min_positive: f64,
}

impl Default for Extent {
    fn default() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY, min_positive: f64::INFINITY }
    }
}

impl Extent {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let mut e = Self::default();
        e.extend(values);
        e
    }

    pub fn push(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        if v > 0.0 {
            self.min_positive = self.min_positive.min(v);
        }
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        for v in values {
            self.push(v);
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite())
    }

    /// Range usable by `kind`, or a unit fallback when no usable sample exists.
    pub fn usable(&self, kind: ScaleKind) -> (f64, f64) {
        if self.is_empty() {
            return match kind {
                ScaleKind::Log => (1.0, 10.0),
                _ => (0.0, 1.0),
            };
        }
        match kind {
            ScaleKind::Log if self.max <= 0.0 => (1.0, 10.0),
            ScaleKind::Log => (self.min.max(self.min_positive), self.max),
            _ => (self.min, self.max),
        }
    }
}

/// How the automatic range hugs the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fit {
    /// Exact data extent.
    Tight,
    /// Extent padded by a fraction of the span (in transformed space).
    Padded(f64),
    /// Padded, but never past `at` when the data starts or ends on it.
    Sticky { pad: f64, at: f64 },
}

/// Automatic axis range for `extent` under `kind` and `fit`.
pub fn auto_range(kind: ScaleKind, extent: &Extent, fit: Fit) -> (f64, f64) {
    let (lo, hi) = extent.usable(kind);
    let t_lo = forward(kind, lo);
    let t_hi = forward(kind, hi);
    if (t_hi - t_lo).abs() < 1e-12 {
        return (inverse(kind, t_lo - 0.5), inverse(kind, t_hi + 0.5));
    }
    let pad = match fit {
        Fit::Tight => 0.0,
        Fit::Padded(p) | Fit::Sticky { pad: p, .. } => p,
    };
    let span = t_hi - t_lo;
    let (mut out_lo, mut out_hi) = (inverse(kind, t_lo - pad * span), inverse(kind, t_hi + pad * span));
    if let Fit::Sticky { at, .. } = fit {
        if lo >= at && out_lo < at {
            out_lo = at;
        }
        if hi <= at && out_hi > at {
            out_hi = at;
        }
    }
    (out_lo, out_hi)
}

/// Maps data values on one axis to pixel positions. `px_start` is where
/// `vmin` lands and `px_end` where `vmax` lands, so inverted axes are just a
/// swapped pair.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub kind: ScaleKind,
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
    // cached transformed endpoints
    t_min: f64,
    t_max: f64,
}

impl ValueScale {
    pub fn new(kind: ScaleKind, mut vmin: f64, mut vmax: f64, px_start: f32, px_end: f32) -> Self {
        if kind == ScaleKind::Log {
            // Ensure strictly positive range for log scale
            vmin = if vmin <= LOG_EPS { LOG_EPS } else { vmin };
            vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        }
        let t_min = forward(kind, vmin);
        let mut t_max = forward(kind, vmax);
        if (t_max - t_min).abs() < 1e-12 {
            t_max = t_min + 1.0;
            vmax = inverse(kind, t_max);
        }
        Self { kind, vmin, vmax, px_start, px_end, t_min, t_max }
    }

    pub fn linear(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        Self::new(ScaleKind::Linear, vmin, vmax, px_start, px_end)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (forward(self.kind, v) - self.t_min) / (self.t_max - self.t_min);
        self.px_start + frac as f32 * (self.px_end - self.px_start)
    }

    /// Whether `v` lies inside the visible domain (inclusive, either order).
    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.vmin <= self.vmax { (self.vmin, self.vmax) } else { (self.vmax, self.vmin) };
        let tol = (hi - lo).abs() * 1e-9;
        v >= lo - tol && v <= hi + tol
    }
}
