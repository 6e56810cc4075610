// File: crates/plot-core/src/stats.rs
// Summary: Histogram binning and box-plot summary statistics.

/// Equal-width histogram over the finite samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Bar heights: raw counts, or densities when requested.
    pub heights: Vec<f64>,
}

impl Histogram {
    pub fn bin_width(&self, i: usize) -> f64 {
        self.edges[i + 1] - self.edges[i]
    }
}

/// Bucket `values` into `bins` equal-width bins spanning `[min, max]`; the last
/// bin includes its right edge. A flat range is widened to `±0.5`. With
/// `density`, each height is `count / (total * bin_width)` so that the bar
/// areas sum to one.
pub fn histogram_bins(values: &[f64], bins: usize, density: bool) -> Histogram {
    let bins = bins.max(1);
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if finite.is_empty() {
        lo = 0.0;
        hi = 1.0;
    } else if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in &finite {
        let idx = (((v - lo) / width).floor() as isize).clamp(0, bins as isize - 1) as usize;
        counts[idx] += 1;
    }

    let total = finite.len();
    let heights = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if density && total > 0 {
                c as f64 / (total as f64 * (edges[i + 1] - edges[i]))
            } else {
                c as f64
            }
        })
        .collect();
    Histogram { edges, heights }
}

/// Linear-interpolated quantile of sorted data (`q` in `[0, 1]`).
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let i = pos.floor() as usize;
    let frac = pos - i as f64;
    if i + 1 < sorted.len() {
        sorted[i] + (sorted[i + 1] - sorted[i]) * frac
    } else {
        sorted[i]
    }
}

/// Five-number summary plus Tukey whiskers and outliers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest sample within `q1 - 1.5 IQR`.
    pub whisker_lo: f64,
    /// Highest sample within `q3 + 1.5 IQR`.
    pub whisker_hi: f64,
    pub outliers: Vec<f64>,
}

pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let whisker_lo = sorted.iter().copied().find(|&v| v >= lo_fence).unwrap_or(q1);
    let whisker_hi = sorted.iter().rev().copied().find(|&v| v <= hi_fence).unwrap_or(q3);
    let outliers = sorted.iter().copied().filter(|&v| v < lo_fence || v > hi_fence).collect();

    Some(BoxStats { q1, median, q3, whisker_lo, whisker_hi, outliers })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_areas_sum_to_one() {
        let h = histogram_bins(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0], 5, true);
        let area: f64 = h.heights.iter().enumerate().map(|(i, v)| v * h.bin_width(i)).sum();
        assert!((area - 1.0).abs() < 1e-12);
    }

    #[test]
    fn counts_include_right_edge_in_last_bin() {
        let h = histogram_bins(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0], 5, false);
        assert_eq!(h.heights, vec![1.0, 2.0, 3.0, 2.0, 1.0]);
        assert_eq!(h.edges.len(), 6);
        assert_eq!(h.edges[0], 1.0);
        assert_eq!(h.edges[5], 5.0);
    }

    #[test]
    fn flat_samples_get_unit_range() {
        let h = histogram_bins(&[2.0, 2.0], 2, false);
        assert_eq!(h.edges, vec![1.5, 2.0, 2.5]);
        assert_eq!(h.heights.iter().sum::<f64>(), 2.0);
    }

    #[test]
    fn quantiles_interpolate() {
        let s = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&s, 0.5), 2.5);
        assert_eq!(quantile(&s, 0.25), 1.75);
        assert_eq!(quantile(&s, 1.0), 4.0);
    }

    #[test]
    fn box_stats_split_outliers() {
        let b = box_stats(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(b.median, 3.5);
        assert_eq!(b.outliers, vec![100.0]);
        assert_eq!(b.whisker_hi, 5.0);
        assert_eq!(b.whisker_lo, 1.0);
        assert!(box_stats(&[]).is_none());
    }
}
