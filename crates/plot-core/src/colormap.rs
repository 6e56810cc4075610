// File: crates/plot-core/src/colormap.rs
// Summary: Named sequential color scales (viridis, plasma, gray) sampled by linear interpolation.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::geometry::clamp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    #[default]
    Viridis,
    Plasma,
    Gray,
}

// Eleven evenly spaced stops of each map.
const VIRIDIS: [u32; 11] = [
    0x440154, 0x482475, 0x414487, 0x355f8d, 0x2a788e, 0x21918c, 0x22a884, 0x44bf70, 0x7ad151,
    0xbddf26, 0xfde725,
];
const PLASMA: [u32; 11] = [
    0x0d0887, 0x41049d, 0x6a00a8, 0x8f0da4, 0xb12a90, 0xcc4778, 0xe16462, 0xf2844b, 0xfca636,
    0xfcce25, 0xf0f921,
];
const GRAY: [u32; 2] = [0x000000, 0xffffff];

impl ColorScale {
    fn stops(self) -> &'static [u32] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Gray => &GRAY,
        }
    }

    /// Color at `t` in `[0, 1]`; out-of-range and NaN inputs clamp to the ends.
    pub fn sample(self, t: f64) -> skia::Color {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { clamp(t, 0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let f = pos - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        let mix = |shift: u32| {
            let ca = ((a >> shift) & 0xff) as f64;
            let cb = ((b >> shift) & 0xff) as f64;
            (ca + (cb - ca) * f).round() as u8
        };
        skia::Color::from_rgb(mix(16), mix(8), mix(0))
    }
}

/// Normalize `v` into `[0, 1]` over `[lo, hi]`; a flat range maps to 0.
pub fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    if hi - lo <= f64::EPSILON * hi.abs().max(1.0) { 0.0 } else { (v - lo) / (hi - lo) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_stops() {
        assert_eq!(ColorScale::Viridis.sample(0.0), skia::Color::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(ColorScale::Viridis.sample(1.0), skia::Color::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(ColorScale::Plasma.sample(1.0), skia::Color::from_rgb(0xf0, 0xf9, 0x21));
    }

    #[test]
    fn gray_interpolates_linearly() {
        let mid = ColorScale::Gray.sample(0.5);
        assert_eq!((mid.r(), mid.g(), mid.b()), (128, 128, 128));
        assert_eq!(ColorScale::Gray.sample(-3.0), skia::Color::BLACK);
        assert_eq!(ColorScale::Gray.sample(f64::NAN), skia::Color::BLACK);
    }

    #[test]
    fn normalize_handles_flat_ranges() {
        assert_eq!(normalize(5.0, 5.0, 5.0), 0.0);
        assert_eq!(normalize(7.5, 5.0, 10.0), 0.5);
    }

    #[test]
    fn scale_names_parse() {
        let s: ColorScale = serde_json::from_str("\"plasma\"").unwrap();
        assert_eq!(s, ColorScale::Plasma);
    }
}
