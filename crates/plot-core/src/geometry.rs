// File: crates/plot-core/src/geometry.rs
// Summary: Pixel rectangles and margin-fraction math for the plotting region.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    pub fn to_skia(self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Subplot placement as fractions of the figure, measured from the bottom-left
/// corner (so `top` > `bottom` for a non-empty region).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotFractions {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl SubplotFractions {
    /// Convert pixel margins to fractions. Oversized margins are clamped so a
    /// drawing region always remains.
    pub fn from_margins(width: f32, height: f32, m: &Insets) -> Self {
        let mut f = Self {
            left: m.left / width,
            right: 1.0 - m.right / width,
            bottom: m.bottom / height,
            top: 1.0 - m.top / height,
        };
        if f.left >= f.right || f.bottom >= f.top {
            f.left = f.left.min(0.45);
            f.right = f.right.max(0.55);
            f.bottom = f.bottom.min(0.45);
            f.top = f.top.max(0.55);
        }
        f
    }

    /// Plotting region in pixel space (y grows downward).
    pub fn to_rect(self, width: f32, height: f32) -> RectF {
        RectF::from_ltrb(
            self.left * width,
            (1.0 - self.top) * height,
            self.right * width,
            (1.0 - self.bottom) * height,
        )
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_margins_become_fractions() {
        let f = SubplotFractions::from_margins(800.0, 400.0, &Insets::new(80.0, 40.0, 40.0, 80.0));
        assert!((f.left - 0.1).abs() < 1e-6);
        assert!((f.right - 0.95).abs() < 1e-6);
        assert!((f.bottom - 0.2).abs() < 1e-6);
        assert!((f.top - 0.9).abs() < 1e-6);
        let r = f.to_rect(800.0, 400.0);
        assert!((r.left - 80.0).abs() < 1e-3);
        assert!((r.right - 760.0).abs() < 1e-3);
        assert!((r.top - 40.0).abs() < 1e-3);
        assert!((r.bottom - 320.0).abs() < 1e-3);
    }

    #[test]
    fn oversized_margins_are_clamped_to_a_positive_interior() {
        let f = SubplotFractions::from_margins(100.0, 100.0, &Insets::new(90.0, 90.0, 10.0, 10.0));
        assert!((f.left - 0.45).abs() < 1e-6);
        assert!((f.right - 0.55).abs() < 1e-6);
        let r = f.to_rect(100.0, 100.0);
        assert!(r.width() > 0.0);
        assert!(r.height() > 0.0);
    }

    #[test]
    fn clamp_orders_bounds() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }
}
