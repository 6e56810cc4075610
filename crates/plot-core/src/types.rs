// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (sizes, density, margins).

/// Default surface width in pixels.
pub const WIDTH: f32 = 800.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 400.0;
/// Reference density: one SVG user unit is one pixel at 72 units/inch.
pub const DPI: f32 = 72.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative (enforced by validation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64.0, 24.0, 40.0, 56.0)
    }
}
