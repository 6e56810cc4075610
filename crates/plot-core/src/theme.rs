// File: crates/plot-core/src/theme.rs
// Summary: Chart chrome colors, font sizes and the series color cycle.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    /// Bar/box outlines and histogram edges.
    pub edge: skia::Color,
    /// Box-plot medians.
    pub accent: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_fill: skia::Color,
    pub cell_text: skia::Color,
    pub tick_font: f32,
    pub label_font: f32,
    pub title_font: f32,
    pub tick_length: f32,
    pub spine_width: f32,
    pub cycle: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            spine: skia::Color::from_rgb(0, 0, 0),
            tick: skia::Color::from_rgb(0, 0, 0),
            tick_label: skia::Color::from_rgb(0, 0, 0),
            axis_label: skia::Color::from_rgb(0, 0, 0),
            title: skia::Color::from_rgb(0, 0, 0),
            edge: skia::Color::from_rgb(0, 0, 0),
            accent: skia::Color::from_rgb(0xff, 0x7f, 0x0e),
            legend_frame: skia::Color::from_rgb(0xcc, 0xcc, 0xcc),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            cell_text: skia::Color::WHITE,
            tick_font: 10.0,
            label_font: 10.0,
            title_font: 12.0,
            tick_length: 3.5,
            spine_width: 0.8,
            // tab10
            cycle: [
                skia::Color::from_rgb(0x1f, 0x77, 0xb4),
                skia::Color::from_rgb(0xff, 0x7f, 0x0e),
                skia::Color::from_rgb(0x2c, 0xa0, 0x2c),
                skia::Color::from_rgb(0xd6, 0x27, 0x28),
                skia::Color::from_rgb(0x94, 0x67, 0xbd),
                skia::Color::from_rgb(0x8c, 0x56, 0x4b),
                skia::Color::from_rgb(0xe3, 0x77, 0xc2),
                skia::Color::from_rgb(0x7f, 0x7f, 0x7f),
                skia::Color::from_rgb(0xbc, 0xbd, 0x22),
                skia::Color::from_rgb(0x17, 0xbe, 0xcf),
            ],
        }
    }

    /// The `i`-th series color, wrapping around the cycle.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.cycle[i % self.cycle.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
