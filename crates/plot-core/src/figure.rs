// File: crates/plot-core/src/figure.rs
// Summary: Per-request drawing surface: SVG canvas, background, plotting rectangle and title.

use skia_safe as skia;
use tracing::debug;

use crate::color::parse_color;
use crate::error::{PlotError, PlotResult};
use crate::geometry::{RectF, SubplotFractions};
use crate::request::Frame;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::DPI;

/// Gap between the plot rectangle and the title baseline, in pixels.
const TITLE_GAP: f32 = 6.0;

/// The canvas of one render. Owned by the render call that creates it and
/// consumed by [`Figure::finish`].
pub struct Figure {
    canvas: skia::svg::Canvas,
    pub width: f32,
    pub height: f32,
    /// Interior drawing region after margins.
    pub plot: RectF,
    pub theme: Theme,
    pub shaper: TextShaper,
    title: Option<String>,
}

impl Figure {
    pub fn new(frame: &Frame) -> PlotResult<Self> {
        let (width, height) = (frame.width, frame.height);
        let background = if frame.is_transparent() {
            None
        } else {
            Some(parse_color(&frame.background).ok_or_else(|| {
                PlotError::validation(format!("unknown background color '{}'", frame.background))
            })?)
        };

        let canvas = skia::svg::Canvas::new(skia::Rect::from_wh(width, height), None);
        // Transparent figures get no background element at all.
        if let Some(bg) = background {
            canvas.draw_rect(skia::Rect::from_wh(width, height), &fill_paint(bg));
        }

        let plot = SubplotFractions::from_margins(width, height, &frame.insets()).to_rect(width, height);
        debug!(width, height, dpi = DPI, ?plot, "figure created");

        Ok(Self {
            canvas,
            width,
            height,
            plot,
            theme: Theme::default(),
            shaper: TextShaper::new(),
            title: frame.title.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn canvas(&self) -> &skia::Canvas {
        &self.canvas
    }

    /// Draw the title centered above the plot rectangle, inside the top margin.
    pub fn draw_title(&self) {
        if let Some(title) = &self.title {
            let (cx, _) = self.plot.center();
            self.shaper.draw(
                self.canvas(),
                title,
                (cx, self.plot.top - TITLE_GAP),
                self.theme.title_font,
                self.theme.title,
                HAlign::Center,
                VAlign::Bottom,
            );
        }
    }

    /// Serialize the drawing; the figure is gone afterwards.
    pub fn finish(self) -> Vec<u8> {
        self.canvas.end().as_bytes().to_vec()
    }
}

pub fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}
