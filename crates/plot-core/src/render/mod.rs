// File: crates/plot-core/src/render/mod.rs
// Summary: Render pipeline: figure setup, per-kind drawing, title, SVG finalization.

mod area;
mod bar;
mod boxplot;
mod contour;
mod heatmap;
mod histogram;
mod line;
mod pie;
mod scatter;

pub use pie::{wedge_layout, Wedge};

use skia_safe as skia;
use tracing::{debug, info_span};

use crate::axes::{Axes, AxisMap};
use crate::color::{parse_color, with_opacity};
use crate::error::{PlotError, PlotResult};
use crate::figure::Figure;
use crate::request::{ChartSpec, Frame};
use crate::scale::{Extent, Fit};
use crate::svg::{finalize, RenderResult};

/// matplotlib's default data margin.
pub(crate) const AUTO_MARGIN: f64 = 0.05;

/// Render one chart to a finalized SVG result.
pub fn render(spec: &ChartSpec) -> PlotResult<RenderResult> {
    let kind = spec.kind();
    let span = info_span!("render", %kind);
    let _enter = span.enter();

    let fig = Figure::new(spec.frame())?;
    match spec {
        ChartSpec::Line(c) => line::draw(&fig, c)?,
        ChartSpec::Scatter(c) => scatter::draw(&fig, c)?,
        ChartSpec::Bar(c) => bar::draw(&fig, c)?,
        ChartSpec::Area(c) => area::draw(&fig, c)?,
        ChartSpec::Histogram(c) => histogram::draw(&fig, c)?,
        ChartSpec::Box(c) => boxplot::draw(&fig, c)?,
        ChartSpec::Heatmap(c) => heatmap::draw(&fig, c)?,
        ChartSpec::Contour(c) => contour::draw(&fig, c)?,
        ChartSpec::Pie(c) => pie::draw(&fig, c)?,
    }
    fig.draw_title();

    let (width, height) = (fig.width, fig.height);
    let bytes = fig.finish();
    debug!(bytes = bytes.len(), "canvas serialized");
    finalize(&bytes, width, height)
}

/// Resolve a style color; unknown names are a rendering failure here.
pub(crate) fn style_color(value: &str, opacity: f64) -> PlotResult<skia::Color> {
    parse_color(value)
        .map(|c| with_opacity(c, opacity))
        .ok_or_else(|| PlotError::render(format!("cannot resolve color '{value}'")))
}

/// Cartesian axes over the figure's plot rectangle with continuous x and y.
pub(crate) fn continuous_axes(fig: &Figure, frame: &Frame, xs: &Extent, x_fit: Fit, ys: &Extent, y_fit: Fit) -> Axes {
    let plot = fig.plot;
    let x = AxisMap::continuous(&frame.x_axis(), xs, x_fit, plot.left, plot.right);
    let y = AxisMap::continuous(&frame.y_axis(), ys, y_fit, plot.bottom, plot.top);
    Axes::new(plot, x, y)
}

/// Draw `body` clipped to the axes, then the axes frame on top.
pub(crate) fn with_axes(fig: &Figure, axes: &Axes, body: impl FnOnce(&skia::Canvas)) {
    let canvas = fig.canvas();
    axes.clip(canvas);
    body(canvas);
    canvas.restore();
    axes.draw_frame(fig);
}

/// Polyline through `points`; a non-finite point breaks the line.
pub(crate) fn polyline(axes: &Axes, points: impl IntoIterator<Item = (f64, f64)>) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (x, y) in points {
        let (px, py) = axes.px(x, y);
        if !(px.is_finite() && py.is_finite()) {
            pen_down = false;
            continue;
        }
        if pen_down {
            path.line_to((px, py));
        } else {
            path.move_to((px, py));
            pen_down = true;
        }
    }
    path
}
