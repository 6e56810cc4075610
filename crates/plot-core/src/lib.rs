// File: crates/plot-core/src/lib.rs
// Summary: Core library for SVG chart rendering: geometry, renderers, finalization and delivery.

pub mod axes;
pub mod axis;
pub mod color;
pub mod colormap;
pub mod contour;
pub mod delivery;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod request;
pub mod scale;
pub mod stats;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tools;
pub mod types;
pub mod validate;

pub use axis::{Axis, ScaleKind};
pub use delivery::{local_image_marker, parse_marker, DeliveryConfig};
pub use error::{PlotError, PlotResult};
pub use render::render;
pub use request::{ChartKind, ChartSpec, Frame};
pub use svg::RenderResult;
pub use tools::{call_tool, ToolInfo, ToolOutput, TOOLS};
pub use types::{Insets, DPI, HEIGHT, WIDTH};
