// File: crates/plot-core/src/request.rs
// Summary: Flat chart request records (data + style in one object per chart kind).

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, ScaleKind};
use crate::color::TRANSPARENT;
use crate::colormap::ColorScale;
use crate::error::PlotResult;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Style fields shared by every chart kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_margin_top")]
    pub margin_top: f32,
    #[serde(default = "default_margin_right")]
    pub margin_right: f32,
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f32,
    #[serde(default = "default_margin_left")]
    pub margin_left: f32,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub x_scale: ScaleKind,
    #[serde(default)]
    pub y_scale: ScaleKind,
    #[serde(default)]
    pub x_min: Option<f64>,
    #[serde(default)]
    pub x_max: Option<f64>,
    #[serde(default)]
    pub y_min: Option<f64>,
    #[serde(default)]
    pub y_max: Option<f64>,
}

fn default_width() -> f32 {
    WIDTH
}
fn default_height() -> f32 {
    HEIGHT
}
fn default_background() -> String {
    "white".to_string()
}
fn default_margin_top() -> f32 {
    Insets::default().top
}
fn default_margin_right() -> f32 {
    Insets::default().right
}
fn default_margin_bottom() -> f32 {
    Insets::default().bottom
}
fn default_margin_left() -> f32 {
    Insets::default().left
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            title: None,
            width: WIDTH,
            height: HEIGHT,
            background: default_background(),
            margin_top: default_margin_top(),
            margin_right: default_margin_right(),
            margin_bottom: default_margin_bottom(),
            margin_left: default_margin_left(),
            x_label: None,
            y_label: None,
            x_scale: ScaleKind::Linear,
            y_scale: ScaleKind::Linear,
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
        }
    }
}

impl Frame {
    pub fn insets(&self) -> Insets {
        Insets::new(self.margin_left, self.margin_right, self.margin_top, self.margin_bottom)
    }

    pub fn x_axis(&self) -> Axis {
        Axis::new(self.x_label.clone(), self.x_scale, self.x_min, self.x_max)
    }

    pub fn y_axis(&self) -> Axis {
        Axis::new(self.y_label.clone(), self.y_scale, self.y_min, self.y_max)
    }

    pub fn is_transparent(&self) -> bool {
        self.background.trim().eq_ignore_ascii_case(TRANSPARENT)
    }
}

// ---- line -------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub series: Vec<LineSeries>,
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default)]
    pub show_markers: bool,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_stroke_width() -> f32 {
    2.0
}

// ---- scatter ----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default = "default_point_radius")]
    pub point_radius: f32,
    #[serde(default = "default_fill")]
    pub color: String,
    #[serde(default = "default_opaque")]
    pub opacity: f64,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_point_radius() -> f32 {
    4.0
}
fn default_fill() -> String {
    "steelblue".to_string()
}
fn default_opaque() -> f64 {
    1.0
}

// ---- bar --------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_fill")]
    pub color: String,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_bar_width() -> f64 {
    0.8
}

// ---- area -------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaChart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default = "default_fill")]
    pub fill_color: String,
    #[serde(default = "default_area_opacity")]
    pub opacity: f64,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_area_opacity() -> f64 {
    0.6
}

// ---- histogram --------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramChart {
    pub values: Vec<f64>,
    #[serde(default = "default_bins")]
    pub bins: usize,
    #[serde(default)]
    pub density: bool,
    #[serde(default = "default_fill")]
    pub color: String,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_bins() -> usize {
    10
}

// ---- box --------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxGroup {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxChart {
    pub groups: Vec<BoxGroup>,
    #[serde(default = "default_box_width")]
    pub box_width: f64,
    #[serde(default = "default_box_color")]
    pub color: String,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_box_width() -> f64 {
    0.6
}
fn default_box_color() -> String {
    "black".to_string()
}

// ---- heatmap ----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    pub matrix: Vec<Vec<f64>>,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    #[serde(default)]
    pub color_scale: ColorScale,
    #[serde(default)]
    pub show_values: bool,
    #[serde(flatten)]
    pub frame: Frame,
}

// ---- contour ----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContourChart {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    #[serde(default = "default_levels")]
    pub levels: usize,
    #[serde(default = "default_contour_stroke")]
    pub stroke_width: f32,
    #[serde(flatten)]
    pub frame: Frame,
}

fn default_levels() -> usize {
    10
}
fn default_contour_stroke() -> f32 {
    1.0
}

// ---- pie --------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub inner_radius_ratio: f64,
    #[serde(default)]
    pub start_angle: f64,
    #[serde(flatten)]
    pub frame: Frame,
}

// ---- dispatch ---------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Scatter,
    Bar,
    Area,
    Histogram,
    Box,
    Heatmap,
    Contour,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 9] = [
        Self::Line,
        Self::Scatter,
        Self::Bar,
        Self::Area,
        Self::Histogram,
        Self::Box,
        Self::Heatmap,
        Self::Contour,
        Self::Pie,
    ];

    /// Short name used in filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Area => "area",
            Self::Histogram => "histogram",
            Self::Box => "box",
            Self::Heatmap => "heatmap",
            Self::Contour => "contour",
            Self::Pie => "pie",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart request of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartSpec {
    Line(LineChart),
    Scatter(ScatterChart),
    Bar(BarChart),
    Area(AreaChart),
    Histogram(HistogramChart),
    Box(BoxChart),
    Heatmap(HeatmapChart),
    Contour(ContourChart),
    Pie(PieChart),
}

impl ChartSpec {
    /// Deserialize the flat request object for `kind`.
    pub fn from_json(kind: ChartKind, value: serde_json::Value) -> PlotResult<Self> {
        Ok(match kind {
            ChartKind::Line => Self::Line(serde_json::from_value(value)?),
            ChartKind::Scatter => Self::Scatter(serde_json::from_value(value)?),
            ChartKind::Bar => Self::Bar(serde_json::from_value(value)?),
            ChartKind::Area => Self::Area(serde_json::from_value(value)?),
            ChartKind::Histogram => Self::Histogram(serde_json::from_value(value)?),
            ChartKind::Box => Self::Box(serde_json::from_value(value)?),
            ChartKind::Heatmap => Self::Heatmap(serde_json::from_value(value)?),
            ChartKind::Contour => Self::Contour(serde_json::from_value(value)?),
            ChartKind::Pie => Self::Pie(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Bar(_) => ChartKind::Bar,
            Self::Area(_) => ChartKind::Area,
            Self::Histogram(_) => ChartKind::Histogram,
            Self::Box(_) => ChartKind::Box,
            Self::Heatmap(_) => ChartKind::Heatmap,
            Self::Contour(_) => ChartKind::Contour,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    pub fn frame(&self) -> &Frame {
        match self {
            Self::Line(c) => &c.frame,
            Self::Scatter(c) => &c.frame,
            Self::Bar(c) => &c.frame,
            Self::Area(c) => &c.frame,
            Self::Histogram(c) => &c.frame,
            Self::Box(c) => &c.frame,
            Self::Heatmap(c) => &c.frame,
            Self::Contour(c) => &c.frame,
            Self::Pie(c) => &c.frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_line_request_fills_defaults() {
        let spec = ChartSpec::from_json(
            ChartKind::Line,
            json!({"series": [{"name": "Sales", "x": [1, 2, 3], "y": [10, 25, 15]}], "width": 640}),
        )
        .unwrap();
        let ChartSpec::Line(line) = spec else { panic!("expected line") };
        assert_eq!(line.frame.width, 640.0);
        assert_eq!(line.frame.height, HEIGHT);
        assert_eq!(line.line_style, LineStyle::Solid);
        assert_eq!(line.stroke_width, 2.0);
        assert_eq!(line.frame.background, "white");
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let err = ChartSpec::from_json(
            ChartKind::Bar,
            json!({"categories": ["a"], "values": [1], "orientation": "diagonal"}),
        );
        assert!(err.is_err());
    }

    #[test]
    fn missing_required_data_is_rejected() {
        assert!(ChartSpec::from_json(ChartKind::Pie, json!({"labels": ["a"]})).is_err());
    }

    #[test]
    fn kind_names_round_trip() {
        for k in ChartKind::ALL {
            assert_eq!(ChartKind::from_name(k.as_str()), Some(k));
        }
        assert_eq!(ChartKind::from_name("radar"), None);
    }

    #[test]
    fn frame_builds_axes_and_insets() {
        let f = Frame { x_label: Some("t".into()), y_scale: ScaleKind::Log, y_min: Some(1.0), ..Frame::default() };
        assert_eq!(f.x_axis().label.as_deref(), Some("t"));
        assert_eq!(f.y_axis().kind, ScaleKind::Log);
        assert_eq!(f.y_axis().min, Some(1.0));
        assert_eq!(f.insets(), Insets::default());
        assert!(!f.is_transparent());
        assert!(Frame { background: "Transparent".into(), ..Frame::default() }.is_transparent());
    }
}
