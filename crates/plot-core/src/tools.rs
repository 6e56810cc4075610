// File: crates/plot-core/src/tools.rs
// Summary: The nine plot_* tools: catalog entries and the deserialize/validate/render/deliver path.

use serde_json::{json, Value};
use tracing::{info_span, warn};

use crate::delivery::{deliver, Delivered, DeliveryConfig};
use crate::error::{PlotError, PlotResult};
use crate::render::render;
use crate::request::{ChartKind, ChartSpec};
use crate::svg::RenderResult;
use crate::validate::validate;

/// Catalog entry for one tool.
#[derive(Clone, Copy, Debug)]
pub struct ToolInfo {
    pub name: &'static str,
    pub kind: ChartKind,
    pub description: &'static str,
    /// Fields the request object must carry.
    pub required: &'static [&'static str],
}

const FILE_NOTE: &str = " Returns a file path if an output directory is configured.";

pub static TOOLS: [ToolInfo; 9] = [
    ToolInfo {
        name: "plot_line",
        kind: ChartKind::Line,
        description: "Render one or more continuous 2D lines.",
        required: &["series"],
    },
    ToolInfo { name: "plot_scatter", kind: ChartKind::Scatter, description: "Render discrete 2D points.", required: &["x", "y"] },
    ToolInfo {
        name: "plot_bar",
        kind: ChartKind::Bar,
        description: "Render a categorical bar chart.",
        required: &["categories", "values"],
    },
    ToolInfo { name: "plot_area", kind: ChartKind::Area, description: "Render the filled area under a curve.", required: &["x", "y"] },
    ToolInfo { name: "plot_histogram", kind: ChartKind::Histogram, description: "Render a 1D histogram.", required: &["values"] },
    ToolInfo { name: "plot_box", kind: ChartKind::Box, description: "Render a box plot from raw values.", required: &["groups"] },
    ToolInfo {
        name: "plot_heatmap",
        kind: ChartKind::Heatmap,
        description: "Render a 2D matrix as a color grid.",
        required: &["matrix", "x_labels", "y_labels"],
    },
    ToolInfo {
        name: "plot_contour",
        kind: ChartKind::Contour,
        description: "Render 2D contour lines from grid data.",
        required: &["x", "y", "z"],
    },
    ToolInfo {
        name: "plot_pie",
        kind: ChartKind::Pie,
        description: "Render a circular pie or donut chart.",
        required: &["labels", "values"],
    },
];

impl ToolInfo {
    pub fn find(name: &str) -> Option<&'static ToolInfo> {
        TOOLS.iter().find(|t| t.name == name)
    }

    pub fn full_description(&self) -> String {
        format!("{}{FILE_NOTE}", self.description)
    }

    /// Loose JSON schema: an object with the required data fields; style
    /// fields are optional and checked on call.
    pub fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "required": self.required,
            "additionalProperties": true,
        })
    }
}

/// What a tool call hands back: the structured result inline, or the marker
/// text pointing at the written file.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolOutput {
    Result(RenderResult),
    Marker(String),
}

impl ToolOutput {
    /// Text form for transports that only carry text.
    pub fn to_text(&self) -> PlotResult<String> {
        match self {
            Self::Result(r) => Ok(serde_json::to_string(r)?),
            Self::Marker(m) => Ok(m.clone()),
        }
    }
}

/// Parse `arguments` for `name`, validate, render and deliver.
pub fn call_tool(name: &str, arguments: Value, config: &DeliveryConfig) -> PlotResult<ToolOutput> {
    let tool = ToolInfo::find(name).ok_or_else(|| PlotError::UnknownTool(name.to_string()))?;
    let span = info_span!("tool", name = tool.name);
    let _enter = span.enter();

    let arguments = if arguments.is_null() { json!({}) } else { arguments };
    let spec = ChartSpec::from_json(tool.kind, arguments)?;
    if let Err(e) = validate(&spec) {
        warn!(error = %e, "rejected request");
        return Err(e);
    }

    let result = render(&spec)?;
    let title = spec.frame().title.as_deref();
    Ok(match deliver(config, tool.kind, title, result)? {
        Delivered::Inline(r) => ToolOutput::Result(r),
        Delivered::File { marker, .. } => ToolOutput::Marker(marker),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind_once() {
        for kind in ChartKind::ALL {
            let n = TOOLS.iter().filter(|t| t.kind == kind).count();
            assert_eq!(n, 1, "{kind}");
            let tool = TOOLS.iter().find(|t| t.kind == kind).unwrap();
            assert_eq!(tool.name, format!("plot_{kind}"));
        }
    }

    #[test]
    fn unknown_tool_is_an_error() {
        let err = call_tool("plot_radar", json!({}), &DeliveryConfig::inline()).unwrap_err();
        assert!(matches!(err, PlotError::UnknownTool(_)));
    }

    #[test]
    fn malformed_arguments_fail_before_rendering() {
        let err = call_tool("plot_bar", json!({"categories": "a"}), &DeliveryConfig::inline()).unwrap_err();
        assert!(matches!(err, PlotError::Json(_)));
    }

    #[test]
    fn schema_lists_required_fields() {
        let schema = ToolInfo::find("plot_heatmap").unwrap().input_schema();
        assert_eq!(schema["required"], json!(["matrix", "x_labels", "y_labels"]));
    }
}
