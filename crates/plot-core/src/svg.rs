// File: crates/plot-core/src/svg.rs
// Summary: SVG finalization: strip the XML prolog and attach size and viewBox metadata.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Outcome of one render. Exactly one of `svg` / `svg_path` is set once the
/// result has passed through delivery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    pub svg: Option<String>,
    pub svg_path: Option<String>,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "viewBox")]
    pub view_box: String,
}

impl RenderResult {
    pub fn inline(svg: String, width: f32, height: f32) -> Self {
        Self { svg: Some(svg), svg_path: None, width, height, view_box: view_box(width, height) }
    }
}

/// `"0 0 {width} {height}"`, without a fractional part for whole sizes.
pub fn view_box(width: f32, height: f32) -> String {
    format!("0 0 {width} {height}")
}

/// Keep the document from its first `<svg` tag on.
pub fn finalize(document: &[u8], width: f32, height: f32) -> PlotResult<RenderResult> {
    let text = std::str::from_utf8(document).map_err(|e| PlotError::render(format!("SVG is not UTF-8: {e}")))?;
    let start = text
        .find("<svg")
        .ok_or_else(|| PlotError::render("serialized canvas has no <svg> element"))?;
    Ok(RenderResult::inline(text[start..].to_string(), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prolog_is_stripped() {
        let doc = br#"<?xml version="1.0" encoding="utf-8" ?><svg width="10" height="5"></svg>"#;
        let r = finalize(doc, 10.0, 5.0).unwrap();
        assert!(r.svg.as_deref().unwrap().starts_with("<svg"));
        assert_eq!(r.view_box, "0 0 10 5");
        assert!(r.svg_path.is_none());
    }

    #[test]
    fn missing_svg_tag_is_an_error() {
        assert!(matches!(finalize(b"<html/>", 1.0, 1.0), Err(PlotError::Render(_))));
    }

    #[test]
    fn view_box_formats_whole_and_fractional_sizes() {
        assert_eq!(view_box(800.0, 400.0), "0 0 800 400");
        assert_eq!(view_box(640.5, 480.0), "0 0 640.5 480");
    }

    #[test]
    fn serializes_view_box_key() {
        let json = serde_json::to_value(RenderResult::inline("<svg/>".into(), 2.0, 3.0)).unwrap();
        assert_eq!(json["viewBox"], "0 0 2 3");
        assert_eq!(json["width"], 2.0);
    }
}
