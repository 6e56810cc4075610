// File: crates/plot-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a small bar chart to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares text for an exact match.
// - Else, logs a note and returns without failing.

use plot_core::{call_tool, DeliveryConfig, ToolOutput};
use serde_json::json;

fn render_svg() -> String {
    let args = json!({
        "categories": ["north", "south", "east", "west"],
        "values": [4.0, 2.5, -1.0, 3.0],
        "width": 320, "height": 200,
    });
    match call_tool("plot_bar", args, &DeliveryConfig::inline()).expect("render") {
        ToolOutput::Result(r) => r.svg.expect("inline svg"),
        ToolOutput::Marker(m) => panic!("unexpected marker {m}"),
    }
}

#[test]
fn golden_bar_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("bar_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
