// File: crates/plot-core/tests/delivery.rs
// Purpose: File-mode delivery: written files, naming, markers, concurrent writers and write failures.

use std::path::Path;
use std::sync::Arc;

use plot_core::{call_tool, parse_marker, DeliveryConfig, PlotError, ToolOutput};
use serde_json::{json, Value};

fn sales(title: Option<&str>) -> Value {
    let mut v = json!({"series": [{"name": "Sales", "x": [1, 2, 3, 4, 5], "y": [10, 25, 15, 30, 20]}]});
    if let Some(t) = title {
        v["title"] = json!(t);
    }
    v
}

fn marker_path(out: ToolOutput) -> String {
    match out {
        ToolOutput::Marker(m) => parse_marker(&m).expect("marker block").to_string(),
        ToolOutput::Result(r) => panic!("file mode returned inline result: {r:?}"),
    }
}

/// `{kind}_{YYYYMMDD_HHMMSS}_{slug}.svg`
fn name_matches(name: &str, kind: &str, slug_ok: impl Fn(&str) -> bool) -> bool {
    let Some(rest) = name.strip_prefix(&format!("{kind}_")).and_then(|r| r.strip_suffix(".svg")) else {
        return false;
    };
    let (stamp, slug) = rest.split_at(rest.len().min(15));
    let digits: Vec<&str> = stamp.split('_').collect();
    digits.len() == 2
        && digits[0].len() == 8
        && digits[1].len() == 6
        && digits.iter().all(|d| d.chars().all(|c| c.is_ascii_digit()))
        && slug.strip_prefix('_').is_some_and(slug_ok)
}

#[test]
fn file_mode_writes_one_svg_and_returns_marker() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested/out");
    let cfg = DeliveryConfig::to_dir(&out_dir).unwrap();

    let path = marker_path(call_tool("plot_line", sales(Some("Sales")), &cfg).unwrap());
    let path = Path::new(&path);
    assert!(path.starts_with(&out_dir));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name_matches(name, "line", |s| s == "sales"), "{name}");

    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.starts_with("<svg"));
    assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 1);
}

#[test]
fn untitled_charts_use_hex_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DeliveryConfig::to_dir(dir.path()).unwrap();
    let path = marker_path(call_tool("plot_line", sales(None), &cfg).unwrap());
    let name = Path::new(&path).file_name().unwrap().to_str().unwrap().to_string();
    assert!(
        name_matches(&name, "line", |s| s.len() == 8 && s.chars().all(|c| c.is_ascii_hexdigit())),
        "{name}"
    );
}

#[test]
fn same_title_same_second_does_not_clobber() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Arc::new(DeliveryConfig::to_dir(dir.path()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cfg = Arc::clone(&cfg);
            std::thread::spawn(move || marker_path(call_tool("plot_line", sales(Some("Dup")), &cfg).unwrap()))
        })
        .collect();
    let mut paths: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 4);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
}

#[test]
fn inline_mode_never_touches_disk() {
    let out = call_tool("plot_line", sales(Some("Sales")), &DeliveryConfig::inline()).unwrap();
    let ToolOutput::Result(r) = out else { panic!("expected inline result") };
    assert!(r.svg.is_some());
    assert!(r.svg_path.is_none());
}

#[test]
fn failed_requests_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DeliveryConfig::to_dir(dir.path()).unwrap();
    assert!(call_tool("plot_pie", json!({"labels": ["a"], "values": [0]}), &cfg).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_output_dir_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = tempfile::NamedTempFile::new_in(dir.path()).unwrap();

    for target in [blocker.path().to_path_buf(), blocker.path().join("sub")] {
        let cfg = DeliveryConfig::to_dir(&target).unwrap();
        let err = call_tool("plot_line", sales(Some("Sales")), &cfg).unwrap_err();
        assert!(matches!(err, PlotError::Io { .. }), "{err:?}");
    }

    let svgs = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "svg"))
        .count();
    assert_eq!(svgs, 0);
    assert!(blocker.path().is_file());
}
