// File: crates/plot-core/src/delivery.rs
// Summary: Inline vs file-mode result delivery, output filenames and the local_image marker.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{PlotError, PlotResult};
use crate::request::ChartKind;
use crate::svg::RenderResult;

const MARKER_OPEN: &str = "```local_image";
const MARKER_CLOSE: &str = "```";
const SLUG_MAX: usize = 30;
const HEX_LEN: usize = 8;

/// Where finished renders go. Built once at startup and shared read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryConfig {
    output_dir: Option<PathBuf>,
}

impl DeliveryConfig {
    /// Return SVG text in the response.
    pub fn inline() -> Self {
        Self { output_dir: None }
    }

    /// Write each render under `dir` and return its path. Relative paths are
    /// resolved against the current directory.
    pub fn to_dir(dir: impl AsRef<Path>) -> PlotResult<Self> {
        let dir = dir.as_ref();
        let abs = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| PlotError::io("resolving current directory", e))?
                .join(dir)
        };
        Ok(Self { output_dir: Some(abs) })
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn is_file_mode(&self) -> bool {
        self.output_dir.is_some()
    }
}

/// Payload handed back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Delivered {
    Inline(RenderResult),
    File { result: RenderResult, marker: String },
}

/// Apply the delivery mode to a freshly rendered result.
pub fn deliver(
    config: &DeliveryConfig,
    kind: ChartKind,
    title: Option<&str>,
    mut result: RenderResult,
) -> PlotResult<Delivered> {
    let Some(dir) = config.output_dir() else {
        debug!(%kind, "inline delivery");
        return Ok(Delivered::Inline(result));
    };
    let svg = result
        .svg
        .take()
        .ok_or_else(|| PlotError::render("render produced no SVG text"))?;

    let path = write_new_file(dir, kind, title, svg.as_bytes())?;
    let path = path.to_string_lossy().into_owned();
    info!(%kind, path = %path, bytes = svg.len(), "chart written");

    let marker = local_image_marker(&path);
    result.svg_path = Some(path);
    Ok(Delivered::File { result, marker })
}

/// Create `dir` if needed and write `bytes` to a fresh file there.
fn write_new_file(dir: &Path, kind: ChartKind, title: Option<&str>, bytes: &[u8]) -> PlotResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| PlotError::io(format!("creating {}", dir.display()), e))?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut path = dir.join(file_name(kind, &stamp, &slug(title)));
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!(path = %path.display(), "output name taken, using random suffix");
            path = dir.join(file_name(kind, &stamp, &random_hex()));
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .map_err(|e| PlotError::io(format!("creating {}", path.display()), e))?
        }
        Err(e) => return Err(PlotError::io(format!("creating {}", path.display()), e)),
    };

    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(&path);
        return Err(PlotError::io(format!("writing {}", path.display()), e));
    }
    Ok(path)
}

/// `{kind}_{stamp}_{slug}.svg`
pub fn file_name(kind: ChartKind, stamp: &str, slug: &str) -> String {
    format!("{kind}_{stamp}_{slug}.svg")
}

/// Lowercased ASCII alphanumerics of `title`, at most 30 characters; eight
/// random hex digits when nothing survives.
pub fn slug(title: Option<&str>) -> String {
    let s: String = title
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(SLUG_MAX)
        .collect();
    if s.is_empty() { random_hex() } else { s }
}

fn random_hex() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..HEX_LEN].to_string()
}

/// The three-line fenced block announcing a saved image.
pub fn local_image_marker(path: &str) -> String {
    format!("{MARKER_OPEN}\n{path}\n{MARKER_CLOSE}")
}

/// Path inside a marker block, if `text` is one.
pub fn parse_marker(text: &str) -> Option<&str> {
    let mut lines = text.trim().lines();
    if lines.next()?.trim_end() != MARKER_OPEN {
        return None;
    }
    let path = lines.next()?.trim();
    (!path.is_empty() && path != MARKER_CLOSE).then_some(path)
}
