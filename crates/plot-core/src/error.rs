// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for validation, rendering, delivery and tool dispatch.

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// Malformed or inconsistent request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure inside a renderer or the SVG finalizer.
    #[error("render error: {0}")]
    Render(String),

    /// Directory creation or file write failure in file mode.
    #[error("filesystem error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl PlotError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
