// File: crates/plot-server/src/main.rs
// Summary: plot-server entry point: parse flags, init logging, pick delivery mode and transport.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use plot_core::DeliveryConfig;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// JSON-RPC over stdin/stdout.
    Stdio,
    /// JSON-RPC over a TCP listener, one message per line.
    Tcp,
}

#[derive(Parser, Debug)]
#[command(name = "plot-server", version, about = "SVG chart tools over JSON-RPC")]
struct Cli {
    /// Save SVGs here and return file paths instead of inline SVG.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Port for the TCP transport.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Bind address for the TCP transport.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// trace, debug, info, warn or error.
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the protocol in stdio mode
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .with_target(false)
        .init();

    let config = match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;
            DeliveryConfig::to_dir(dir)?
        }
        None => DeliveryConfig::inline(),
    };
    match config.output_dir() {
        Some(dir) => info!(dir = %dir.display(), "file mode"),
        None => info!("inline mode"),
    }

    let config = Arc::new(config);
    match cli.transport {
        Transport::Stdio => plot_server::serve_stdio(&config),
        Transport::Tcp => plot_server::serve_tcp(&cli.host, cli.port, config),
    }
}
