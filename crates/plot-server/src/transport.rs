// File: crates/plot-server/src/transport.rs
// Summary: Stdio and TCP transports; one JSON-RPC message per line in each direction.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use plot_core::DeliveryConfig;
use tracing::{debug, info, warn};

use crate::protocol::handle_line;

/// Answer every request line from `reader` on `writer` until EOF.
pub fn serve_lines<R: BufRead, W: Write>(reader: R, writer: &mut W, config: &DeliveryConfig) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(reply) = handle_line(&line, config) {
            writeln!(writer, "{reply}")?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Serve over the process' stdin/stdout.
pub fn serve_stdio(config: &DeliveryConfig) -> Result<()> {
    info!("serving on stdio");
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    serve_lines(stdin, &mut stdout, config).context("stdio transport failed")
}

/// Bind `host:port` and serve connections until the listener fails.
pub fn serve_tcp(host: &str, port: u16, config: Arc<DeliveryConfig>) -> Result<()> {
    let listener = TcpListener::bind((host, port)).with_context(|| format!("binding {host}:{port}"))?;
    serve_listener(listener, config)
}

/// Accept loop; each connection is served on its own thread.
pub fn serve_listener(listener: TcpListener, config: Arc<DeliveryConfig>) -> Result<()> {
    info!(addr = %listener.local_addr()?, "listening");
    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };
        let config = Arc::clone(&config);
        thread::spawn(move || {
            let peer = stream.peer_addr().map(|a| a.to_string()).unwrap_or_else(|_| "?".into());
            debug!(%peer, "connection opened");
            match serve_connection(stream, &config) {
                Ok(()) => debug!(%peer, "connection closed"),
                Err(e) => warn!(%peer, error = %e, "connection failed"),
            }
        });
    }
    Ok(())
}

fn serve_connection(stream: TcpStream, config: &DeliveryConfig) -> io::Result<()> {
    let reader = BufReader::new(stream.try_clone()?);
    let mut writer = stream;
    serve_lines(reader, &mut writer, config)
}
