// File: crates/plot-server/src/lib.rs
// Summary: Server library: JSON-RPC message handling and the stdio/TCP transports.

pub mod protocol;
pub mod transport;

pub use protocol::handle_line;
pub use transport::{serve_lines, serve_listener, serve_stdio, serve_tcp};
