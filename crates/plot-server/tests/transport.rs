// File: crates/plot-server/tests/transport.rs
// Purpose: Drive the line transport over in-memory pipes and a real TCP socket.

use std::io::{BufRead, BufReader, Cursor, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;

use plot_core::{parse_marker, DeliveryConfig};
use plot_server::{serve_lines, serve_listener};
use serde_json::{json, Value};

fn call_line(id: u64, name: &str, arguments: Value) -> String {
    json!({"jsonrpc": "2.0", "id": id, "method": "tools/call", "params": {"name": name, "arguments": arguments}})
        .to_string()
}

fn bar_args() -> Value {
    json!({"categories": ["a", "b"], "values": [3, 5], "title": "Quarterly"})
}

#[test]
fn stdio_session_answers_each_request_in_order() {
    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#.to_string(),
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.to_string(),
        String::new(),
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#.to_string(),
        call_line(3, "plot_bar", bar_args()),
    ]
    .join("\n");

    let mut out = Vec::new();
    serve_lines(Cursor::new(input), &mut out, &DeliveryConfig::inline()).unwrap();

    let replies: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies.iter().map(|r| r["id"].as_u64().unwrap()).collect::<Vec<_>>(), vec![1, 2, 3]);

    let call = &replies[2]["result"];
    assert_eq!(call["isError"], false);
    let text: Value = serde_json::from_str(call["content"][0]["text"].as_str().unwrap()).unwrap();
    assert!(text["svg"].as_str().unwrap().starts_with("<svg"));
    assert!(text["svg_path"].is_null());
    assert_eq!(text["viewBox"], "0 0 800 400");
}

#[test]
fn tcp_file_mode_returns_marker() {
    let dir = tempfile::tempdir().unwrap();
    let config = Arc::new(DeliveryConfig::to_dir(dir.path()).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || serve_listener(listener, config));

    let mut stream = TcpStream::connect(addr).unwrap();
    writeln!(stream, "{}", call_line(7, "plot_bar", bar_args())).unwrap();
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();

    let reply: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(reply["id"], 7);
    let text = reply["result"]["content"][0]["text"].as_str().unwrap();
    let path = parse_marker(text).expect("marker");
    assert!(path.contains("bar_") && path.ends_with("_quarterly.svg"), "{path}");
    assert!(std::fs::metadata(path).unwrap().len() > 0);
}
