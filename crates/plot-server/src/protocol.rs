// File: crates/plot-server/src/protocol.rs
// Summary: Line-delimited JSON-RPC 2.0 handling for initialize, tools/list and tools/call.

use plot_core::{call_tool, DeliveryConfig, ToolOutput, TOOLS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    jsonrpc: Option<String>,
    /// Absent for notifications.
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Serialize)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Serialize)]
struct Response {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
}

impl Response {
    fn ok(id: Value, result: Value) -> Self {
        Self { jsonrpc: "2.0", id, result: Some(result), error: None }
    }

    fn err(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self { jsonrpc: "2.0", id, result: None, error: Some(RpcError { code, message: message.into() }) }
    }
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn tools_list() -> Value {
    let tools: Vec<Value> = TOOLS
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "description": t.full_description(),
                "inputSchema": t.input_schema(),
            })
        })
        .collect();
    json!({ "tools": tools })
}

/// Tool results travel as text content; failures set `isError` instead of
/// becoming JSON-RPC errors.
fn tools_call(params: CallParams, config: &DeliveryConfig) -> Value {
    let outcome = call_tool(&params.name, params.arguments, config)
        .and_then(|out| Ok((out.to_text()?, out)));
    match outcome {
        Ok((text, ToolOutput::Result(result))) => json!({
            "content": [{ "type": "text", "text": text }],
            "structuredContent": result,
            "isError": false,
        }),
        Ok((text, ToolOutput::Marker(_))) => json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false,
        }),
        Err(e) => {
            warn!(tool = %params.name, error = %e, "tool call failed");
            json!({
                "content": [{ "type": "text", "text": e.to_string() }],
                "isError": true,
            })
        }
    }
}

fn dispatch(req: Request, config: &DeliveryConfig) -> Option<Response> {
    let Some(id) = req.id else {
        debug!(method = %req.method, "notification");
        return None;
    };
    if req.jsonrpc.as_deref() != Some("2.0") {
        return Some(Response::err(id, INVALID_REQUEST, "jsonrpc must be \"2.0\""));
    }
    let response = match req.method.as_str() {
        "initialize" => Response::ok(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": "plot-server", "version": env!("CARGO_PKG_VERSION") },
            }),
        ),
        "ping" => Response::ok(id, json!({})),
        "tools/list" => Response::ok(id, tools_list()),
        "tools/call" => match serde_json::from_value::<CallParams>(req.params) {
            Ok(params) => Response::ok(id, tools_call(params, config)),
            Err(e) => Response::err(id, INVALID_PARAMS, format!("invalid tools/call params: {e}")),
        },
        other => Response::err(id, METHOD_NOT_FOUND, format!("method not found: {other}")),
    };
    Some(response)
}

/// Handle one input line; `None` when no reply is due (notifications).
pub fn handle_line(line: &str, config: &DeliveryConfig) -> Option<String> {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(req) => dispatch(req, config)?,
        Err(e) => Response::err(Value::Null, PARSE_ERROR, format!("parse error: {e}")),
    };
    match serde_json::to_string(&response) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(error = %e, "failed to encode response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(line: &str) -> Value {
        serde_json::from_str(&handle_line(line, &DeliveryConfig::inline()).unwrap()).unwrap()
    }

    #[test]
    fn initialize_reports_tools_capability() {
        let v = reply(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#);
        assert_eq!(v["id"], 1);
        assert_eq!(v["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert!(v["result"]["capabilities"]["tools"].is_object());
    }

    #[test]
    fn notifications_get_no_reply() {
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(handle_line(line, &DeliveryConfig::inline()).is_none());
    }

    #[test]
    fn list_has_nine_tools() {
        let v = reply(r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#);
        let tools = v["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 9);
        assert!(tools.iter().all(|t| t["name"].as_str().unwrap().starts_with("plot_")));
    }

    #[test]
    fn errors_use_jsonrpc_codes() {
        assert_eq!(reply("{not json")["error"]["code"], PARSE_ERROR);
        assert_eq!(reply(r#"{"jsonrpc":"2.0","id":2,"method":"nope"}"#)["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(reply(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{}}"#)["error"]["code"], INVALID_PARAMS);
        assert_eq!(reply(r#"{"jsonrpc":"1.0","id":4,"method":"ping"}"#)["error"]["code"], INVALID_REQUEST);
    }

    #[test]
    fn failed_tool_call_sets_is_error() {
        let v = reply(
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"plot_pie","arguments":{"labels":["a"],"values":[]}}}"#,
        );
        assert_eq!(v["result"]["isError"], true);
        assert!(v["result"]["content"][0]["text"].as_str().unwrap().contains("validation"));
    }
}
