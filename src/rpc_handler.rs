//! RPC method handler for the passcheck JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! `App` struct.

use serde_json::{json, Value};

use crate::app::App;
use crate::types::generation::GenerationConfig;

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &App, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Analysis ───
        "password.analyze" => {
            let password = params.get("password").and_then(|v| v.as_str()).ok_or("missing password")?;
            let report = app.analyze_now(password).await;
            serde_json::to_value(report).map_err(|e| e.to_string())
        }
        "password.input" => {
            let input = params.get("input").and_then(|v| v.as_str()).ok_or("missing input")?;
            let request_id = app.submit_input(input);
            Ok(json!({"request_id": request_id}))
        }
        "analysis.state" => serde_json::to_value(app.state()).map_err(|e| e.to_string()),

        // ─── Generator ───
        "generator.generate" => {
            let config: GenerationConfig = serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            let batch = app.generate_batch(&config).map_err(|e| e.to_string())?;
            Ok(json!({"items": batch}))
        }
        "generator.strongest" => Ok(json!({"item": app.strongest()})),

        // ─── History ───
        "history.list" => Ok(json!({"items": app.history()})),
        "history.clear" => {
            app.clear_history();
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
