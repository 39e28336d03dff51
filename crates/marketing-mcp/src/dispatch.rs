//! JSON-RPC method dispatch over a [`ToolRegistry`].
//!
//! Every request is answered with a response envelope. Tool faults,
//! including panics, are mapped to [`SERVER_ERROR`] and never propagate.
//! No particular async runtime is required.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::jsonrpc::{
    JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND,
    SERVER_ERROR,
};
use crate::registry::ToolRegistry;

pub const SERVER_NAME: &str = "marketing-mcp";
pub const DEFAULT_PROTOCOL_VERSION: &str = "2025-03-26";

/// Stateless request handler shared across connections.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle a raw JSON value that may not be a well-formed request.
    pub async fn handle_value(&self, raw: Value) -> JsonRpcResponse {
        let id = raw.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(req) => self.handle(req).await,
            Err(e) => {
                tracing::warn!(error = %e, "malformed JSON-RPC request");
                server_error(id, e.to_string())
            }
        }
    }

    /// Handle a single request.
    pub async fn handle(&self, req: JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id;
        let method = req.method.unwrap_or_default();
        let params = req.params;

        if method.is_empty() {
            return JsonRpcResponse::error(id, INVALID_REQUEST, "Invalid Request: missing method");
        }

        tracing::debug!(%method, %id, "dispatching request");

        match method.as_str() {
            "initialize" => handle_initialize(id, params.as_ref()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, params).await,
            _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {method}")),
        }
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools = self.registry.list_definitions();
        JsonRpcResponse::success(id, serde_json::json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let params = params.unwrap_or(Value::Null);

        let Some(tool_name) = params
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
        else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "Invalid params: 'name' is required");
        };

        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => Value::Object(serde_json::Map::new()),
            Some(args) => args.clone(),
        };

        let Some(entry) = self.registry.find(tool_name.trim()) else {
            return JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Tool not found: {tool_name}"));
        };

        let outcome = AssertUnwindSafe(entry.handler.call(arguments))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(result)) => match serde_json::to_value(result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => server_error(id, e.to_string()),
            },
            Ok(Err(e)) => {
                tracing::warn!(tool = tool_name, error = %e, "tool call failed");
                server_error(id, e.to_string())
            }
            Err(_) => {
                tracing::warn!(tool = tool_name, "tool handler panicked");
                server_error(id, "tool handler panicked".to_string())
            }
        }
    }
}

/// True for requests that expect no response.
pub fn is_notification(req: &JsonRpcRequest) -> bool {
    req.id.is_null()
        && req
            .method
            .as_deref()
            .is_some_and(|m| m.starts_with("notifications/"))
}

fn handle_initialize(id: Value, params: Option<&Value>) -> JsonRpcResponse {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    JsonRpcResponse::success(
        id,
        serde_json::json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": {},
                "logging": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }),
    )
}

fn server_error(id: Value, message: String) -> JsonRpcResponse {
    JsonRpcResponse::error_with_data(
        id,
        SERVER_ERROR,
        "Server error",
        Some(serde_json::json!({ "message": message })),
    )
}
