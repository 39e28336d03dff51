use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use marketing_mcp::dispatch::is_notification;
use marketing_mcp::jsonrpc::{INTERNAL_ERROR, PARSE_ERROR};
use marketing_mcp::{JsonRpcRequest, JsonRpcResponse};

use crate::app_state::AppState;

/// Handle a JSON-RPC request posted to `/mcp`.
///
/// Always answers with a JSON-RPC envelope, except for notifications which
/// get `202 Accepted` and an empty body.
pub async fn mcp_request(State(state): State<AppState>, body: Bytes) -> Response {
    let raw: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable MCP request body");
            let resp = JsonRpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {e}"));
            return envelope(StatusCode::BAD_REQUEST, &resp);
        }
    };

    let response = match serde_json::from_value::<JsonRpcRequest>(raw.clone()) {
        Ok(req) if is_notification(&req) => {
            tracing::info!(method = req.method.as_deref().unwrap_or_default(), "received MCP notification");
            return StatusCode::ACCEPTED.into_response();
        }
        Ok(req) => state.dispatcher.handle(req).await,
        Err(_) => state.dispatcher.handle_value(raw).await,
    };

    envelope(StatusCode::OK, &response)
}

/// `GET /mcp` is not supported.
pub async fn mcp_get() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
}

fn envelope(status: StatusCode, resp: &JsonRpcResponse) -> Response {
    match serde_json::to_value(resp) {
        Ok(value) => (status, Json(value)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize MCP response");
            let fallback = serde_json::json!({
                "jsonrpc": "2.0",
                "error": { "code": INTERNAL_ERROR, "message": "Internal server error" },
                "id": null
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(fallback)).into_response()
        }
    }
}
