use axum::Json;
use serde_json::Value;

use marketing_mcp::dispatch::SERVER_NAME;

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "ok": true, "service": SERVER_NAME }))
}
