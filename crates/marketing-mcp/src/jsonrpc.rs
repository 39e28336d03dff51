use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-RPC 2.0 request.
///
/// Every field is optional on the wire so that malformed requests can still be
/// answered with a correlated error envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Build a request with the given id and method.
    pub fn new(id: impl Into<Value>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: Some(JSONRPC_VERSION.to_string()),
            id: id.into(),
            method: Some(method.into()),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self::error_with_data(id, code, message, None)
    }

    /// Create an error response carrying auxiliary data.
    pub fn error_with_data(
        id: Value,
        code: i32,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data,
            }),
        }
    }

    /// Error code of a failure response.
    pub fn error_code(&self) -> Option<i32> {
        self.error.as_ref().map(|e| e.code)
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
/// Generic server error, used for tool handler faults.
pub const SERVER_ERROR: i32 = -32000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_optional_and_null_params_absent() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"id": "req-7", "method": "ping", "params": null}"#).unwrap();
        assert!(req.jsonrpc.is_none());
        assert_eq!(req.id, serde_json::json!("req-7"));
        assert!(req.params.is_none());

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("jsonrpc").is_none());
        assert!(json.get("params").is_none());
    }

    #[test]
    fn new_request_sets_version() {
        let req = JsonRpcRequest::new(2.5, "tools/list", None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jsonrpc"], JSONRPC_VERSION);
        assert_eq!(json["id"], 2.5);
        assert_eq!(json["method"], "tools/list");
    }

    #[test]
    fn parse_request_without_id_or_method() {
        let req: JsonRpcRequest = serde_json::from_str(r#"{"jsonrpc": "2.0"}"#).unwrap();
        assert!(req.id.is_null());
        assert!(req.method.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn success_response_round_trips_string_id() {
        let resp = JsonRpcResponse::success(
            serde_json::json!("9f1c"),
            serde_json::json!({"content": []}),
        );
        assert_eq!(resp.error_code(), None);

        let back: JsonRpcResponse =
            serde_json::from_str(&serde_json::to_string(&resp).unwrap()).unwrap();
        assert_eq!(back, resp);
        assert_eq!(back.jsonrpc, JSONRPC_VERSION);
    }

    #[test]
    fn error_response() {
        let resp = JsonRpcResponse::error(
            serde_json::json!("abc"),
            METHOD_NOT_FOUND,
            "Method not found",
        );
        assert!(resp.result.is_none());
        assert_eq!(resp.error_code(), Some(METHOD_NOT_FOUND));

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], "abc");
        assert!(json["error"].get("data").is_none());
        assert!(json.get("result").is_none());
    }

    #[test]
    fn error_response_with_data() {
        let resp = JsonRpcResponse::error_with_data(
            Value::Null,
            SERVER_ERROR,
            "Server error",
            Some(serde_json::json!({"message": "boom"})),
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], Value::Null);
        assert_eq!(json["error"]["code"], -32000);
        assert_eq!(json["error"]["data"]["message"], "boom");
    }

    #[test]
    fn request_with_params() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "abc",
            "method": "tools/call",
            "params": {
                "name": "marketing_test",
                "arguments": {
                    "message": "hello"
                }
            }
        }"#;
        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method.as_deref(), Some("tools/call"));

        let params = req.params.unwrap();
        assert_eq!(params["name"], "marketing_test");
        assert_eq!(params["arguments"]["message"], "hello");
    }
}
