use reqwest::Client;
use serde_json::Value;

use marketing_mcp::{JsonRpcRequest, JsonRpcResponse};

/// Minimal JSON-RPC client for a running server.
pub struct McpClient {
    http: Client,
    base_url: String,
}

impl McpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the health document.
    #[allow(clippy::missing_errors_doc)]
    pub async fn health(&self) -> anyhow::Result<Value> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("Health check failed with status {}", resp.status());
        }
        Ok(resp.json().await?)
    }

    /// Send one request; the id is a fresh UUID.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, an undecodable body, or a success response
    /// whose id does not match the request.
    pub async fn request(&self, method: &str, params: Option<Value>) -> anyhow::Result<JsonRpcResponse> {
        let req = JsonRpcRequest::new(uuid::Uuid::new_v4().to_string(), method, params);
        tracing::debug!(%method, id = %req.id, "sending request");

        let resp = self
            .http
            .post(format!("{}/mcp", self.base_url))
            .json(&req)
            .send()
            .await?
            .json::<JsonRpcResponse>()
            .await?;

        check_correlation(&req.id, &resp)?;
        Ok(resp)
    }

    #[allow(clippy::missing_errors_doc)]
    pub async fn list_tools(&self) -> anyhow::Result<JsonRpcResponse> {
        self.request("tools/list", None).await
    }

    #[allow(clippy::missing_errors_doc)]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> anyhow::Result<JsonRpcResponse> {
        self.request(
            "tools/call",
            Some(serde_json::json!({ "name": name, "arguments": arguments })),
        )
        .await
    }
}

/// A success response must echo our id. Error envelopes are passed through
/// even with a null id, since the server may not have read ours.
fn check_correlation(request_id: &Value, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    if resp.error.is_none() && resp.id != *request_id {
        anyhow::bail!("Response id {} does not match request id {}", resp.id, request_id);
    }
    Ok(())
}
