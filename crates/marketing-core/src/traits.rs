use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;
use crate::types::ToolCallResult;

/// Executes a single tool call.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with the given arguments object.
    ///
    /// Arguments are passed through unvalidated; each handler checks the
    /// fields it reads.
    async fn call(&self, arguments: Value) -> Result<ToolCallResult, ToolError>;
}
