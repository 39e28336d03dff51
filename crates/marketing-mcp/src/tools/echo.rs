//! `marketing_test`: confirms the server is reachable by echoing a message.

use async_trait::async_trait;
use serde_json::Value;

use marketing_core::{ToolCallResult, ToolDefinition, ToolError, ToolHandler};

use crate::registry::ToolEntry;

pub const NAME: &str = "marketing_test";

pub struct Echo;

/// Text returned for a given message.
pub fn confirmation(message: &str) -> String {
    format!("Remote MCP working. You said: {message}")
}

#[async_trait]
impl ToolHandler for Echo {
    async fn call(&self, arguments: Value) -> Result<ToolCallResult, ToolError> {
        // Non-string or missing messages are echoed as empty.
        let message = arguments
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(ToolCallResult::text(confirmation(message)))
    }
}

pub fn definition() -> ToolDefinition {
    ToolDefinition::new(
        NAME,
        "Test tool to confirm remote MCP server works",
        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Any message"
                }
            },
            "required": ["message"],
            "additionalProperties": false
        }),
    )
    .with_title("Marketing Test")
    .with_execution(serde_json::json!({ "taskSupport": "forbidden" }))
}

pub fn entry() -> ToolEntry {
    ToolEntry::new(definition(), Echo)
}
