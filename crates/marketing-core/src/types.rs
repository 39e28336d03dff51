use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Definition of a tool as advertised through `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution: Option<Value>,
}

impl ToolDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: description.into(),
            input_schema,
            execution: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_execution(mut self, execution: Value) -> Self {
        self.execution = Some(execution);
        self
    }
}

/// A single content block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The text payload of this block.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Result of a successful `tools/call`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolCallResult {
    /// A result holding one text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text)],
            is_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_serializes_camel_case_schema() {
        let def = ToolDefinition::new("echo", "Echo", serde_json::json!({"type": "object"}))
            .with_title("Echo Tool");
        let json = serde_json::to_value(&def).unwrap();

        assert_eq!(json["inputSchema"]["type"], "object");
        assert_eq!(json["title"], "Echo Tool");
        assert!(json.get("execution").is_none());
    }

    #[test]
    fn text_result_shape() {
        let result = ToolCallResult::text("hello");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"content": [{"type": "text", "text": "hello"}]})
        );
    }

    #[test]
    fn error_flag_serialized_when_set() {
        let result = ToolCallResult {
            content: vec![Content::text("boom")],
            is_error: Some(true),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], true);
    }

    #[test]
    fn parse_result() {
        let json = r#"{"content":[{"type":"text","text":"x"}]}"#;
        let result: ToolCallResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.content[0].as_text(), "x");
        assert!(result.is_error.is_none());
    }
}
