use std::collections::HashSet;
use std::sync::Arc;

use marketing_core::{ToolDefinition, ToolHandler};

use crate::tools;

/// Errors raised while building a registry at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("tool name must not be empty")]
    EmptyName,
}

/// A registered tool: its advertised definition and the handler that runs it.
#[derive(Clone)]
pub struct ToolEntry {
    pub definition: ToolDefinition,
    pub handler: Arc<dyn ToolHandler>,
}

impl ToolEntry {
    pub fn new(definition: ToolDefinition, handler: impl ToolHandler + 'static) -> Self {
        Self {
            definition,
            handler: Arc::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

/// Immutable, ordered table of the tools this server exposes.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Build a registry from entries, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTool`] when two entries share a name
    /// and [`RegistryError::EmptyName`] when a name is blank.
    pub fn new(entries: Vec<ToolEntry>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.name().trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if !seen.insert(entry.name()) {
                return Err(RegistryError::DuplicateTool(entry.name().to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in tool set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: vec![tools::echo::entry(), tools::meta_spend::entry()],
        }
    }

    /// Definitions for the `tools/list` method, in registration order.
    #[must_use]
    pub fn list_definitions(&self) -> Vec<ToolDefinition> {
        self.entries.iter().map(|e| e.definition.clone()).collect()
    }

    /// Look up a tool by exact name.
    pub fn find(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use marketing_core::{ToolCallResult, ToolError};
    use serde_json::Value;

    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl ToolHandler for Fixed {
        async fn call(&self, _arguments: Value) -> Result<ToolCallResult, ToolError> {
            Ok(ToolCallResult::text(self.0))
        }
    }

    fn entry(name: &str) -> ToolEntry {
        ToolEntry::new(
            ToolDefinition::new(name, "test tool", serde_json::json!({"type": "object"})),
            Fixed("ok"),
        )
    }

    #[test]
    fn builtin_tools_defined() {
        let registry = ToolRegistry::builtin();
        let names: Vec<String> = registry
            .list_definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();

        assert_eq!(names, vec!["marketing_test", "get_meta_spend_today"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn builtin_names_are_unique() {
        let builtin = ToolRegistry::builtin();
        let entries = builtin.entries.clone();
        assert!(ToolRegistry::new(entries).is_ok());
    }

    #[test]
    fn list_preserves_registration_order() {
        let registry = ToolRegistry::new(vec![entry("b"), entry("a"), entry("c")]).unwrap();
        let names: Vec<String> = registry
            .list_definitions()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let registry = ToolRegistry::new(vec![entry("echo")]).unwrap();

        assert!(registry.find("echo").is_some());
        assert!(registry.find("Echo").is_none());
        assert!(registry.find("echo ").is_none());
        assert!(registry.find("missing").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = ToolRegistry::new(vec![entry("echo"), entry("other"), entry("echo")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTool(ref name) if name == "echo"));
    }

    #[test]
    fn blank_names_rejected() {
        let err = ToolRegistry::new(vec![entry("  ")]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyName));
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_definitions().is_empty());
    }

    #[test]
    fn definitions_serialize() {
        let tools = ToolRegistry::builtin().list_definitions();
        let json = serde_json::to_string(&tools).unwrap();
        assert!(json.contains("marketing_test"));
        assert!(json.contains("inputSchema"));
    }

    #[test]
    fn echo_requires_message() {
        let registry = ToolRegistry::builtin();
        let echo = registry.find("marketing_test").unwrap();
        let required = echo.definition.input_schema["required"].as_array().unwrap();

        let required_names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(required_names, vec!["message"]);
    }
}
