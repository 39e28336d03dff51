use std::sync::Arc;

use marketing_mcp::{Dispatcher, ToolRegistry};

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::new(registry)),
        }
    }
}
