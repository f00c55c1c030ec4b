//! Tool lookup by name

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tools keyed by name, listed alphabetically so `tools/list` is
/// stable across runs
#[derive(Default)]
pub struct ToolRegistry {
    handlers: BTreeMap<String, Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    /// Add a tool; a later tool with the same name replaces it
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        self.handlers.insert(handler.name().to_string(), handler);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.get(name)
    }

    pub fn list(&self) -> Vec<ToolSchema> {
        self.handlers.values().map(|h| h.schema()).collect()
    }
}

impl FromIterator<Arc<dyn McpToolHandler>> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn McpToolHandler>>>(iter: I) -> Self {
        let mut registry = Self::default();
        for handler in iter {
            registry.register(handler);
        }
        registry
    }
}
