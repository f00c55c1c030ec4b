//! Project overview tool handler

use super::handler::McpToolHandler;
use super::helpers::doc_result;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsOverviewHandler {
    services: Arc<Services>,
}

impl DocsOverviewHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsOverviewHandler {
    fn name(&self) -> &str {
        "docs_overview"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_overview".to_string(),
            description: "Get the project overview: architecture, key directories and \
                          development guidelines from the root documentation file. \
                          Start here before asking for plugin, API or subsystem details."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        doc_result(self.services.resolver.overview())
    }
}
