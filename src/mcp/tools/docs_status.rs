//! Cache status tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::format_time_ago;
use crate::core::cache::CacheStatus;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsStatusHandler {
    services: Arc<Services>,
}

impl DocsStatusHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_status(&self, status: &CacheStatus) -> String {
        let config = &self.services.config;
        let mut output = String::from("# Documentation Cache\n\n");

        output.push_str(&format!("- **State:** {:?}\n", status.state));
        output.push_str(&format!("- **Root:** `{}`\n", config.docs.root.display()));
        match status.generation {
            Some(generation) => output.push_str(&format!("- **Generation:** {generation}\n")),
            None => output.push_str("- **Generation:** none (not yet populated)\n"),
        }
        if let Some(built_at) = status.built_at {
            output.push_str(&format!(
                "- **Built:** {} ({})\n",
                built_at.format("%Y-%m-%d %H:%M:%S UTC"),
                format_time_ago(built_at)
            ));
        }
        output.push_str(&format!("- **Documents:** {}\n", status.document_count));

        if !status.documents_by_category.is_empty() {
            output.push_str("\n## Documents by Category\n\n");
            for (category, count) in &status.documents_by_category {
                output.push_str(&format!("- {}: {}\n", category.title(), count));
            }
        }

        if !status.warnings.is_empty() {
            output.push_str(&format!("\n## Warnings ({})\n\n", status.warnings.len()));
            for warning in &status.warnings {
                output.push_str(&format!("- {warning}\n"));
            }
        }

        if let Some(err) = &status.last_error {
            output.push_str(&format!("\n**Last refresh error:** {err}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for DocsStatusHandler {
    fn name(&self) -> &str {
        "docs_status"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_status".to_string(),
            description: "Show the documentation cache state: snapshot generation, build \
                          time, document counts per category, scan warnings and the last \
                          refresh error."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let status = self.services.resolver.cache_status();
        Ok(text_content(self.format_status(&status)))
    }
}
