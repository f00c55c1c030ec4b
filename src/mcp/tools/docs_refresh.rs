//! Documentation refresh tool handler
//!
//! Rescans the documentation root and swaps in a new snapshot.
//! Concurrent calls share one rebuild.

use super::handler::{text_content, McpToolHandler};
use super::helpers::doc_result;
use crate::core::resolver::RefreshReport;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsRefreshHandler {
    services: Arc<Services>,
}

impl DocsRefreshHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_report(report: &RefreshReport) -> String {
        let mut output = String::from("# Documentation Refreshed\n\n");
        output.push_str(&format!("- **Generation:** {}\n", report.generation));
        output.push_str(&format!("- **Documents:** {}\n", report.document_count));
        if report.coalesced {
            output.push_str("- **Note:** joined a refresh already in progress\n");
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!("\n## Warnings ({})\n\n", report.warnings.len()));
            for warning in &report.warnings {
                output.push_str(&format!("- {warning}\n"));
            }
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for DocsRefreshHandler {
    fn name(&self) -> &str {
        "docs_refresh"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_refresh".to_string(),
            description: "Rescan the documentation tree and rebuild the index. Use after \
                          documentation files change. Queries keep answering from the \
                          previous snapshot until the rebuild completes; a failed rebuild \
                          leaves the previous snapshot in place."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let services = Arc::clone(&self.services);
        let report = tokio::task::spawn_blocking(move || services.resolver.refresh_docs())
            .await
            .map_err(|e| McpError::InternalError(format!("Refresh task failed: {e}")))?;

        match report {
            Ok(report) => Ok(text_content(Self::format_report(&report))),
            Err(e) => doc_result(Err(e)),
        }
    }
}
