//! Plugin documentation tool handler

use super::handler::McpToolHandler;
use super::helpers::{doc_result, parse_args, topic_description};
use crate::core::services::Services;
use crate::core::types::Category;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsPluginHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct PluginArgs {
    plugin_name: Option<String>,
    topic: Option<String>,
}

impl DocsPluginHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsPluginHandler {
    fn name(&self) -> &str {
        "docs_plugin"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_plugin".to_string(),
            description: "Get plugin documentation. Without plugin_name, lists every \
                          documented plugin followed by the plugin architecture overview \
                          (service types, common patterns, plugin categories). With \
                          plugin_name, returns that plugin's documentation."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "plugin_name": {
                        "type": "string",
                        "description": "Plugin directory name (e.g. 'smb', 'pool'). Omit to list plugins."
                    },
                    "topic": {
                        "type": "string",
                        "description": topic_description(&self.services.config, Category::Plugin, "all")
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: PluginArgs = parse_args(args)?;
        doc_result(
            self.services
                .resolver
                .plugin_docs(args.plugin_name.as_deref(), args.topic.as_deref()),
        )
    }
}
