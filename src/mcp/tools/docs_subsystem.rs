//! Subsystem documentation tool handler

use super::handler::McpToolHandler;
use super::helpers::{doc_result, parse_args};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsSubsystemHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct SubsystemArgs {
    subsystem: String,
}

impl DocsSubsystemHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsSubsystemHandler {
    fn name(&self) -> &str {
        "docs_subsystem"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_subsystem".to_string(),
            description: "Get documentation for a specific subsystem (e.g. 'alert'). \
                          An unknown name returns the list of documented subsystems."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "subsystem": {
                        "type": "string",
                        "description": "Subsystem name",
                        "minLength": 1
                    }
                },
                "required": ["subsystem"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SubsystemArgs = parse_args(args)?;
        doc_result(self.services.resolver.subsystem_docs(&args.subsystem))
    }
}
