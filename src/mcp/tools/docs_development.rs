//! Development guidelines tool handler

use super::handler::McpToolHandler;
use super::helpers::{doc_result, parse_args};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsDevelopmentHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct DevelopmentArgs {
    topic: Option<String>,
}

impl DocsDevelopmentHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsDevelopmentHandler {
    fn name(&self) -> &str {
        "docs_development"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_development".to_string(),
            description: "Get development guidelines: coding conventions, workflow and \
                          tooling. Falls back to the overview's Development Guidelines \
                          section when there is no dedicated document."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Section heading to return (case-insensitive substring). Default: 'all'."
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: DevelopmentArgs = parse_args(args)?;
        doc_result(
            self.services
                .resolver
                .development_docs(args.topic.as_deref()),
        )
    }
}
