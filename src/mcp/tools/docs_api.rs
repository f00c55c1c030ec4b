//! API documentation tool handler

use super::handler::McpToolHandler;
use super::helpers::{doc_result, parse_args, topic_description};
use crate::core::resolver::DEFAULT_API_TOPIC;
use crate::core::services::Services;
use crate::core::types::Category;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsApiHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct ApiArgs {
    topic: Option<String>,
}

impl DocsApiHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsApiHandler {
    fn name(&self) -> &str {
        "docs_api"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_api".to_string(),
            description: "Get API documentation: versioning, model definitions, common \
                          patterns and best practices. Use a topic to fetch one section."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": topic_description(&self.services.config, Category::Api, DEFAULT_API_TOPIC)
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ApiArgs = parse_args(args)?;
        doc_result(self.services.resolver.api_docs(args.topic.as_deref()))
    }
}
