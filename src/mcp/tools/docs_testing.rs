//! Testing documentation tool handler

use super::handler::McpToolHandler;
use super::helpers::{doc_result, parse_args, topic_description};
use crate::core::resolver::DEFAULT_TESTING_TOPIC;
use crate::core::services::Services;
use crate::core::types::Category;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsTestingHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct TestingArgs {
    topic: Option<String>,
}

impl DocsTestingHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for DocsTestingHandler {
    fn name(&self) -> &str {
        "docs_testing"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "docs_testing".to_string(),
            description: "Get testing documentation: test layout, how to write and run \
                          tests, common patterns. Defaults to the overview sections."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": topic_description(&self.services.config, Category::Testing, DEFAULT_TESTING_TOPIC)
                    }
                }
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: TestingArgs = parse_args(args)?;
        doc_result(self.services.resolver.testing_docs(args.topic.as_deref()))
    }
}
