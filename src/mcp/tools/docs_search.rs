//! Documentation search tool handler

use super::handler::{text_content, McpToolHandler};
use super::helpers::{doc_result, parse_args};
use crate::core::resolver::SearchResults;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DocsSearchHandler {
    services: Arc<Services>,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    limit: Option<usize>,
}

impl DocsSearchHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn format_results(&self, results: &SearchResults) -> String {
        let mut output = format!(
            "Found {} results for query '{}':\n\n",
            results.hits.len(),
            results.query
        );

        if results.hits.is_empty() {
            output.push_str(
                "No documents contain every search term. Try fewer or broader keywords.",
            );
            return output;
        }

        for (i, hit) in results.hits.iter().enumerate() {
            output.push_str(&format!(
                "## Result {} (score: {})\n",
                i + 1,
                hit.score
            ));
            output.push_str(&format!(
                "**Resource:** `{}`\n\n",
                self.services.resolver.uri(&hit.resource_id)
            ));
            output.push_str(&format!("> {}\n\n", hit.snippet.replace('\n', " ")));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for DocsSearchHandler {
    fn name(&self) -> &str {
        "docs_search"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "docs_search".to_string(),
            description: "Search all documentation for documents containing every query \
                          term (case-insensitive). Results are ranked by how often the \
                          terms occur and include the resource URI and a snippet. Use \
                          the URI with the matching docs tool or resources/read."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search terms; all must appear in a document",
                        "minLength": 1,
                        "maxLength": search.max_query_length
                    },
                    "limit": {
                        "type": "integer",
                        "description": format!("Maximum results (default: {})", search.default_limit),
                        "minimum": 1,
                        "maximum": search.max_limit
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;
        match self.services.resolver.search_docs(&args.query, args.limit) {
            Ok(results) => Ok(text_content(self.format_results(&results))),
            Err(e) => doc_result(Err(e)),
        }
    }
}
