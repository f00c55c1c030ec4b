//! Helper functions for MCP tools

use super::handler::{error_content, text_content};
use crate::core::config::Config;
use crate::core::error::DocError;
use crate::core::types::Category;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize tool arguments, treating a missing object as empty
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Convert a resolver result into a tool result
///
/// Errors the caller can correct (unknown keys, unknown topics, bad
/// queries) come back as `isError` content: a markdown block listing
/// the valid alternatives, then the structured error as JSON.
/// Everything else is a JSON-RPC error.
pub fn doc_result(result: Result<String, DocError>) -> Result<ToolResult, McpError> {
    match result {
        Ok(text) => Ok(text_content(text)),
        Err(e) if e.is_not_found() || e.is_bad_request() => {
            let mut content = error_content(format_doc_error(&e));
            content.content.push(ContentBlock::Text {
                text: serde_json::to_string(&e.to_structured())?,
            });
            Ok(content)
        }
        Err(e) => Err(McpError::from(e)),
    }
}

/// Markdown rendering of a recoverable error
pub fn format_doc_error(err: &DocError) -> String {
    let mut out = format!("**Error:** {}\n", err.message());

    let keys = err.available_keys();
    let label = match err {
        DocError::NotFound { category, .. } => Some(category.title().to_lowercase()),
        DocError::TopicNotFound { .. } => Some("topics".to_string()),
        _ => None,
    };

    if let Some(label) = label {
        if keys.is_empty() {
            out.push_str(&format!("\nNo {label} are available.\n"));
        } else {
            out.push_str(&format!("\nAvailable {label}:\n"));
            for key in keys {
                out.push_str(&format!("- `{key}`\n"));
            }
        }
    }

    out
}

/// Configured topic aliases for a category, for schema descriptions
pub fn topic_aliases(config: &Config, category: Category) -> Vec<String> {
    config
        .topics
        .get(&category)
        .map(|aliases| aliases.keys().cloned().collect())
        .unwrap_or_default()
}

/// Describe the `topic` parameter of a tool
pub fn topic_description(config: &Config, category: Category, default: &str) -> String {
    let aliases = topic_aliases(config, category);
    let mut desc = format!(
        "Section to return: 'all', a named topic, or any heading text (case-insensitive \
         substring). Default: '{default}'."
    );
    if !aliases.is_empty() {
        desc.push_str(&format!(" Named topics: {}.", aliases.join(", ")));
    }
    desc
}

/// Coarse relative age of a timestamp ("just now", "5 minutes ago")
pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let secs = (Utc::now() - timestamp).num_seconds().max(0);
    let (value, unit) = match secs {
        0..=59 => return "just now".to_string(),
        60..=3599 => (secs / 60, "minute"),
        3600..=86_399 => (secs / 3600, "hour"),
        _ => (secs / 86_400, "day"),
    };
    let plural = if value == 1 { "" } else { "s" };
    format!("{value} {unit}{plural} ago")
}
