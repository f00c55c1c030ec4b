// Test helper functions

use docindex::core::config::Config;
use docindex::core::services::Services;
use docindex::mcp::protocol::{ContentBlock, ToolResult};
use std::path::Path;
use std::sync::Arc;

/// Default configuration rooted at `root`
#[allow(dead_code)]
pub fn config_for(root: &Path) -> Config {
    Config::with_root(root)
}

/// Start services (initial population included) for a root
#[allow(dead_code)]
pub fn start_services(root: &Path) -> Arc<Services> {
    Arc::new(Services::start(config_for(root)).expect("Failed to start services"))
}

/// Text of the first content block of a tool result
#[allow(dead_code)]
pub fn tool_text(result: &ToolResult) -> &str {
    match &result.content[0] {
        ContentBlock::Text { text } => text,
    }
}
