//! MCP tool implementations
//!
//! One handler per documentation operation. Handlers are thin: they
//! parse arguments, call the query resolver and render markdown.

pub mod docs_api;
pub mod docs_development;
pub mod docs_overview;
pub mod docs_plugin;
pub mod docs_refresh;
pub mod docs_search;
pub mod docs_status;
pub mod docs_subsystem;
pub mod docs_testing;
pub mod handler;
pub mod helpers;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use docs_api::DocsApiHandler;
pub use docs_development::DocsDevelopmentHandler;
pub use docs_overview::DocsOverviewHandler;
pub use docs_plugin::DocsPluginHandler;
pub use docs_refresh::DocsRefreshHandler;
pub use docs_search::DocsSearchHandler;
pub use docs_status::DocsStatusHandler;
pub use docs_subsystem::DocsSubsystemHandler;
pub use docs_testing::DocsTestingHandler;
pub use handler::{error_content, text_content, McpToolHandler};
pub use registry::ToolRegistry;
