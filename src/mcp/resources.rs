//! MCP resource surface
//!
//! Exposes every document as a `<scheme>://...` resource. Reads go
//! through the query resolver, so a resource and the matching tool
//! call always return the same text.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ResourceContents, ResourceDescriptor};
use std::sync::Arc;

pub const MARKDOWN_MIME: &str = "text/markdown";

pub struct ResourceProvider {
    services: Arc<Services>,
}

impl ResourceProvider {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Every resource of the live snapshot, index first
    pub fn list(&self) -> Result<Vec<ResourceDescriptor>, McpError> {
        let resources = self.services.resolver.list_resources()?;
        Ok(resources
            .into_iter()
            .map(|info| ResourceDescriptor {
                uri: info.uri,
                name: info.name,
                description: info.description,
                mime_type: MARKDOWN_MIME.to_string(),
            })
            .collect())
    }

    pub fn read(&self, uri: &str) -> Result<ResourceContents, McpError> {
        let text = self.services.resolver.read_uri(uri)?;
        Ok(ResourceContents {
            uri: uri.to_string(),
            mime_type: MARKDOWN_MIME.to_string(),
            text,
        })
    }
}
