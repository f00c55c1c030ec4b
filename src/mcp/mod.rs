//! MCP (Model Context Protocol) server module
//!
//! JSON-RPC 2.0 over stdio exposing the documentation operations as
//! MCP tools and every document as an MCP resource.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod resources;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use server::McpServer;
pub use tools::{McpToolHandler, ToolRegistry};
