//! docindex MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the documentation operations
//! as tools and every document as a resource.

use docindex::core::config::Config;
use docindex::core::services::Services;
use docindex::core::xdg::XdgDirs;
use docindex::mcp::McpServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docindex=info"));

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(filter)
        .with_ansi(false);

    if std::env::var("DOCINDEX_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    // Initial population; a missing root is fatal
    let services = Services::start(config).unwrap_or_else(|e| {
        eprintln!("Failed to index documentation: {e}");
        std::process::exit(1);
    });

    let server = McpServer::new(Arc::new(services));

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
