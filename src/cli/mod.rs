//! CLI adapter for docindex
//!
//! One-shot access to the documentation operations from a shell.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docindex - documentation retrieval from CLAUDE.md trees
///
/// Scans a documentation tree, classifies every file into a category
/// (overview, plugin, api, testing, subsystem, development) and serves
/// whole documents, topic slices and keyword search.
#[derive(Parser, Debug)]
#[command(name = "docindex")]
#[command(version)]
#[command(about = "Documentation retrieval over CLAUDE.md trees", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Documentation root (overrides config and DOCINDEX_ROOT)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names follow the MCP tool names.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the project overview
    Overview(commands::docs::OverviewArgs),

    /// Show plugin documentation, or list plugins
    #[command(name = "plugin-docs")]
    PluginDocs(commands::docs::PluginArgs),

    /// Show API documentation
    #[command(name = "api-docs")]
    ApiDocs(commands::docs::TopicArgs),

    /// Show testing documentation
    #[command(name = "testing-docs")]
    TestingDocs(commands::docs::TopicArgs),

    /// Show a subsystem's documentation
    #[command(name = "subsystem-docs")]
    SubsystemDocs(commands::docs::SubsystemArgs),

    /// Show development guidelines
    #[command(name = "development-docs")]
    DevelopmentDocs(commands::docs::TopicArgs),

    /// Search all documentation
    #[command(name = "search-docs")]
    SearchDocs(commands::SearchArgs),

    /// Read a resource by URI (e.g. docs://plugin/smb)
    Read(commands::docs::ReadArgs),

    /// List every addressable resource
    #[command(name = "list-resources")]
    ListResources(commands::ResourcesArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docindex completions bash > ~/.local/share/bash-completion/completions/docindex
    ///   zsh:   docindex completions zsh > ~/.zfunc/_docindex
    ///   fish:  docindex completions fish > ~/.config/fish/completions/docindex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    let format = cli.format;
    let command = match cli.command {
        // Handle completions command early (doesn't need services)
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let mut config = Config::load()?;
    if let Some(root) = cli.root {
        config.docs.root = root;
    }

    // show-config must work even when the root is missing
    if let Commands::ShowConfig(args) = command {
        return commands::config::execute(args, &config, format);
    }

    let services = Arc::new(Services::start(config)?);
    if let Ok(snapshot) = services.cache.snapshot() {
        for warning in snapshot.warnings() {
            output::print_warning(&warning.to_string());
        }
    }

    match command {
        Commands::Overview(args) => commands::docs::execute_overview(args, &services, format),
        Commands::PluginDocs(args) => commands::docs::execute_plugin(args, &services, format),
        Commands::ApiDocs(args) => commands::docs::execute_api(args, &services, format),
        Commands::TestingDocs(args) => commands::docs::execute_testing(args, &services, format),
        Commands::SubsystemDocs(args) => {
            commands::docs::execute_subsystem(args, &services, format)
        }
        Commands::DevelopmentDocs(args) => {
            commands::docs::execute_development(args, &services, format)
        }
        Commands::SearchDocs(args) => commands::search::execute(args, &services, format),
        Commands::Read(args) => commands::docs::execute_read(args, &services, format),
        Commands::ListResources(args) => commands::resources::execute(args, &services, format),
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
