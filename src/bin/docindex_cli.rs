//! docindex CLI - command-line access to the documentation index
//!
//! Runs one documentation operation against a freshly scanned tree and
//! prints the result. Use this for scripting or manual lookups without
//! an MCP client.
//!
//! # Examples
//!
//! ```bash
//! # Project overview
//! docindex --root /path/to/repo overview
//!
//! # One plugin, one section
//! docindex plugin-docs smb --topic auth
//!
//! # Keyword search, JSON output
//! docindex --format json search-docs "pool scrub"
//!
//! # Read by URI
//! docindex read docs://api/best_practices
//! ```

use clap::Parser;
use docindex::cli::output::print_error;
use docindex::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
