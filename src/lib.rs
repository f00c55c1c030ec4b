//! docindex - Documentation Index and Retrieval Service
//!
//! Discovers `CLAUDE.md`-style documentation files across a source
//! tree, maps each to a stable `(category, key)` address and answers
//! overview, plugin, API, testing, subsystem and search queries from
//! an in-memory, atomically refreshed snapshot.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - scanner, namespace (discovery and addressing)
//!   - store, search (content, slicing, ranking)
//!   - snapshot, cache (generation-stamped swap)
//!   - resolver, services
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, resources, protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Deterministic scan order and path-to-id mapping
//! - Topic-scoped retrieval with section-boundary truncation
//! - Conjunctive token search ranked by term frequency
//! - Single-writer snapshot swap with coalesced refresh

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocError, Result};
pub use core::services::Services;
pub use core::types::*;
