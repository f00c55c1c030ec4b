//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (MCP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **scanner**: Documentation file discovery
//! - **namespace**: Path to resource id mapping
//! - **store**: Document storage, topic slicing, truncation
//! - **search**: Token index with conjunctive ranked queries
//! - **snapshot**: Immutable store + index pairs
//! - **cache**: Snapshot lifecycle and atomic swap
//! - **resolver**: Documentation operations and URI addressing
//! - **services**: Unified service container

pub mod cache;
pub mod config;
pub mod error;
pub mod namespace;
pub mod resolver;
pub mod scanner;
pub mod search;
pub mod services;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocError, Result};
pub use services::Services;
