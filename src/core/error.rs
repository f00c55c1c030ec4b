//! Error types and error handling for the documentation index.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use crate::core::types::Category;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docindex operations
pub type Result<T> = std::result::Result<T, DocError>;

/// Main error type for the docindex service
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Documentation root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Unrecognized documentation path: {0}")]
    UnrecognizedPath(String),

    #[error("{category} '{requested_key}' not found")]
    NotFound {
        category: Category,
        requested_key: String,
        available_keys: Vec<String>,
    },

    #[error("Topic '{topic}' not found in {resource}")]
    TopicNotFound {
        resource: String,
        topic: String,
        available_topics: Vec<String>,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Refresh failed: {0}")]
    RefreshFailure(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Error kinds exposed at the service boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RootNotFound,
    UnrecognizedPath,
    NotFound,
    InvalidQuery,
    RefreshFailure,
    Internal,
}

/// Boundary representation of a failed query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_key: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub available_keys: Vec<String>,
}

impl DocError {
    /// Build a NotFound error for a category lookup
    pub fn not_found(
        category: Category,
        requested_key: impl Into<String>,
        available_keys: Vec<String>,
    ) -> Self {
        DocError::NotFound {
            category,
            requested_key: requested_key.into(),
            available_keys,
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DocError::RootNotFound(_) => ErrorKind::RootNotFound,
            DocError::UnrecognizedPath(_) => ErrorKind::UnrecognizedPath,
            DocError::NotFound { .. } | DocError::TopicNotFound { .. } => ErrorKind::NotFound,
            DocError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            DocError::RefreshFailure(_) => ErrorKind::RefreshFailure,
            DocError::ConfigError(_)
            | DocError::IoError(_)
            | DocError::SerdeError(_)
            | DocError::TomlError(_) => ErrorKind::Internal,
        }
    }

    /// Key (or topic) the caller asked for, when applicable
    pub fn requested_key(&self) -> Option<&str> {
        match self {
            DocError::NotFound { requested_key, .. } => Some(requested_key),
            DocError::TopicNotFound { topic, .. } => Some(topic),
            _ => None,
        }
    }

    /// Valid alternatives the caller can retry with
    pub fn available_keys(&self) -> &[String] {
        match self {
            DocError::NotFound { available_keys, .. } => available_keys,
            DocError::TopicNotFound {
                available_topics, ..
            } => available_topics,
            _ => &[],
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocError::InvalidQuery(_) | DocError::UnrecognizedPath(_) | DocError::ConfigError(_)
        )
    }

    pub fn to_structured(&self) -> StructuredError {
        StructuredError {
            kind: self.kind(),
            message: self.message(),
            requested_key: self.requested_key().map(str::to_string),
            available_keys: self.available_keys().to_vec(),
        }
    }
}
