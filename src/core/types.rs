//! Core data types for the documentation index.
//!
//! Resource addressing (`Category`, `ResourceId`), discovered
//! documents and their sections, search hits and scan warnings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level documentation kind. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Overview,
    Development,
    Plugin,
    Api,
    Testing,
    Subsystem,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Overview,
        Category::Development,
        Category::Plugin,
        Category::Api,
        Category::Testing,
        Category::Subsystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Overview => "overview",
            Category::Development => "development",
            Category::Plugin => "plugin",
            Category::Api => "api",
            Category::Testing => "testing",
            Category::Subsystem => "subsystem",
        }
    }

    /// Singleton categories never carry a key
    pub fn is_singleton(&self) -> bool {
        matches!(self, Category::Overview | Category::Development)
    }

    /// Heading used when grouping resources for display
    pub fn title(&self) -> &'static str {
        match self {
            Category::Overview => "Overview",
            Category::Development => "Development",
            Category::Plugin => "Plugins",
            Category::Api => "API",
            Category::Testing => "Testing",
            Category::Subsystem => "Subsystems",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses the canonical name, plus the plural forms used in URIs
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(Category::Overview),
            "development" => Ok(Category::Development),
            "plugin" | "plugins" => Ok(Category::Plugin),
            "api" => Ok(Category::Api),
            "testing" | "tests" => Ok(Category::Testing),
            "subsystem" | "subsystems" => Ok(Category::Subsystem),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

/// Canonical address of one logical document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub category: Category,
    pub key: Option<String>,
}

impl ResourceId {
    /// Build an id, dropping the key for singleton categories
    pub fn new(category: Category, key: Option<String>) -> Self {
        let key = if category.is_singleton() { None } else { key };
        Self { category, key }
    }

    pub fn keyed(category: Category, key: impl Into<String>) -> Self {
        Self::new(category, Some(key.into()))
    }

    pub fn bare(category: Category) -> Self {
        Self::new(category, None)
    }

    /// Path form used inside URIs: `category` or `category/key`
    pub fn path(&self) -> String {
        match &self.key {
            Some(key) => format!("{}/{}", self.category, key),
            None => self.category.to_string(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// Lexicographic on (category name, key); keyless ids sort first.
impl Ord for ResourceId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .as_str()
            .cmp(other.category.as_str())
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for ResourceId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One heading-delimited span of a document.
///
/// `depth` is the number of `#` markers (0 for the preamble before the
/// first heading). `span` is a byte range into the document's raw
/// content and includes the heading line itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub depth: usize,
    pub heading: String,
    pub span: Range<usize>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// A discovered documentation file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub resource_id: ResourceId,
    pub source_path: PathBuf,
    pub raw_content: String,
    pub sections: Vec<Section>,
    pub last_modified: DateTime<Utc>,
}

impl Document {
    /// Text of one section
    pub fn section_text(&self, section: &Section) -> &str {
        &self.raw_content[section.span.clone()]
    }

    /// Headings of all titled sections, in document order
    pub fn headings(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter(|s| s.depth > 0)
            .map(|s| s.heading.clone())
            .collect()
    }

    /// First top-level heading, used as a display title
    pub fn title(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.depth == 1)
            .map(|s| s.heading.as_str())
    }
}

/// File produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// Absolute (root-joined) path
    pub source_path: PathBuf,

    /// Path relative to the documentation root
    pub relative_path: PathBuf,

    pub last_modified: DateTime<Utc>,
}

/// Non-fatal problem recorded while building a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanWarning {
    Unreadable { path: PathBuf, reason: String },
    Unrecognized { path: PathBuf },
    Collision {
        resource: String,
        kept: PathBuf,
        replaced: PathBuf,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::Unreadable { path, reason } => {
                write!(f, "unreadable file {}: {}", path.display(), reason)
            }
            ScanWarning::Unrecognized { path } => {
                write!(f, "unrecognized documentation path {}", path.display())
            }
            ScanWarning::Collision {
                resource,
                kept,
                replaced,
            } => write!(
                f,
                "{} maps to '{}' already claimed by {}; keeping the later file",
                kept.display(),
                resource,
                replaced.display()
            ),
        }
    }
}

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub resource_id: ResourceId,
    pub score: u32,
    pub snippet: String,
}

/// Listing entry for the URI addressing surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub uri: String,
    pub name: String,
    pub description: String,
}
