//! Configuration management for the docindex service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{DocError, Result};
use crate::core::store::resolve_alias;
use crate::core::types::Category;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Topic aliases per category: alias -> heading substrings
pub type TopicAliases = BTreeMap<Category, BTreeMap<String, Vec<String>>>;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub namespace: NamespaceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default = "default_topics")]
    pub topics: TopicAliases,
}

/// Documentation discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Documentation root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File name patterns recognised as documentation (glob syntax)
    #[serde(default = "default_file_patterns")]
    pub file_patterns: Vec<String>,

    /// Path patterns to skip (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Scheme of the URI addressing surface (`<scheme>://category/key`)
    #[serde(default = "default_uri_scheme")]
    pub uri_scheme: String,
}

/// Directory segments that anchor a category
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamespaceConfig {
    #[serde(default = "default_plugin_anchors")]
    pub plugin_anchors: Vec<String>,

    #[serde(default = "default_api_anchors")]
    pub api_anchors: Vec<String>,

    #[serde(default = "default_testing_anchors")]
    pub testing_anchors: Vec<String>,

    #[serde(default = "default_subsystem_anchors")]
    pub subsystem_anchors: Vec<String>,

    #[serde(default = "default_development_anchors")]
    pub development_anchors: Vec<String>,

    /// Map unanchored nested files to `(subsystem, <parent dir>)`
    /// instead of rejecting them
    #[serde(default)]
    pub subsystem_fallback: bool,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Payload and concurrency limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Cap on any single returned payload, in characters
    #[serde(default = "default_max_payload_chars")]
    pub max_payload_chars: usize,

    /// Cap on search snippets, in characters
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,

    /// Maximum queries served concurrently by the MCP adapter
    #[serde(default = "default_max_concurrent_queries")]
    pub max_concurrent_queries: usize,
}

/// Cache refresh configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Staleness polling interval in seconds (0 disables polling)
    #[serde(default)]
    pub refresh_interval_sec: u64,
}

// Default value functions
fn default_root() -> PathBuf {
    PathBuf::from("./docs")
}

fn default_file_patterns() -> Vec<String> {
    vec!["CLAUDE.md".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/target/**".to_string(),
        "**/__pycache__/**".to_string(),
        "**/.venv/**".to_string(),
        "**/build/**".to_string(),
        "**/dist/**".to_string(),
    ]
}

fn default_max_file_size() -> usize {
    10
}

fn default_uri_scheme() -> String {
    "docs".to_string()
}

fn default_plugin_anchors() -> Vec<String> {
    vec!["plugins".to_string()]
}

fn default_api_anchors() -> Vec<String> {
    vec!["api".to_string()]
}

fn default_testing_anchors() -> Vec<String> {
    vec!["tests".to_string(), "testing".to_string()]
}

fn default_subsystem_anchors() -> Vec<String> {
    vec!["subsystems".to_string()]
}

fn default_development_anchors() -> Vec<String> {
    vec!["development".to_string()]
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_max_payload_chars() -> usize {
    20_000
}

fn default_snippet_chars() -> usize {
    200
}

fn default_max_concurrent_queries() -> usize {
    8
}

fn aliases(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(topic, headings)| {
            (
                topic.to_string(),
                headings.iter().map(|h| h.to_string()).collect(),
            )
        })
        .collect()
}

fn default_topics() -> TopicAliases {
    let mut topics = BTreeMap::new();
    topics.insert(
        Category::Api,
        aliases(&[
            (
                "versioning",
                &["Overview", "Directory Structure", "Migration Between Versions"],
            ),
            ("models", &["Key Concepts"]),
            ("patterns", &["Common Patterns"]),
            ("best_practices", &["Best Practices"]),
        ]),
    );
    topics.insert(
        Category::Testing,
        aliases(&[
            ("overview", &["Overview", "Test Structure", "Writing Tests"]),
            ("patterns", &["Common Patterns"]),
        ]),
    );
    topics.insert(
        Category::Plugin,
        aliases(&[
            ("service_types", &["Service Types and Base Classes"]),
            ("patterns", &["Common Plugin Patterns"]),
            ("categories", &["Key Plugins by Category"]),
        ]),
    );
    topics
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            file_patterns: default_file_patterns(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size_mb: default_max_file_size(),
            uri_scheme: default_uri_scheme(),
        }
    }
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            plugin_anchors: default_plugin_anchors(),
            api_anchors: default_api_anchors(),
            testing_anchors: default_testing_anchors(),
            subsystem_anchors: default_subsystem_anchors(),
            development_anchors: default_development_anchors(),
            subsystem_fallback: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_payload_chars: default_max_payload_chars(),
            snippet_chars: default_snippet_chars(),
            max_concurrent_queries: default_max_concurrent_queries(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs: DocsConfig::default(),
            namespace: NamespaceConfig::default(),
            search: SearchConfig::default(),
            limits: LimitsConfig::default(),
            cache: CacheConfig::default(),
            topics: default_topics(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default configuration pointed at a documentation root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.docs.root = root.into();
        config
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCINDEX_CONFIG env var
    /// 2. XDG config file (~/.config/docindex/config.toml)
    /// 3. ./docindex.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCINDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docindex.toml").exists() {
                Self::from_file("docindex.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("DOCINDEX_ROOT") {
            self.docs.root = PathBuf::from(root);
        }
        if let Ok(scheme) = env::var("DOCINDEX_URI_SCHEME") {
            self.docs.uri_scheme = scheme;
        }
        if let Ok(max_size) = env::var("DOCINDEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.docs.max_file_size_mb = size;
            }
        }

        if let Ok(fallback) = env::var("DOCINDEX_SUBSYSTEM_FALLBACK") {
            if let Ok(flag) = fallback.parse() {
                self.namespace.subsystem_fallback = flag;
            }
        }

        if let Ok(default_limit) = env::var("DOCINDEX_DEFAULT_LIMIT") {
            if let Ok(limit) = default_limit.parse() {
                self.search.default_limit = limit;
            }
        }
        if let Ok(max_limit) = env::var("DOCINDEX_MAX_LIMIT") {
            if let Ok(limit) = max_limit.parse() {
                self.search.max_limit = limit;
            }
        }
        if let Ok(max_query_len) = env::var("DOCINDEX_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        if let Ok(max_payload) = env::var("DOCINDEX_MAX_PAYLOAD_CHARS") {
            if let Ok(chars) = max_payload.parse() {
                self.limits.max_payload_chars = chars;
            }
        }
        if let Ok(snippet) = env::var("DOCINDEX_SNIPPET_CHARS") {
            if let Ok(chars) = snippet.parse() {
                self.limits.snippet_chars = chars;
            }
        }
        if let Ok(max_concurrent) = env::var("DOCINDEX_MAX_CONCURRENT_QUERIES") {
            if let Ok(max) = max_concurrent.parse() {
                self.limits.max_concurrent_queries = max;
            }
        }

        if let Ok(interval) = env::var("DOCINDEX_REFRESH_INTERVAL_SEC") {
            if let Ok(secs) = interval.parse() {
                self.cache.refresh_interval_sec = secs;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.docs.file_patterns.is_empty() {
            return Err(DocError::ConfigError(
                "At least one documentation file pattern is required".to_string(),
            ));
        }

        if self.docs.uri_scheme.trim().is_empty() {
            return Err(DocError::ConfigError(
                "URI scheme must be non-empty".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(DocError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(DocError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(DocError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.limits.max_payload_chars == 0 {
            return Err(DocError::ConfigError(
                "Max payload chars must be non-zero".to_string(),
            ));
        }

        if self.limits.snippet_chars == 0 {
            return Err(DocError::ConfigError(
                "Snippet chars must be non-zero".to_string(),
            ));
        }

        if self.limits.max_concurrent_queries == 0 {
            return Err(DocError::ConfigError(
                "Max concurrent queries must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Heading substrings configured for a topic alias, if any
    pub fn topic_alias(&self, category: Category, topic: &str) -> Option<&[String]> {
        resolve_alias(&self.topics, category, topic)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Docs root: {:?}", self.docs.root);
        tracing::info!("  File patterns: {:?}", self.docs.file_patterns);
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.docs.exclude_patterns.len()
        );
        tracing::info!("  URI scheme: {}://", self.docs.uri_scheme);
        tracing::info!(
            "  Subsystem fallback: {}",
            self.namespace.subsystem_fallback
        );
        tracing::info!("  Max payload: {} chars", self.limits.max_payload_chars);
        tracing::info!(
            "  Max concurrent queries: {}",
            self.limits.max_concurrent_queries
        );
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Refresh interval: {}s", self.cache.refresh_interval_sec);
    }
}
