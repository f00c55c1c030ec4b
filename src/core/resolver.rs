//! Query Resolver.
//!
//! Maps the logical documentation operations onto the document store
//! and search index of one snapshot. Every operation takes the live
//! snapshot exactly once, so a query never observes two generations.
//!
//! The URI surface (`<scheme>://category/key[/topic]`) is parsed here
//! and dispatched to the same functions as the named operations, so
//! both surfaces always return identical content.

use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::sync::Arc;

use crate::core::cache::{CacheStatus, DocCache};
use crate::core::config::Config;
use crate::core::error::{DocError, Result};
use crate::core::snapshot::Snapshot;
use crate::core::store::{truncate_parts, DocumentStore, Part, ALL_TOPIC};
use crate::core::types::{Category, ResourceId, ResourceInfo, ScanWarning, SearchHit};

/// Default topic for `api_docs`
pub const DEFAULT_API_TOPIC: &str = ALL_TOPIC;

/// Default topic for `testing_docs`
pub const DEFAULT_TESTING_TOPIC: &str = "overview";

/// Overview section served when no development document exists
pub const DEVELOPMENT_FALLBACK_TOPIC: &str = "Development Guidelines";

/// Path of the documentation index on the URI surface
pub const INDEX_PATH: &str = "index";

/// Ranked search results from one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub generation: u64,
    pub hits: Vec<SearchHit>,
}

/// Summary of an explicit refresh
#[derive(Debug, Clone, Serialize)]
pub struct RefreshReport {
    pub generation: u64,
    pub coalesced: bool,
    pub document_count: usize,
    pub warnings: Vec<ScanWarning>,
}

/// Resolves documentation operations against the live snapshot
pub struct QueryResolver {
    cache: Arc<DocCache>,
    config: Arc<Config>,
}

impl QueryResolver {
    pub fn new(cache: Arc<DocCache>, config: Arc<Config>) -> Self {
        Self { cache, config }
    }

    fn snapshot(&self) -> Result<Arc<Snapshot>> {
        self.cache.snapshot()
    }

    /// Root overview document
    pub fn overview(&self) -> Result<String> {
        let snapshot = self.snapshot()?;
        overview(snapshot.store(), None)
    }

    /// One plugin's documentation, or the plugin summary when no name
    /// is given
    pub fn plugin_docs(&self, plugin_name: Option<&str>, topic: Option<&str>) -> Result<String> {
        let snapshot = self.snapshot()?;
        plugin_docs(snapshot.store(), plugin_name, topic)
    }

    pub fn api_docs(&self, topic: Option<&str>) -> Result<String> {
        let snapshot = self.snapshot()?;
        bare_topic(snapshot.store(), Category::Api, topic, DEFAULT_API_TOPIC)
    }

    pub fn testing_docs(&self, topic: Option<&str>) -> Result<String> {
        let snapshot = self.snapshot()?;
        bare_topic(
            snapshot.store(),
            Category::Testing,
            topic,
            DEFAULT_TESTING_TOPIC,
        )
    }

    /// Subsystem documentation
    ///
    /// # Errors
    ///
    /// `NotFound` with every subsystem key as suggestions
    pub fn subsystem_docs(&self, subsystem: &str) -> Result<String> {
        let snapshot = self.snapshot()?;
        keyed_topic(snapshot.store(), Category::Subsystem, subsystem, None)
    }

    pub fn development_docs(&self, topic: Option<&str>) -> Result<String> {
        let snapshot = self.snapshot()?;
        development_docs(snapshot.store(), topic)
    }

    /// Conjunctive full-text search
    ///
    /// `limit` defaults to the configured default and is clamped to the
    /// configured maximum.
    pub fn search_docs(&self, query: &str, limit: Option<usize>) -> Result<SearchResults> {
        let max_len = self.config.search.max_query_length;
        if query.chars().count() > max_len {
            return Err(DocError::InvalidQuery(format!(
                "Query exceeds maximum length of {max_len} characters"
            )));
        }

        let limit = limit
            .unwrap_or(self.config.search.default_limit)
            .clamp(1, self.config.search.max_limit);

        let snapshot = self.snapshot()?;
        let hits = snapshot.index().query(snapshot.store(), query, limit)?;

        tracing::debug!(
            "Search '{}' matched {} documents (generation {})",
            query,
            hits.len(),
            snapshot.generation()
        );

        Ok(SearchResults {
            query: query.to_string(),
            generation: snapshot.generation(),
            hits,
        })
    }

    /// Markdown index of every resource, grouped by category
    pub fn index(&self) -> Result<String> {
        let snapshot = self.snapshot()?;
        Ok(self.render_index(&snapshot))
    }

    /// Every addressable resource, index first
    pub fn list_resources(&self) -> Result<Vec<ResourceInfo>> {
        let snapshot = self.snapshot()?;
        let mut resources = vec![ResourceInfo {
            uri: self.uri_for_path(INDEX_PATH),
            name: "Documentation Index".to_string(),
            description: "Index of all available documentation".to_string(),
        }];

        for doc in snapshot.store().documents() {
            let id = &doc.resource_id;
            resources.push(ResourceInfo {
                uri: self.uri(id),
                name: doc.title().map_or_else(|| id.path(), str::to_string),
                description: describe(id),
            });
        }

        Ok(resources)
    }

    /// Resolve a `<scheme>://...` URI through the same paths as the
    /// named operations
    pub fn read_uri(&self, uri: &str) -> Result<String> {
        let unrecognized = || DocError::UnrecognizedPath(uri.to_string());

        let scheme_prefix = format!("{}://", self.config.docs.uri_scheme);
        let path = uri.strip_prefix(&scheme_prefix).ok_or_else(unrecognized)?;
        let decoded = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8().map(|d| d.into_owned()))
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(|_| unrecognized())?;
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

        let snapshot = self.snapshot()?;
        let store = snapshot.store();

        let (first, rest) = segments.split_first().ok_or_else(unrecognized)?;
        if *first == INDEX_PATH && rest.is_empty() {
            return Ok(self.render_index(&snapshot));
        }

        let category: Category = first.parse().map_err(|_| unrecognized())?;
        match (category, rest) {
            (Category::Overview, []) => overview(store, None),
            (Category::Overview, [topic]) => overview(store, Some(*topic)),
            (Category::Development, []) => development_docs(store, None),
            (Category::Development, [topic]) => development_docs(store, Some(*topic)),
            (Category::Plugin, []) => plugin_docs(store, None, None),
            (Category::Plugin, [key]) => plugin_docs(store, Some(*key), None),
            (Category::Plugin, [key, topic]) => plugin_docs(store, Some(*key), Some(*topic)),
            (Category::Subsystem, [key]) => keyed_topic(store, category, key, None),
            (Category::Subsystem, [key, topic]) => keyed_topic(store, category, key, Some(*topic)),
            (Category::Api | Category::Testing, rest) => {
                let default = if category == Category::Api {
                    DEFAULT_API_TOPIC
                } else {
                    DEFAULT_TESTING_TOPIC
                };
                match rest {
                    [] => bare_topic(store, category, None, default),
                    [key, topic] => keyed_topic(store, category, key, Some(*topic)),
                    [segment] if store.contains(&ResourceId::keyed(category, *segment)) => {
                        keyed_topic(store, category, segment, None)
                    }
                    [topic] => bare_topic(store, category, Some(*topic), default),
                    _ => Err(unrecognized()),
                }
            }
            _ => Err(unrecognized()),
        }
    }

    /// Rebuild the snapshot now
    pub fn refresh_docs(&self) -> Result<RefreshReport> {
        let outcome = self.cache.refresh()?;
        let snapshot = outcome.snapshot();
        Ok(RefreshReport {
            generation: snapshot.generation(),
            coalesced: outcome.is_coalesced(),
            document_count: snapshot.store().len(),
            warnings: snapshot.warnings().to_vec(),
        })
    }

    pub fn cache_status(&self) -> CacheStatus {
        self.cache.status()
    }

    /// URI of a resource on the addressing surface
    pub fn uri(&self, id: &ResourceId) -> String {
        self.uri_for_path(&id.path())
    }

    fn uri_for_path(&self, path: &str) -> String {
        format!("{}://{}", self.config.docs.uri_scheme, path)
    }

    /// One part per category so the cap drops whole categories
    fn render_index(&self, snapshot: &Snapshot) -> String {
        let store = snapshot.store();
        let header = format!(
            "# Documentation Index\n\nGeneration {}: {} documents.\n",
            snapshot.generation(),
            store.len()
        );

        let mut blocks: Vec<(&str, String)> = vec![("", header)];
        for category in Category::ALL {
            let docs: Vec<_> = store
                .documents()
                .filter(|d| d.resource_id.category == category)
                .collect();
            if docs.is_empty() {
                continue;
            }

            let mut block = format!("\n## {}\n\n", category.title());
            for doc in docs {
                let id = &doc.resource_id;
                let label = id.key.as_deref().unwrap_or(category.as_str());
                match doc.title() {
                    Some(title) => block.push_str(&format!(
                        "- [{}]({}) - {}\n",
                        label,
                        self.uri(id),
                        title
                    )),
                    None => block.push_str(&format!("- [{}]({})\n", label, self.uri(id))),
                }
            }
            blocks.push((category.title(), block));
        }

        let parts: Vec<Part> = blocks
            .iter()
            .map(|(heading, text)| Part { heading, text })
            .collect();
        truncate_parts(&parts, store.max_payload_chars())
    }
}

fn overview(store: &DocumentStore, topic: Option<&str>) -> Result<String> {
    store.get_topic(
        &ResourceId::bare(Category::Overview),
        topic.unwrap_or(ALL_TOPIC),
    )
}

fn bare_topic(
    store: &DocumentStore,
    category: Category,
    topic: Option<&str>,
    default_topic: &str,
) -> Result<String> {
    store.get_topic(
        &ResourceId::bare(category),
        topic.unwrap_or(default_topic),
    )
}

/// Exact key match first, then ASCII case-insensitive
fn resolve_key(store: &DocumentStore, category: Category, requested: &str) -> Result<ResourceId> {
    let requested = requested.trim();
    let exact = ResourceId::keyed(category, requested);
    if store.contains(&exact) {
        return Ok(exact);
    }

    let keys = store.list(category);
    match keys.iter().find(|k| k.eq_ignore_ascii_case(requested)) {
        Some(key) => Ok(ResourceId::keyed(category, key.clone())),
        None => Err(DocError::not_found(category, requested, keys)),
    }
}

fn keyed_topic(
    store: &DocumentStore,
    category: Category,
    key: &str,
    topic: Option<&str>,
) -> Result<String> {
    let id = resolve_key(store, category, key)?;
    store.get_topic(&id, topic.unwrap_or(ALL_TOPIC))
}

fn plugin_docs(
    store: &DocumentStore,
    plugin_name: Option<&str>,
    topic: Option<&str>,
) -> Result<String> {
    match plugin_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => keyed_topic(store, Category::Plugin, name, topic),
        None => plugin_summary(store, topic),
    }
}

/// Plugin key list, followed by the plugin overview document if any
///
/// The key list and the overview sections are capped together.
fn plugin_summary(store: &DocumentStore, topic: Option<&str>) -> Result<String> {
    let keys = store.list(Category::Plugin);
    let overview_id = ResourceId::bare(Category::Plugin);
    let overview = if store.contains(&overview_id) {
        store.topic_parts(&overview_id, topic.unwrap_or(ALL_TOPIC))?
    } else {
        Vec::new()
    };

    let mut listing = String::from("# Plugins\n\n");
    if keys.is_empty() {
        listing.push_str("No plugin documentation found.\n");
    } else {
        listing.push_str(&format!("Available plugins ({}):\n\n", keys.len()));
        for key in &keys {
            listing.push_str(&format!("- `{key}`\n"));
        }
    }
    if !overview.is_empty() {
        listing.push_str("\n---\n\n");
    }

    let mut parts = vec![Part {
        heading: "Plugins",
        text: &listing,
    }];
    parts.extend(overview);
    Ok(truncate_parts(&parts, store.max_payload_chars()))
}

/// Development document, or the overview's development section
fn development_docs(store: &DocumentStore, topic: Option<&str>) -> Result<String> {
    let id = ResourceId::bare(Category::Development);
    if store.contains(&id) {
        return store.get_topic(&id, topic.unwrap_or(ALL_TOPIC));
    }

    store
        .get_topic(
            &ResourceId::bare(Category::Overview),
            DEVELOPMENT_FALLBACK_TOPIC,
        )
        .map_err(|_| {
            DocError::not_found(
                Category::Development,
                Category::Development.as_str(),
                Vec::new(),
            )
        })
}

fn describe(id: &ResourceId) -> String {
    match (&id.category, &id.key) {
        (Category::Overview, _) => "Project overview and development guidelines".to_string(),
        (Category::Development, _) => "Development guidelines".to_string(),
        (Category::Plugin, None) => "Plugin architecture overview".to_string(),
        (Category::Plugin, Some(key)) => format!("Documentation for the {key} plugin"),
        (Category::Api, None) => "API documentation".to_string(),
        (Category::Api, Some(key)) => format!("API documentation: {key}"),
        (Category::Testing, None) => "Testing documentation".to_string(),
        (Category::Testing, Some(key)) => format!("Testing documentation: {key}"),
        (Category::Subsystem, None) => "Subsystem documentation".to_string(),
        (Category::Subsystem, Some(key)) => format!("Documentation for the {key} subsystem"),
    }
}
