//! Document Store.
//!
//! Holds one [`Document`] per [`ResourceId`] together with its
//! section boundaries. All retrieval goes through section-boundary
//! truncation so no payload exceeds the configured cap.

mod sections;
mod truncate;

pub use sections::split_sections;
pub use truncate::{truncate_parts, Part, TRUNCATION_MARKER};

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::core::config::TopicAliases;
use crate::core::error::{DocError, Result};
use crate::core::namespace::NamespaceMapper;
use crate::core::types::{Category, Document, ResourceId, ScanWarning, ScannedEntry, Section};

/// Topic selecting the whole document
pub const ALL_TOPIC: &str = "all";

/// Normalise a topic or heading for matching
///
/// Lowercases, treats `_` and `-` as spaces and collapses whitespace,
/// so `best_practices`, `Best-Practices` and `best practices` compare
/// equal.
pub fn normalize_topic(topic: &str) -> String {
    topic
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up the heading substrings configured for a topic alias
pub fn resolve_alias<'a>(
    topics: &'a TopicAliases,
    category: Category,
    topic: &str,
) -> Option<&'a [String]> {
    let wanted = normalize_topic(topic);
    topics
        .get(&category)?
        .iter()
        .find(|(alias, _)| normalize_topic(alias) == wanted)
        .map(|(_, headings)| headings.as_slice())
}

/// Build a document from its content, deriving sections
pub fn parse_document(
    resource_id: ResourceId,
    source_path: PathBuf,
    raw_content: String,
    last_modified: DateTime<Utc>,
) -> Document {
    let sections = split_sections(&raw_content);
    Document {
        resource_id,
        source_path,
        raw_content,
        sections,
        last_modified,
    }
}

/// Per-resource document storage with topic slicing
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: BTreeMap<ResourceId, Document>,
    topics: TopicAliases,
    max_payload_chars: usize,
}

impl DocumentStore {
    pub fn new(topics: TopicAliases, max_payload_chars: usize) -> Self {
        Self {
            documents: BTreeMap::new(),
            topics,
            max_payload_chars,
        }
    }

    /// Read, map and store every scanned entry
    ///
    /// Individual failures are absorbed as warnings. When two entries
    /// map to the same id the later one (in scan order) wins.
    pub fn load(
        entries: &[ScannedEntry],
        mapper: &NamespaceMapper,
        topics: TopicAliases,
        max_payload_chars: usize,
    ) -> (Self, Vec<ScanWarning>) {
        let mut store = Self::new(topics, max_payload_chars);
        let mut warnings = Vec::new();
        let mut origins: HashMap<ResourceId, PathBuf> = HashMap::new();

        for entry in entries {
            let resource_id = match mapper.map(&entry.relative_path) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", entry.relative_path.display(), e);
                    warnings.push(ScanWarning::Unrecognized {
                        path: entry.relative_path.clone(),
                    });
                    continue;
                }
            };

            let content = match fs::read_to_string(&entry.source_path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", entry.relative_path.display(), e);
                    warnings.push(ScanWarning::Unreadable {
                        path: entry.relative_path.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            tracing::debug!(
                "Loaded {} as {}",
                entry.relative_path.display(),
                resource_id
            );

            let document = parse_document(
                resource_id.clone(),
                entry.source_path.clone(),
                content,
                entry.last_modified,
            );

            if store.insert(document).is_some() {
                let replaced = origins.get(&resource_id).cloned().unwrap_or_default();
                tracing::warn!(
                    "{} collides with {} on '{}'; keeping the later file",
                    entry.relative_path.display(),
                    replaced.display(),
                    resource_id
                );
                warnings.push(ScanWarning::Collision {
                    resource: resource_id.to_string(),
                    kept: entry.relative_path.clone(),
                    replaced,
                });
            }
            origins.insert(resource_id, entry.relative_path.clone());
        }

        (store, warnings)
    }

    /// Insert a document, returning the one it replaced
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.resource_id.clone(), document)
    }

    /// Look up a document
    ///
    /// # Errors
    ///
    /// `NotFound` carrying the keys present under the same category
    pub fn get(&self, id: &ResourceId) -> Result<&Document> {
        self.documents.get(id).ok_or_else(|| {
            let requested = id.key.clone().unwrap_or_else(|| id.path());
            DocError::not_found(id.category, requested, self.list(id.category))
        })
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.documents.contains_key(id)
    }

    /// Sections of a document matching `topic`
    ///
    /// `all` (or an empty topic) returns every section in original
    /// order. Otherwise a configured alias for the category is tried
    /// first, then the topic itself as a case-insensitive substring of
    /// the heading. A matching section brings its deeper sub-sections.
    pub fn get_topic(&self, id: &ResourceId, topic: &str) -> Result<String> {
        let parts = self.topic_parts(id, topic)?;
        Ok(truncate_parts(&parts, self.max_payload_chars))
    }

    /// Untruncated sections selected by `topic`, for callers that
    /// assemble a larger payload and apply the cap to the whole
    pub fn topic_parts(&self, id: &ResourceId, topic: &str) -> Result<Vec<Part<'_>>> {
        let doc = self.get(id)?;
        let wanted = normalize_topic(topic);

        if wanted.is_empty() || wanted == ALL_TOPIC {
            let all: Vec<usize> = (0..doc.sections.len()).collect();
            return Ok(parts_of(doc, &all));
        }

        let mut selected = Vec::new();
        if let Some(headings) = resolve_alias(&self.topics, id.category, topic) {
            let selectors: Vec<String> = headings.iter().map(|h| normalize_topic(h)).collect();
            selected = select_sections(&doc.sections, &selectors);
        }
        if selected.is_empty() {
            selected = select_sections(&doc.sections, std::slice::from_ref(&wanted));
        }

        if selected.is_empty() {
            return Err(DocError::TopicNotFound {
                resource: id.to_string(),
                topic: topic.to_string(),
                available_topics: doc.headings(),
            });
        }

        Ok(parts_of(doc, &selected))
    }

    /// Full document text, truncated at a section boundary
    pub fn full_text(&self, id: &ResourceId) -> Result<String> {
        self.get_topic(id, ALL_TOPIC)
    }

    /// Keys present under a category, in lexicographic order
    pub fn list(&self, category: Category) -> Vec<String> {
        self.documents
            .keys()
            .filter(|id| id.category == category)
            .filter_map(|id| id.key.clone())
            .collect()
    }

    /// All documents in resource id order
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ResourceId> {
        self.documents.keys()
    }

    /// Number of documents per category
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for id in self.documents.keys() {
            *counts.entry(id.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn max_payload_chars(&self) -> usize {
        self.max_payload_chars
    }
}

fn parts_of<'a>(doc: &'a Document, indices: &[usize]) -> Vec<Part<'a>> {
    indices
        .iter()
        .filter_map(|&i| doc.sections.get(i))
        .map(|s| Part {
            heading: &s.heading,
            text: doc.section_text(s),
        })
        .collect()
}

/// Indices of sections whose heading contains any selector, each
/// followed by its deeper sub-sections
fn select_sections(sections: &[Section], selectors: &[String]) -> Vec<usize> {
    let selectors: Vec<&str> = selectors
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if selectors.is_empty() {
        return Vec::new();
    }

    let mut selected = Vec::new();
    let mut i = 0;
    while i < sections.len() {
        let section = &sections[i];
        let heading = normalize_topic(&section.heading);

        if section.depth > 0 && selectors.iter().any(|s| heading.contains(s)) {
            selected.push(i);
            i += 1;
            while i < sections.len() && sections[i].depth > section.depth {
                selected.push(i);
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    selected
}
