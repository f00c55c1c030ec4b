//! Immutable, generation-stamped snapshots.
//!
//! A [`Snapshot`] pairs a document store with the search index derived
//! from it. Snapshots are built entirely off to the side by a
//! [`SnapshotBuilder`] and never mutated once published.

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Instant;

use crate::core::config::{Config, TopicAliases};
use crate::core::error::Result;
use crate::core::namespace::NamespaceMapper;
use crate::core::scanner::Scanner;
use crate::core::search::SearchIndex;
use crate::core::store::DocumentStore;
use crate::core::types::{ScanWarning, ScannedEntry};

/// Scanned (relative path, mtime) pairs in scan order
pub type Fingerprint = Vec<(PathBuf, DateTime<Utc>)>;

/// Document store + search index + generation, published together
#[derive(Debug)]
pub struct Snapshot {
    generation: u64,
    built_at: DateTime<Utc>,
    store: DocumentStore,
    index: SearchIndex,
    warnings: Vec<ScanWarning>,
    fingerprint: Fingerprint,
}

impl Snapshot {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Files skipped or replaced while building this snapshot
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }
}

/// Builds snapshots from a documentation root
pub struct SnapshotBuilder {
    root: PathBuf,
    scanner: Scanner,
    mapper: NamespaceMapper,
    topics: TopicAliases,
    max_payload_chars: usize,
    snippet_chars: usize,
}

impl SnapshotBuilder {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            root: config.docs.root.clone(),
            scanner: Scanner::from_config(&config.docs)?,
            mapper: NamespaceMapper::new(&config.namespace),
            topics: config.topics.clone(),
            max_payload_chars: config.limits.max_payload_chars,
            snippet_chars: config.limits.snippet_chars,
        })
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Scan, load and index the root into a new snapshot
    ///
    /// # Errors
    ///
    /// Only `RootNotFound`; per-file problems become warnings.
    pub fn build(&self, generation: u64) -> Result<Snapshot> {
        let start = Instant::now();

        let (entries, mut warnings) = self.scanner.collect(&self.root)?;
        let fingerprint = fingerprint_of(&entries);

        let (store, load_warnings) = DocumentStore::load(
            &entries,
            &self.mapper,
            self.topics.clone(),
            self.max_payload_chars,
        );
        warnings.extend(load_warnings);

        let index = SearchIndex::build(&store, self.snippet_chars);

        tracing::info!(
            "Built snapshot generation {}: {} documents, {} warnings in {}ms",
            generation,
            store.len(),
            warnings.len(),
            start.elapsed().as_millis()
        );

        Ok(Snapshot {
            generation,
            built_at: Utc::now(),
            store,
            index,
            warnings,
            fingerprint,
        })
    }

    /// Current on-disk fingerprint, without reading file contents
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        let (entries, _) = self.scanner.collect(&self.root)?;
        Ok(fingerprint_of(&entries))
    }
}

fn fingerprint_of(entries: &[ScannedEntry]) -> Fingerprint {
    entries
        .iter()
        .map(|e| (e.relative_path.clone(), e.last_modified))
        .collect()
}
