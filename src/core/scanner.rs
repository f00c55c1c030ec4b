//! Documentation file discovery.
//!
//! Walks a documentation root and yields every file whose name
//! matches a recognised documentation pattern. Traversal is an
//! explicit iterator (walkdir) with children sorted by file name, so
//! entries come out in path-component lexicographic order and every
//! downstream tie-break is deterministic.
//!
//! Individual failures (permission denied, oversized files) never
//! abort the scan: they are yielded as [`ScanWarning`]s.

use chrono::{DateTime, Utc};
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::DocsConfig;
use crate::core::error::{DocError, Result};
use crate::core::types::{ScanWarning, ScannedEntry};

/// Documentation file scanner with pattern-based filtering
pub struct Scanner {
    /// Patterns a file name must match (e.g. "CLAUDE.md")
    file_patterns: Vec<Pattern>,

    /// Patterns for paths to skip (e.g. "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

/// Outcome of one scanned file: an entry, or the reason it was skipped
pub type ScanItem = std::result::Result<ScannedEntry, ScanWarning>;

impl Scanner {
    /// Create a new scanner
    ///
    /// # Arguments
    ///
    /// * `file_patterns` - Glob patterns for documentation file names
    /// * `exclude_patterns` - Glob patterns for paths to skip
    /// * `max_file_size_mb` - Maximum file size in megabytes
    ///
    /// # Returns
    ///
    /// A new `Scanner` or a config error if a pattern is invalid
    pub fn new(
        file_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        Ok(Self {
            file_patterns: compile_patterns(file_patterns, "file")?,
            exclude_patterns: compile_patterns(exclude_patterns, "exclude")?,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    pub fn from_config(config: &DocsConfig) -> Result<Self> {
        Self::new(
            config.file_patterns.clone(),
            config.exclude_patterns.clone(),
            config.max_file_size_mb,
        )
    }

    /// Lazily scan a documentation root
    ///
    /// Fails only if `root` is missing or not a directory.
    pub fn scan<'a>(&'a self, root: &Path) -> Result<ScanIter<'a>> {
        if !root.is_dir() {
            return Err(DocError::RootNotFound(root.to_path_buf()));
        }

        let filter_root = root.to_path_buf();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| self.should_descend(e, &filter_root));

        Ok(ScanIter {
            scanner: self,
            root: root.to_path_buf(),
            inner: Box::new(walker),
        })
    }

    /// Scan eagerly, splitting entries from warnings
    pub fn collect(&self, root: &Path) -> Result<(Vec<ScannedEntry>, Vec<ScanWarning>)> {
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for item in self.scan(root)? {
            match item {
                Ok(entry) => entries.push(entry),
                Err(warning) => warnings.push(warning),
            }
        }

        Ok((entries, warnings))
    }

    /// Determine if a directory entry should be walked into
    ///
    /// Filters out hidden directories and excluded patterns.
    /// Never filters the root directory itself.
    fn should_descend(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if !entry.file_type().is_dir() {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                return false;
            }
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if self.is_excluded(relative) {
            tracing::debug!("Skipping excluded directory: {:?}", relative);
            return false;
        }

        true
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude_patterns
            .iter()
            .any(|p| p.matches_path(relative))
    }

    /// Check if a file name is a recognised documentation file
    fn is_doc_file(&self, relative: &Path) -> bool {
        let file_name = match relative.file_name().and_then(|f| f.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.file_patterns
            .iter()
            .any(|p| p.matches(file_name) || p.matches_path(relative))
    }

    fn process_entry(&self, root: &Path, entry: DirEntry) -> Option<ScanItem> {
        if !entry.file_type().is_file() {
            return None;
        }

        let source_path = entry.path().to_path_buf();
        let relative_path = source_path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| source_path.clone());

        if !self.is_doc_file(&relative_path) || self.is_excluded(&relative_path) {
            return None;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                return Some(Err(ScanWarning::Unreadable {
                    path: relative_path,
                    reason: e.to_string(),
                }))
            }
        };

        if metadata.len() > self.max_file_size_bytes {
            return Some(Err(ScanWarning::Unreadable {
                path: relative_path,
                reason: format!("file too large ({} bytes)", metadata.len()),
            }));
        }

        let last_modified: DateTime<Utc> = metadata.modified().unwrap_or(UNIX_EPOCH).into();

        Some(Ok(ScannedEntry {
            source_path,
            relative_path,
            last_modified,
        }))
    }
}

/// Lazy, ordered sequence of scanned documentation files
pub struct ScanIter<'a> {
    scanner: &'a Scanner,
    root: PathBuf,
    inner: Box<dyn Iterator<Item = walkdir::Result<DirEntry>> + 'a>,
}

impl Iterator for ScanIter<'_> {
    type Item = ScanItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if let Some(item) = self.scanner.process_entry(&self.root, entry) {
                        return Some(item);
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    let path = e
                        .path()
                        .map(|p| p.strip_prefix(&self.root).unwrap_or(p).to_path_buf())
                        .unwrap_or_default();
                    return Some(Err(ScanWarning::Unreadable {
                        path,
                        reason: e.to_string(),
                    }));
                }
            }
        }
    }
}

fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p)
                .map_err(|e| DocError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}
