//! Namespace mapping: documentation path -> `ResourceId`.
//!
//! The mapping is a pure function of the relative path string. A
//! file at the root is the overview. Otherwise the directory segments
//! are walked from the root and the first segment naming a category
//! anchor decides the category; the segment immediately after it
//! (if any) is the key.
//!
//! ```text
//! CLAUDE.md                        -> overview
//! plugins/CLAUDE.md                -> plugin            (plugin overview)
//! src/plugins/smb/CLAUDE.md        -> plugin/smb
//! api/CLAUDE.md                    -> api
//! tests/CLAUDE.md                  -> testing
//! subsystems/alert/CLAUDE.md       -> subsystem/alert
//! middlewared/alert/CLAUDE.md      -> subsystem/alert  (subsystem_fallback only)
//! ```

use std::path::{Component, Path};

use crate::core::config::NamespaceConfig;
use crate::core::error::{DocError, Result};
use crate::core::types::{Category, ResourceId};

/// Maps relative documentation paths to resource identifiers
#[derive(Debug, Clone)]
pub struct NamespaceMapper {
    /// (segment, category) in precedence order
    anchors: Vec<(String, Category)>,
    subsystem_fallback: bool,
}

impl NamespaceMapper {
    pub fn new(config: &NamespaceConfig) -> Self {
        let groups = [
            (Category::Development, &config.development_anchors),
            (Category::Plugin, &config.plugin_anchors),
            (Category::Api, &config.api_anchors),
            (Category::Testing, &config.testing_anchors),
            (Category::Subsystem, &config.subsystem_anchors),
        ];

        let anchors = groups
            .iter()
            .flat_map(|(category, segments)| segments.iter().map(move |s| (s.clone(), *category)))
            .collect();

        Self {
            anchors,
            subsystem_fallback: config.subsystem_fallback,
        }
    }

    fn anchor(&self, segment: &str) -> Option<Category> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == segment)
            .map(|(_, category)| *category)
    }

    /// Compute the resource id for a path relative to the documentation root
    ///
    /// # Errors
    ///
    /// `UnrecognizedPath` when no anchor applies and the file is not at
    /// the root (and subsystem fallback is disabled), when a subsystem
    /// anchor has no key segment, or when the path is not valid UTF-8.
    pub fn map(&self, relative: &Path) -> Result<ResourceId> {
        let unrecognized = || DocError::UnrecognizedPath(relative.display().to_string());

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(os) => segments.push(os.to_str().ok_or_else(unrecognized)?),
                Component::CurDir => {}
                _ => return Err(unrecognized()),
            }
        }

        // Drop the file name; only directories carry meaning
        if segments.pop().is_none() {
            return Err(unrecognized());
        }
        let dirs = segments;

        if dirs.is_empty() {
            return Ok(ResourceId::bare(Category::Overview));
        }

        for (i, segment) in dirs.iter().enumerate() {
            if let Some(category) = self.anchor(segment) {
                let key = dirs.get(i + 1).map(|k| k.to_string());
                if category == Category::Subsystem && key.is_none() {
                    return Err(unrecognized());
                }
                return Ok(ResourceId::new(category, key));
            }
        }

        if self.subsystem_fallback {
            if let Some(parent) = dirs.last() {
                return Ok(ResourceId::keyed(Category::Subsystem, *parent));
            }
        }

        Err(unrecognized())
    }
}
