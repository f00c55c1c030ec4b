//! Document store lookups over a scanned tree

#[cfg(test)]
mod tests {
    use crate::common::fixtures::API_DOC;
    use crate::common::{config_for, start_services, DocTree};
    use docindex::core::error::DocError;
    use docindex::core::services::Services;
    use docindex::core::store::TRUNCATION_MARKER;
    use docindex::core::types::{Category, ResourceId, ScanWarning};

    #[test]
    fn test_api_all_is_full_document_in_order() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let all = snapshot
            .store()
            .get_topic(&ResourceId::bare(Category::Api), "all")
            .unwrap();
        assert_eq!(all, API_DOC);

        let doc = snapshot.store().get(&ResourceId::bare(Category::Api)).unwrap();
        let total: usize = doc.sections.iter().map(|s| s.span.len()).sum();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_api_all_truncates_at_section_boundary() {
        let tree = DocTree::middleware();
        let mut config = config_for(tree.path());
        config.limits.max_payload_chars = 100;
        let services = Services::start(config).unwrap();
        let snapshot = services.cache.snapshot().unwrap();

        let text = snapshot
            .store()
            .get_topic(&ResourceId::bare(Category::Api), "all")
            .unwrap();
        let marker_at = text.find(TRUNCATION_MARKER).unwrap();
        let body = &text[..marker_at];

        // Body is a prefix of whole sections
        assert!(API_DOC.starts_with(body.trim_end_matches('\n')));
        assert!(body.trim_end().ends_with("One module per version."));
        assert!(body.chars().count() <= 100);
        assert!(text.contains("Best Practices"));
    }

    #[test]
    fn test_topic_alias_and_substring() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();
        let store = snapshot.store();
        let api = ResourceId::bare(Category::Api);

        let versioning = store.get_topic(&api, "versioning").unwrap();
        assert!(versioning.starts_with("## Overview"));
        assert!(versioning.contains("## Directory Structure"));
        assert!(!versioning.contains("Key Concepts"));

        let concepts = store.get_topic(&api, "KEY concepts").unwrap();
        assert_eq!(concepts, "## Key Concepts\n\nModels describe every argument.\n\n");
    }

    #[test]
    fn test_topic_miss_lists_headings() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let err = snapshot
            .store()
            .get_topic(&ResourceId::bare(Category::Api), "widgets")
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.available_keys().contains(&"Best Practices".to_string()));
    }

    #[test]
    fn test_list_is_sorted_keys() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        assert_eq!(
            snapshot.store().list(Category::Plugin),
            vec!["backup", "pool", "smb"]
        );
        assert_eq!(
            snapshot.store().list(Category::Subsystem),
            vec!["account", "alert"]
        );
        assert!(snapshot.store().list(Category::Api).is_empty());
    }

    #[test]
    fn test_collision_last_scanned_wins() {
        let tree = DocTree::with_files(&[
            ("CLAUDE.md", "# Root\n"),
            ("a/plugins/smb/CLAUDE.md", "# First\n"),
            ("b/plugins/smb/CLAUDE.md", "# Second\n"),
        ]);
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let doc = snapshot
            .store()
            .get(&ResourceId::keyed(Category::Plugin, "smb"))
            .unwrap();
        assert_eq!(doc.raw_content, "# Second\n");
        assert!(snapshot
            .warnings()
            .iter()
            .any(|w| matches!(w, ScanWarning::Collision { .. })));
    }

    #[test]
    fn test_headings_inside_fences_are_not_sections() {
        let tree = DocTree::with_files(&[(
            "CLAUDE.md",
            "# Root\n\n```bash\n# not a heading\n```\n\n## Real\n\ntext\n",
        )]);
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let doc = snapshot
            .store()
            .get(&ResourceId::bare(Category::Overview))
            .unwrap();
        assert_eq!(doc.headings(), vec!["Root", "Real"]);
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let tree = DocTree::with_files(&[("CLAUDE.md", "# Root\n")]);
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let err = snapshot
            .store()
            .get(&ResourceId::bare(Category::Testing))
            .unwrap_err();
        assert!(matches!(err, DocError::NotFound { .. }));
    }
}
