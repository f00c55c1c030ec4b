//! Query resolver operations and the URI addressing surface

#[cfg(test)]
mod tests {
    use crate::common::fixtures::API_DOC;
    use crate::common::{start_services, DocTree};
    use docindex::core::error::{DocError, ErrorKind};
    use docindex::core::types::Category;

    #[test]
    fn test_plugin_docs_backup_contains_literal() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let text = services.resolver.plugin_docs(Some("backup"), None).unwrap();
        assert!(text.contains("BackupService"));
    }

    #[test]
    fn test_plugin_docs_case_insensitive_key() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let exact = services.resolver.plugin_docs(Some("smb"), None).unwrap();
        let upper = services.resolver.plugin_docs(Some("SMB"), None).unwrap();
        assert_eq!(exact, upper);
    }

    #[test]
    fn test_plugin_summary_lists_keys_then_overview() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let summary = services.resolver.plugin_docs(None, None).unwrap();
        assert!(summary.starts_with("# Plugins\n\nAvailable plugins (3):"));
        let backup = summary.find("- `backup`").unwrap();
        let smb = summary.find("- `smb`").unwrap();
        let overview = summary.find("Service Types and Base Classes").unwrap();
        assert!(backup < smb && smb < overview);

        let sliced = services
            .resolver
            .plugin_docs(None, Some("service_types"))
            .unwrap();
        assert!(sliced.contains("CRUDService"));
        assert!(!sliced.contains("Common Plugin Patterns"));
    }

    #[test]
    fn test_subsystem_not_found_lists_current_keys() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let err = services.resolver.subsystem_docs("nonexistent").unwrap_err();
        let snapshot = services.cache.snapshot().unwrap();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.requested_key(), Some("nonexistent"));
        assert_eq!(
            err.available_keys(),
            snapshot.store().list(Category::Subsystem).as_slice()
        );

        let structured = serde_json::to_value(err.to_structured()).unwrap();
        assert_eq!(structured["kind"], "not_found");
        assert_eq!(structured["available_keys"][0], "account");
    }

    #[test]
    fn test_api_docs_defaults_to_all() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        assert_eq!(services.resolver.api_docs(None).unwrap(), API_DOC);
        assert_eq!(services.resolver.api_docs(Some("all")).unwrap(), API_DOC);
    }

    #[test]
    fn test_testing_docs_defaults_to_overview_topic() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let text = services.resolver.testing_docs(None).unwrap();
        assert!(text.starts_with("## Overview"));
        assert!(text.contains("## Test Structure"));
        assert!(!text.contains("Common Patterns"));
    }

    #[test]
    fn test_development_falls_back_to_overview_section() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let text = services.resolver.development_docs(None).unwrap();
        assert_eq!(
            text,
            "## Development Guidelines\n\nRun the linters before sending a change.\n"
        );
    }

    #[test]
    fn test_development_document_wins_over_fallback() {
        let tree = DocTree::middleware();
        tree.write("docs/development/CLAUDE.md", "# Development\n\n## Style\n\nblack\n");
        let services = start_services(tree.path());

        let text = services.resolver.development_docs(Some("style")).unwrap();
        assert_eq!(text, "## Style\n\nblack\n");
    }

    #[test]
    fn test_development_missing_everywhere() {
        let tree = DocTree::with_files(&[("CLAUDE.md", "# Root\n\nNothing else.\n")]);
        let services = start_services(tree.path());

        let err = services.resolver.development_docs(None).unwrap_err();
        assert!(matches!(err, DocError::NotFound { category: Category::Development, .. }));
    }

    #[test]
    fn test_uri_surface_matches_operations() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let r = &services.resolver;

        assert_eq!(r.read_uri("docs://overview").unwrap(), r.overview().unwrap());
        assert_eq!(
            r.read_uri("docs://plugin").unwrap(),
            r.plugin_docs(None, None).unwrap()
        );
        assert_eq!(
            r.read_uri("docs://plugin/pool/scrub").unwrap(),
            r.plugin_docs(Some("pool"), Some("scrub")).unwrap()
        );
        assert_eq!(
            r.read_uri("docs://api/best_practices").unwrap(),
            r.api_docs(Some("best_practices")).unwrap()
        );
        assert_eq!(
            r.read_uri("docs://testing").unwrap(),
            r.testing_docs(None).unwrap()
        );
        assert_eq!(
            r.read_uri("docs://subsystem/alert").unwrap(),
            r.subsystem_docs("alert").unwrap()
        );
        assert_eq!(
            r.read_uri("docs://development").unwrap(),
            r.development_docs(None).unwrap()
        );
    }

    #[test]
    fn test_uri_errors_match_operations() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let r = &services.resolver;

        let via_uri = r.read_uri("docs://subsystem/nonexistent").unwrap_err();
        let via_op = r.subsystem_docs("nonexistent").unwrap_err();
        assert_eq!(
            serde_json::to_value(via_uri.to_structured()).unwrap(),
            serde_json::to_value(via_op.to_structured()).unwrap()
        );

        for bad in [
            "http://overview",
            "docs://",
            "docs://widgets",
            "docs://subsystem",
            "docs://overview/a/b",
        ] {
            assert!(
                matches!(r.read_uri(bad), Err(DocError::UnrecognizedPath(_))),
                "{bad} should be unrecognized"
            );
        }
    }

    #[test]
    fn test_index_lists_every_resource() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let index = services.resolver.read_uri("docs://index").unwrap();
        assert_eq!(index, services.resolver.index().unwrap());
        assert!(index.contains("docs://plugin/backup"));
        assert!(index.contains("docs://subsystem/account"));

        let resources = services.resolver.list_resources().unwrap();
        assert_eq!(resources[0].uri, "docs://index");
        assert_eq!(resources.len(), 10);
    }

    #[test]
    fn test_custom_uri_scheme() {
        let tree = DocTree::middleware();
        let mut config = crate::common::config_for(tree.path());
        config.docs.uri_scheme = "truenas".to_string();
        let services = docindex::core::services::Services::start(config).unwrap();

        assert!(services.resolver.read_uri("truenas://overview").is_ok());
        assert!(services.resolver.read_uri("docs://overview").is_err());
    }
}
