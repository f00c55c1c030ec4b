//! Scanning and namespace mapping over real directory trees

#[cfg(test)]
mod tests {
    use crate::common::{config_for, DocTree};
    use docindex::core::error::DocError;
    use docindex::core::namespace::NamespaceMapper;
    use docindex::core::scanner::Scanner;
    use docindex::core::types::{Category, ResourceId, ScanWarning};
    use std::path::PathBuf;

    #[test]
    fn test_scan_order_is_lexicographic() {
        let tree = DocTree::middleware();
        let config = config_for(tree.path());
        let scanner = Scanner::from_config(&config.docs).unwrap();

        let (entries, warnings) = scanner.collect(tree.path()).unwrap();
        assert!(warnings.is_empty());

        let paths: Vec<PathBuf> = entries.iter().map(|e| e.relative_path.clone()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn test_scan_is_repeatable() {
        let tree = DocTree::middleware();
        let config = config_for(tree.path());
        let scanner = Scanner::from_config(&config.docs).unwrap();

        let (first, _) = scanner.collect(tree.path()).unwrap();
        let (second, _) = scanner.collect(tree.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scan_skips_non_matching_and_excluded() {
        let tree = DocTree::with_files(&[
            ("CLAUDE.md", "# Root\n"),
            ("README.md", "# Not documentation\n"),
            ("node_modules/pkg/CLAUDE.md", "# Vendored\n"),
            (".hidden/CLAUDE.md", "# Hidden\n"),
        ]);
        let config = config_for(tree.path());
        let scanner = Scanner::from_config(&config.docs).unwrap();

        let (entries, _) = scanner.collect(tree.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, PathBuf::from("CLAUDE.md"));
    }

    #[test]
    fn test_scan_missing_root() {
        let tree = DocTree::empty();
        let missing = tree.join("nope");
        let config = config_for(&missing);
        let scanner = Scanner::from_config(&config.docs).unwrap();

        assert!(matches!(
            scanner.collect(&missing),
            Err(DocError::RootNotFound(_))
        ));
    }

    #[test]
    fn test_scan_root_is_file() {
        let tree = DocTree::with_files(&[("CLAUDE.md", "# Root\n")]);
        let file = tree.join("CLAUDE.md");
        let config = config_for(&file);
        let scanner = Scanner::from_config(&config.docs).unwrap();

        assert!(matches!(scanner.collect(&file), Err(DocError::RootNotFound(_))));
    }

    #[test]
    fn test_mapping_is_deterministic_over_scanned_paths() {
        let tree = DocTree::middleware();
        let config = config_for(tree.path());
        let scanner = Scanner::from_config(&config.docs).unwrap();
        let mapper = NamespaceMapper::new(&config.namespace);

        let (entries, _) = scanner.collect(tree.path()).unwrap();
        for entry in &entries {
            let first = mapper.map(&entry.relative_path).unwrap();
            let second = mapper.map(&entry.relative_path).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_mapping_of_middleware_tree() {
        let tree = DocTree::middleware();
        let config = config_for(tree.path());
        let scanner = Scanner::from_config(&config.docs).unwrap();
        let mapper = NamespaceMapper::new(&config.namespace);

        let (entries, _) = scanner.collect(tree.path()).unwrap();
        let mut ids: Vec<ResourceId> = entries
            .iter()
            .map(|e| mapper.map(&e.relative_path).unwrap())
            .collect();
        ids.sort();

        assert!(ids.contains(&ResourceId::bare(Category::Overview)));
        assert!(ids.contains(&ResourceId::bare(Category::Plugin)));
        assert!(ids.contains(&ResourceId::keyed(Category::Plugin, "backup")));
        assert!(ids.contains(&ResourceId::bare(Category::Api)));
        assert!(ids.contains(&ResourceId::bare(Category::Testing)));
        assert!(ids.contains(&ResourceId::keyed(Category::Subsystem, "alert")));
    }

    #[test]
    fn test_unrecognized_path_is_warning_not_failure() {
        let tree = DocTree::with_files(&[
            ("CLAUDE.md", "# Root\n"),
            ("misc/CLAUDE.md", "# Stray\n"),
        ]);
        let services = crate::common::start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        assert_eq!(snapshot.store().len(), 1);
        assert!(snapshot
            .warnings()
            .iter()
            .any(|w| matches!(w, ScanWarning::Unrecognized { .. })));
    }

    #[test]
    fn test_subsystem_fallback_maps_unanchored_dirs() {
        let tree = DocTree::with_files(&[
            ("CLAUDE.md", "# Root\n"),
            ("src/middlewared/etc_files/CLAUDE.md", "# Etc files\n"),
        ]);
        let mut config = config_for(tree.path());
        config.namespace.subsystem_fallback = true;
        let mapper = NamespaceMapper::new(&config.namespace);

        assert_eq!(
            mapper
                .map(std::path::Path::new("src/middlewared/etc_files/CLAUDE.md"))
                .unwrap(),
            ResourceId::keyed(Category::Subsystem, "etc_files")
        );
    }
}
