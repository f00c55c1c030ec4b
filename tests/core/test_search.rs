//! Conjunctive search over a scanned tree

#[cfg(test)]
mod tests {
    use crate::common::{start_services, DocTree};
    use docindex::core::error::DocError;
    use docindex::core::search::{query_tokens, tokenize};
    use docindex::core::types::{Category, ResourceId};
    use std::collections::HashSet;

    #[test]
    fn test_results_contain_every_query_token() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        for query in ["pool", "pool data", "alert pool", "users", "api versioned"] {
            let hits = snapshot
                .index()
                .query(snapshot.store(), query, 100)
                .unwrap();
            let wanted = query_tokens(query);

            for hit in &hits {
                let doc = snapshot.store().get(&hit.resource_id).unwrap();
                let doc_tokens: HashSet<String> = tokenize(&doc.raw_content).collect();
                assert!(
                    wanted.iter().all(|t| doc_tokens.contains(t)),
                    "{} does not contain all of {:?}",
                    hit.resource_id,
                    wanted
                );
            }
        }
    }

    #[test]
    fn test_score_is_sum_of_token_frequencies() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let snapshot = services.cache.snapshot().unwrap();

        let query = "pool scrub";
        let hits = snapshot
            .index()
            .query(snapshot.store(), query, 100)
            .unwrap();
        assert!(!hits.is_empty());

        for hit in &hits {
            let doc = snapshot.store().get(&hit.resource_id).unwrap();
            let expected: usize = query_tokens(query)
                .iter()
                .map(|t| tokenize(&doc.raw_content).filter(|d| d == t).count())
                .sum();
            assert_eq!(hit.score as usize, expected);
        }
    }

    #[test]
    fn test_ranking_and_tie_break() {
        let tree = DocTree::with_files(&[
            ("CLAUDE.md", "# Root\n\nzfs\n"),
            ("plugins/b/CLAUDE.md", "# B\n\nzfs zfs\n"),
            ("plugins/a/CLAUDE.md", "# A\n\nzfs\n"),
        ]);
        let services = start_services(tree.path());
        let results = services.resolver.search_docs("ZFS", None).unwrap();

        let order: Vec<ResourceId> = results.hits.iter().map(|h| h.resource_id.clone()).collect();
        assert_eq!(
            order,
            vec![
                ResourceId::keyed(Category::Plugin, "b"),
                ResourceId::bare(Category::Overview),
                ResourceId::keyed(Category::Plugin, "a"),
            ]
        );
    }

    #[test]
    fn test_snippet_is_first_matching_section() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let results = services.resolver.search_docs("kerberos", None).unwrap();

        assert_eq!(results.hits.len(), 1);
        assert!(results.hits[0].snippet.starts_with("## Auth"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let results = services.resolver.search_docs("kerberos scrub", None).unwrap();
        assert!(results.hits.is_empty());
    }

    #[test]
    fn test_empty_query_is_invalid() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        for query in ["", "   ", "a", "? !"] {
            assert!(matches!(
                services.resolver.search_docs(query, None),
                Err(DocError::InvalidQuery(_))
            ));
        }
    }

    #[test]
    fn test_overlong_query_is_invalid() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let query = "pool ".repeat(200);

        assert!(matches!(
            services.resolver.search_docs(&query, None),
            Err(DocError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_limit_is_clamped() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let one = services.resolver.search_docs("pool", Some(1)).unwrap();
        assert_eq!(one.hits.len(), 1);

        let zero = services.resolver.search_docs("pool", Some(0)).unwrap();
        assert_eq!(zero.hits.len(), 1);

        let all = services.resolver.search_docs("pool", Some(10_000)).unwrap();
        assert!(all.hits.len() > 1);
    }
}
