//! Tests for the search-docs command

#[cfg(test)]
mod tests {
    use crate::common::{start_services, DocTree};
    use docindex::cli::commands::search::{execute, SearchArgs};
    use docindex::cli::OutputFormat;
    use docindex::core::error::{DocError, ErrorKind};

    fn args(query: &str) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            limit: None,
            uris_only: false,
        }
    }

    #[test]
    fn test_search_human() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        assert!(execute(args("kerberos"), &services, OutputFormat::Human).is_ok());
    }

    #[test]
    fn test_search_json_uris_only() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let search = SearchArgs {
            limit: Some(2),
            uris_only: true,
            ..args("pool")
        };
        assert!(execute(search, &services, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_search_no_results_is_ok() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        assert!(execute(args("zyzzyva"), &services, OutputFormat::Human).is_ok());
    }

    #[test]
    fn test_blank_query_is_invalid() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let err = execute(args("   "), &services, OutputFormat::Json).unwrap_err();
        let kind = err.downcast_ref::<DocError>().unwrap().kind();
        assert_eq!(kind, ErrorKind::InvalidQuery);
    }
}
