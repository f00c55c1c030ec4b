//! Tests for the document commands

#[cfg(test)]
mod tests {
    use crate::common::{start_services, DocTree};
    use docindex::cli::commands::docs::{
        execute_api, execute_development, execute_overview, execute_plugin, execute_read,
        execute_subsystem, execute_testing, OverviewArgs, PluginArgs, ReadArgs, SubsystemArgs,
        TopicArgs,
    };
    use docindex::cli::OutputFormat;
    use docindex::core::error::{DocError, ErrorKind};

    fn kind_of(err: &(dyn std::error::Error + 'static)) -> ErrorKind {
        err.downcast_ref::<DocError>()
            .expect("command errors carry a DocError")
            .kind()
    }

    #[test]
    fn test_overview_human_and_json() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        assert!(execute_overview(OverviewArgs {}, &services, OutputFormat::Human).is_ok());
        assert!(execute_overview(OverviewArgs {}, &services, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_plugin_with_topic() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = PluginArgs {
            plugin_name: Some("pool".to_string()),
            topic: Some("scrub".to_string()),
        };
        assert!(execute_plugin(args, &services, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_plugin_listing_without_name() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = PluginArgs {
            plugin_name: None,
            topic: None,
        };
        assert!(execute_plugin(args, &services, OutputFormat::Human).is_ok());
    }

    #[test]
    fn test_unknown_plugin_is_not_found() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = PluginArgs {
            plugin_name: Some("nfs".to_string()),
            topic: None,
        };
        let err = execute_plugin(args, &services, OutputFormat::Json).unwrap_err();
        assert_eq!(kind_of(err.as_ref()), ErrorKind::NotFound);
    }

    #[test]
    fn test_api_and_testing_topics() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let api = TopicArgs {
            topic: Some("best_practices".to_string()),
        };
        assert!(execute_api(api, &services, OutputFormat::Human).is_ok());

        let testing = TopicArgs { topic: None };
        assert!(execute_testing(testing, &services, OutputFormat::Human).is_ok());
    }

    #[test]
    fn test_unknown_topic_is_not_found() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = TopicArgs {
            topic: Some("no such heading".to_string()),
        };
        let err = execute_api(args, &services, OutputFormat::Human).unwrap_err();
        assert_eq!(kind_of(err.as_ref()), ErrorKind::NotFound);
    }

    #[test]
    fn test_subsystem_and_development() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = SubsystemArgs {
            subsystem: "alert".to_string(),
        };
        assert!(execute_subsystem(args, &services, OutputFormat::Json).is_ok());

        // No development documents: falls back to the root overview section
        let args = TopicArgs { topic: None };
        assert!(execute_development(args, &services, OutputFormat::Human).is_ok());
    }

    #[test]
    fn test_read_uri() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        let args = ReadArgs {
            uri: "docs://plugin/smb/auth".to_string(),
        };
        assert!(execute_read(args, &services, OutputFormat::Json).is_ok());

        let args = ReadArgs {
            uri: "docs://widgets".to_string(),
        };
        let err = execute_read(args, &services, OutputFormat::Json).unwrap_err();
        assert_eq!(kind_of(err.as_ref()), ErrorKind::UnrecognizedPath);
    }
}
