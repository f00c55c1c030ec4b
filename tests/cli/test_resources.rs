//! Tests for the list-resources command

#[cfg(test)]
mod tests {
    use crate::common::{start_services, DocTree};
    use docindex::cli::commands::resources::{execute, ResourcesArgs};
    use docindex::cli::OutputFormat;

    #[test]
    fn test_list_resources_all_formats() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());

        for quiet in [false, true] {
            assert!(execute(ResourcesArgs { quiet }, &services, OutputFormat::Human).is_ok());
        }
        assert!(execute(ResourcesArgs { quiet: false }, &services, OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_list_resources_empty_root() {
        let tree = DocTree::empty();
        let services = start_services(tree.path());

        assert!(execute(ResourcesArgs { quiet: false }, &services, OutputFormat::Human).is_ok());
    }
}
