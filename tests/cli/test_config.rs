//! Tests for the show-config command

#[cfg(test)]
mod tests {
    use docindex::cli::commands::config::{execute, ConfigArgs};
    use docindex::cli::OutputFormat;
    use docindex::core::config::Config;

    #[test]
    fn test_show_config_without_root() {
        let config = Config::with_root("/nonexistent/docindex-root");

        assert!(execute(ConfigArgs { all: false }, &config, OutputFormat::Human).is_ok());
        assert!(execute(ConfigArgs { all: true }, &config, OutputFormat::Human).is_ok());
        assert!(execute(ConfigArgs { all: true }, &config, OutputFormat::Json).is_ok());
    }
}
