//! Config command - show current configuration

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Include topic alias tables
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Execute the config command
///
/// Takes the loaded configuration rather than services so it works
/// before the documentation root exists.
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  docs:");
            println!("    root: {}", colors::uri(&config.docs.root.display().to_string()));
            println!("    file_patterns: {:?}", config.docs.file_patterns);
            println!("    exclude_patterns: {:?}", config.docs.exclude_patterns);
            println!("    max_file_size_mb: {}", config.docs.max_file_size_mb);
            println!("    uri_scheme: {}", config.docs.uri_scheme);
            println!("  namespace:");
            println!("    plugin_anchors: {:?}", config.namespace.plugin_anchors);
            println!("    api_anchors: {:?}", config.namespace.api_anchors);
            println!("    testing_anchors: {:?}", config.namespace.testing_anchors);
            println!("    subsystem_anchors: {:?}", config.namespace.subsystem_anchors);
            println!(
                "    development_anchors: {:?}",
                config.namespace.development_anchors
            );
            println!(
                "    subsystem_fallback: {}",
                config.namespace.subsystem_fallback
            );
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  limits:");
            println!("    max_payload_chars: {}", config.limits.max_payload_chars);
            println!("    snippet_chars: {}", config.limits.snippet_chars);
            println!(
                "    max_concurrent_queries: {}",
                config.limits.max_concurrent_queries
            );
            println!("  cache:");
            println!(
                "    refresh_interval_sec: {}",
                config.cache.refresh_interval_sec
            );

            if args.all {
                println!("  topics:");
                for (category, aliases) in &config.topics {
                    println!("    {}:", category.as_str());
                    for (name, headings) in aliases {
                        println!("      {name}: {headings:?}");
                    }
                }
            }
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(config)?;
            if !args.all {
                if let Some(obj) = value.as_object_mut() {
                    obj.remove("topics");
                }
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
