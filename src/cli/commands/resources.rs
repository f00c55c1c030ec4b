//! List-resources command - every addressable document

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-resources command
#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Only list URIs
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
pub struct ResourcesOutput {
    pub generation: Option<u64>,
    pub resources: Vec<crate::core::types::ResourceInfo>,
}

pub fn execute(
    args: ResourcesArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resources = services.resolver.list_resources()?;
    let status = services.resolver.cache_status();

    match format {
        OutputFormat::Human => {
            if args.quiet {
                for resource in &resources {
                    println!("{}", resource.uri);
                }
                return Ok(());
            }

            print_header(&format!("Resources ({})", resources.len()));
            if let Some(built_at) = status.built_at {
                println!(
                    "{}",
                    colors::dim(&format!(
                        "snapshot built {}",
                        crate::cli::output::format_relative_time(&built_at)
                    ))
                );
            }
            println!();
            for resource in &resources {
                println!(
                    "{}  {}",
                    colors::uri(&resource.uri),
                    colors::dim(&resource.name)
                );
            }
        }
        OutputFormat::Json => {
            let output = ResourcesOutput {
                generation: status.generation,
                resources,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
