//! Search command - keyword search across all documentation

use crate::cli::output::{colors, print_doc_error};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search terms; every term must appear in a document
    pub query: String,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show resource URIs (no snippets)
    #[arg(long)]
    pub uris_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub uri: String,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub generation: u64,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let results = match services.resolver.search_docs(&args.query, args.limit) {
        Ok(results) => results,
        Err(e) => {
            print_doc_error(&e, format);
            return Err(e.into());
        }
    };

    let output = SearchResponseOutput {
        query: results.query.clone(),
        generation: results.generation,
        total_results: results.hits.len(),
        results: results
            .hits
            .iter()
            .enumerate()
            .map(|(i, hit)| SearchResultItem {
                rank: i + 1,
                uri: services.resolver.uri(&hit.resource_id),
                score: hit.score,
                snippet: if args.uris_only {
                    None
                } else {
                    Some(hit.snippet.clone())
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No documents contain every term of '{}'",
                    colors::label(&args.query)
                );
            } else {
                println!(
                    "Found {} result(s) for '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::label(&output.query)
                );

                for result in &output.results {
                    if args.uris_only {
                        println!("{}", colors::uri(&result.uri));
                        continue;
                    }
                    println!(
                        "[{}] {} {}",
                        colors::rank(&result.rank.to_string()),
                        colors::uri(&result.uri),
                        colors::score(&format!("(score: {})", result.score))
                    );
                    if let Some(snippet) = &result.snippet {
                        for line in snippet.lines().take(5) {
                            println!("    {}", colors::dim(line));
                        }
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
