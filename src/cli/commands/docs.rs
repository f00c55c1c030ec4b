//! Document commands - overview, plugin, api, testing, subsystem,
//! development and read-by-URI

use crate::cli::output::{print_doc_error, print_markdown, print_output, DocOutput};
use crate::cli::OutputFormat;
use crate::core::error::Result as DocResult;
use crate::core::services::Services;
use crate::core::types::{Category, ResourceId};
use clap::Args;
use std::sync::Arc;

/// Arguments for the overview command
#[derive(Args, Debug)]
pub struct OverviewArgs {}

/// Arguments for the plugin-docs command
#[derive(Args, Debug)]
pub struct PluginArgs {
    /// Plugin name; omit to list plugins
    pub plugin_name: Option<String>,

    /// Section to return ('all', a named topic, or heading text)
    #[arg(long, short = 't')]
    pub topic: Option<String>,
}

/// Arguments for commands that take only a topic
#[derive(Args, Debug)]
pub struct TopicArgs {
    /// Section to return ('all', a named topic, or heading text)
    #[arg(long, short = 't')]
    pub topic: Option<String>,
}

/// Arguments for the subsystem-docs command
#[derive(Args, Debug)]
pub struct SubsystemArgs {
    /// Subsystem name
    pub subsystem: String,
}

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Resource URI, e.g. docs://api/best_practices
    pub uri: String,
}

pub fn execute_overview(
    _args: OverviewArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = services.resolver.uri(&ResourceId::bare(Category::Overview));
    emit(services.resolver.overview(), resource, format)
}

pub fn execute_plugin(
    args: PluginArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = match &args.plugin_name {
        Some(name) => ResourceId::keyed(Category::Plugin, name.as_str()),
        None => ResourceId::bare(Category::Plugin),
    };
    let result = services
        .resolver
        .plugin_docs(args.plugin_name.as_deref(), args.topic.as_deref());
    emit(result, services.resolver.uri(&id), format)
}

pub fn execute_api(
    args: TopicArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = services.resolver.uri(&ResourceId::bare(Category::Api));
    emit(
        services.resolver.api_docs(args.topic.as_deref()),
        resource,
        format,
    )
}

pub fn execute_testing(
    args: TopicArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = services.resolver.uri(&ResourceId::bare(Category::Testing));
    emit(
        services.resolver.testing_docs(args.topic.as_deref()),
        resource,
        format,
    )
}

pub fn execute_subsystem(
    args: SubsystemArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = services
        .resolver
        .uri(&ResourceId::keyed(Category::Subsystem, args.subsystem.as_str()));
    emit(
        services.resolver.subsystem_docs(&args.subsystem),
        resource,
        format,
    )
}

pub fn execute_development(
    args: TopicArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resource = services
        .resolver
        .uri(&ResourceId::bare(Category::Development));
    emit(
        services.resolver.development_docs(args.topic.as_deref()),
        resource,
        format,
    )
}

pub fn execute_read(
    args: ReadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    emit(services.resolver.read_uri(&args.uri), args.uri, format)
}

/// Print a document payload, or report the error with its suggestions
fn emit(
    result: DocResult<String>,
    resource: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(content) => {
            match format {
                OutputFormat::Human => print_markdown(&content),
                OutputFormat::Json => print_output(&DocOutput::new(resource, content), format),
            }
            Ok(())
        }
        Err(e) => {
            print_doc_error(&e, format);
            Err(e.into())
        }
    }
}
