//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;
use crate::core::error::DocError;
use crate::core::store::TRUNCATION_MARKER;
use serde::Serialize;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for resource keys (plugin, subsystem names)
    pub fn key(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for resource URIs
    pub fn uri(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for search scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Document text with the resource it came from, for JSON output
#[derive(Debug, Serialize)]
pub struct DocOutput {
    pub resource: String,
    pub truncated: bool,
    pub content: String,
}

impl DocOutput {
    pub fn new(resource: impl Into<String>, content: String) -> Self {
        Self {
            resource: resource.into(),
            truncated: is_truncated(&content),
            content,
        }
    }
}

/// Whether a payload ends with the truncation marker
pub fn is_truncated(content: &str) -> bool {
    content
        .lines()
        .last()
        .is_some_and(|line| line.starts_with(TRUNCATION_MARKER))
}

/// Format relative time (e.g., "2h ago", "3d ago")
pub fn format_relative_time(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(*timestamp);
    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let days = duration.num_days();
    let hours = duration.num_hours();
    let mins = duration.num_minutes();

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if mins > 0 {
        format!("{mins}m ago")
    } else {
        "just now".to_string()
    }
}

/// Print output based on format
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print markdown with bold headings and a dimmed truncation notice
pub fn print_markdown(text: &str) {
    let mut in_fence = false;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }

        if !in_fence && line.starts_with('#') {
            println!("{}", colors::label(line));
        } else if line.starts_with(TRUNCATION_MARKER) {
            println!("{}", colors::dim(line));
        } else {
            println!("{line}");
        }
    }
}

/// Report a documentation error before it is returned to `main`
///
/// Human output lists the valid alternatives on stderr; JSON output
/// prints the structured error on stdout.
pub fn print_doc_error(err: &DocError, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            let keys = err.available_keys();
            if !keys.is_empty() {
                let listed: Vec<String> =
                    keys.iter().map(|k| colors::key(k).to_string()).collect();
                eprintln!("{} {}", colors::dim("Available:"), listed.join(", "));
            }
        }
        OutputFormat::Json => {
            print_output(&serde_json::json!({ "error": err.to_structured() }), format);
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
