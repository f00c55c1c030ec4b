//! Section-boundary truncation.
//!
//! Payloads are cut only between sections, never inside one. When
//! anything is dropped a marker naming the omitted headings is
//! appended so callers can tell the result is partial and request a
//! narrower topic.

/// Prefix of the marker appended to truncated payloads
pub const TRUNCATION_MARKER: &str = "[Truncated:";

/// Omitted headings listed in the marker before eliding the rest
const MAX_LISTED_HEADINGS: usize = 12;

/// One section as seen by the truncator
#[derive(Debug, Clone, Copy)]
pub struct Part<'a> {
    pub heading: &'a str,
    pub text: &'a str,
}

/// Concatenate `parts` in order, stopping at the first section that
/// would push the body over `max_chars`
///
/// The body never exceeds `max_chars`; the marker is appended after it.
pub fn truncate_parts(parts: &[Part<'_>], max_chars: usize) -> String {
    let total: usize = parts.iter().map(|p| p.text.chars().count()).sum();
    if total <= max_chars {
        return parts.iter().map(|p| p.text).collect();
    }

    let mut body = String::new();
    let mut used = 0;
    let mut kept = 0;

    for part in parts {
        let len = part.text.chars().count();
        if used + len > max_chars {
            break;
        }
        body.push_str(part.text);
        used += len;
        kept += 1;
    }

    let omitted: Vec<&str> = parts[kept..]
        .iter()
        .map(|p| p.heading)
        .filter(|h| !h.is_empty())
        .collect();

    tracing::debug!(
        "Truncated payload: kept {} of {} sections ({} chars)",
        kept,
        parts.len(),
        used
    );

    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }
    if !body.is_empty() {
        body.push('\n');
    }
    body.push_str(&marker(kept, parts.len(), &omitted));
    body
}

fn marker(kept: usize, total: usize, omitted: &[&str]) -> String {
    let mut listed = omitted
        .iter()
        .take(MAX_LISTED_HEADINGS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if omitted.len() > MAX_LISTED_HEADINGS {
        listed.push_str(&format!(", ... ({} more)", omitted.len() - MAX_LISTED_HEADINGS));
    }

    if listed.is_empty() {
        format!("{TRUNCATION_MARKER} showing {kept} of {total} sections]")
    } else {
        format!("{TRUNCATION_MARKER} showing {kept} of {total} sections; omitted: {listed}]")
    }
}
