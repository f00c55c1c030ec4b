//! Markdown section splitting.
//!
//! Produces a flat, ordered list of `(depth, heading, span)` tuples.
//! Spans never overlap and together cover the whole document, so
//! concatenating every section's text reproduces the input exactly.
//! Lines inside fenced code blocks are never treated as headings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::Section;

// ATX heading: 1-6 markers, at least one space, heading text
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*?)[ \t]*$").unwrap());

static FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ {0,3}(```|~~~)").unwrap());

/// Split document content into sections
///
/// Text before the first heading becomes a depth-0 section with an
/// empty heading. An empty document has no sections.
pub fn split_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(usize, String, usize)> = None;
    let mut fence: Option<&str> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if let Some(caps) = FENCE_PATTERN.captures(trimmed) {
            let marker = caps.get(1).map_or("```", |m| m.as_str());
            fence = match fence {
                Some(open) if open == marker => None,
                Some(open) => Some(open),
                None => Some(marker),
            };
            continue;
        }
        if fence.is_some() {
            continue;
        }

        let Some(caps) = HEADING_PATTERN.captures(trimmed) else {
            continue;
        };

        let depth = caps[1].len();
        let heading = clean_heading(&caps[2]);

        match current.take() {
            Some((d, h, s)) => sections.push(Section {
                depth: d,
                heading: h,
                span: s..start,
            }),
            None if start > 0 => sections.push(Section {
                depth: 0,
                heading: String::new(),
                span: 0..start,
            }),
            None => {}
        }
        current = Some((depth, heading, start));
    }

    match current {
        Some((depth, heading, start)) => sections.push(Section {
            depth,
            heading,
            span: start..content.len(),
        }),
        None if !content.is_empty() => sections.push(Section {
            depth: 0,
            heading: String::new(),
            span: 0..content.len(),
        }),
        None => {}
    }

    sections
}

/// Strip optional closing `#` markers from a heading
fn clean_heading(raw: &str) -> String {
    let without_closing = raw.trim_end_matches('#');
    if without_closing.len() != raw.len() && !without_closing.ends_with([' ', '\t']) {
        // `# C#` keeps its trailing marker
        return raw.trim().to_string();
    }
    without_closing.trim().to_string()
}
