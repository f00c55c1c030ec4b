//! Inverted index with conjunctive matching and frequency ranking.
//!
//! Built once per snapshot from the document store and never mutated
//! afterwards. Postings are kept in document order, and document order
//! is `ResourceId` order, so equal scores tie-break lexicographically
//! without an extra comparison on the ids.

use std::collections::HashMap;

use super::tokenize::{query_tokens, tokenize};
use crate::core::error::{DocError, Result};
use crate::core::store::DocumentStore;
use crate::core::types::{ResourceId, SearchHit};

/// (document number, occurrence count)
type Posting = (u32, u32);

/// Token -> per-document occurrence counts
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    ids: Vec<ResourceId>,
    postings: HashMap<String, Vec<Posting>>,
    snippet_chars: usize,
}

impl SearchIndex {
    /// Derive an index from every document in the store
    pub fn build(store: &DocumentStore, snippet_chars: usize) -> Self {
        let mut ids = Vec::with_capacity(store.len());
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();

        for (doc_num, doc) in store.documents().enumerate() {
            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in tokenize(&doc.raw_content) {
                *counts.entry(token).or_insert(0) += 1;
            }
            for (token, count) in counts {
                postings
                    .entry(token)
                    .or_default()
                    .push((doc_num as u32, count));
            }
            ids.push(doc.resource_id.clone());
        }

        tracing::debug!(
            "Built search index: {} documents, {} terms",
            ids.len(),
            postings.len()
        );

        Self {
            ids,
            postings,
            snippet_chars,
        }
    }

    /// Ranked conjunctive search
    ///
    /// Every distinct query token must occur in a document for it to
    /// match. Score is the sum of the tokens' occurrence counts. Ties
    /// are broken by resource id.
    ///
    /// # Errors
    ///
    /// `InvalidQuery` if the query has no tokens after tokenization
    pub fn query(
        &self,
        store: &DocumentStore,
        text: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>> {
        let tokens = query_tokens(text);
        if tokens.is_empty() {
            return Err(DocError::InvalidQuery(
                "Query contains no searchable terms".to_string(),
            ));
        }

        let mut lists = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match self.postings.get(token) {
                Some(list) => lists.push(list),
                None => return Ok(Vec::new()),
            }
        }

        // Intersect starting from the rarest token
        lists.sort_by_key(|list| list.len());
        let mut scores: Vec<Posting> = lists[0].clone();
        for list in &lists[1..] {
            scores.retain_mut(|(doc_num, score)| {
                let key = *doc_num;
                match list.binary_search_by_key(&key, |(d, _)| *d) {
                    Ok(pos) => {
                        *score += list[pos].1;
                        true
                    }
                    Err(_) => false,
                }
            });
            if scores.is_empty() {
                return Ok(Vec::new());
            }
        }

        // Stable sort keeps document (= id) order among equal scores
        scores.sort_by(|a, b| b.1.cmp(&a.1));
        scores.truncate(limit);

        let hits = scores
            .into_iter()
            .filter_map(|(doc_num, score)| {
                let resource_id = self.ids.get(doc_num as usize)?.clone();
                let snippet = self.snippet(store, &resource_id, &tokens);
                Some(SearchHit {
                    resource_id,
                    score,
                    snippet,
                })
            })
            .collect();

        Ok(hits)
    }

    /// Occurrences of `token` in one document
    pub fn term_frequency(&self, token: &str, id: &ResourceId) -> u32 {
        let Ok(doc_num) = self.ids.binary_search(id) else {
            return 0;
        };
        self.postings
            .get(token)
            .and_then(|list| {
                list.binary_search_by_key(&(doc_num as u32), |(d, _)| *d)
                    .ok()
                    .map(|pos| list[pos].1)
            })
            .unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.ids.len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// First section (in document order) containing any query token
    fn snippet(&self, store: &DocumentStore, id: &ResourceId, tokens: &[String]) -> String {
        let Ok(doc) = store.get(id) else {
            return String::new();
        };

        let section_text = doc
            .sections
            .iter()
            .map(|s| doc.section_text(s))
            .find(|text| tokenize(text).any(|t| tokens.contains(&t)))
            .unwrap_or(&doc.raw_content);

        truncate_chars(section_text.trim(), self.snippet_chars)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
        None => text.to_string(),
    }
}
