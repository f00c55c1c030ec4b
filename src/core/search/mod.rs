//! Search module for token-based full-text search.
//!
//! No stemming or fuzzy matching: a query matches a document only if
//! every query token occurs in it.

mod index;
mod tokenize;

pub use index::SearchIndex;
pub use tokenize::{query_tokens, tokenize, MIN_TOKEN_CHARS};
