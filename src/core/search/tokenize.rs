//! Tokenization shared by indexing and querying.

/// Tokens shorter than this many characters are discarded
pub const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase `text`, split on non-alphanumeric runs and drop short tokens
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
}

/// Distinct query tokens in first-seen order
pub fn query_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in tokenize(text) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
