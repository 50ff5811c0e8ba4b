//! Lexical term extraction.
//!
//! Pure functions over the query string; no state is read or written.
//! Tokenization is whitespace splitting, so punctuation stays attached to
//! its token and only bare occurrences of vocabulary words match.

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Tokens interpreted as field names when they appear in a query.
    static ref FIELD_VOCABULARY: HashSet<&'static str> = [
        "year", "date", "author", "type", "category", "status", "price",
    ]
    .into_iter()
    .collect();

    /// Tokens interpreted as relationship keywords.
    static ref RELATIONSHIP_VOCABULARY: HashSet<&'static str> = [
        "related", "connected", "linked", "references", "cites",
    ]
    .into_iter()
    .collect();
}

/// Extract candidate field names from a query string.
///
/// Splits the original-case query on whitespace, lower-cases each token,
/// and keeps the tokens found in the field vocabulary. Matches are
/// returned in traversal order with duplicates preserved.
pub fn extract_field_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .filter(|token| FIELD_VOCABULARY.contains(token.as_str()))
        .collect()
}

/// Extract relationship keywords from a query string.
///
/// Lower-cases the whole query first, then splits on whitespace and keeps
/// the tokens found in the relationship vocabulary, in traversal order.
pub fn extract_relationship_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| RELATIONSHIP_VOCABULARY.contains(token))
        .map(|token| token.to_string())
        .collect()
}
