//! Lexical intent classification.
//!
//! Classifies a query into one of the four intent kinds by testing the
//! lower-cased query text for fixed signal keywords. Detection is
//! substring containment over the whole text; the term extractors in
//! [`extraction`](crate::intent::extraction) are the token-wise
//! counterpart.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::intent::extraction::{extract_field_terms, extract_relationship_terms};
use crate::query::intent::{
    CLASSIFICATION_CONFIDENCE, ExtractedTerms, IntentKind, QueryIntent,
};

lazy_static! {
    /// Keywords signalling a field-filtering query.
    static ref FIELD_SIGNALS: HashSet<&'static str> = [
        "where", "filter", "with", "has", "contains", "equals", "greater", "less", "between",
    ]
    .into_iter()
    .collect();

    /// Keywords signalling a graph-relationship query.
    static ref GRAPH_SIGNALS: HashSet<&'static str> = [
        "related", "connected", "linked", "associated", "references",
    ]
    .into_iter()
    .collect();
}

/// Classify the intent of a query string.
///
/// Both signal kinds present classifies as combined; a single signal kind
/// classifies as field or graph respectively; no signal falls back to
/// vector. Confidence is the fixed heuristic constant for every branch.
/// Term extraction runs only for the signal kinds that are present, so the
/// opposite branch's member stays absent rather than empty.
pub fn classify_intent(query: &str) -> QueryIntent {
    let lowered = query.to_lowercase();

    let field_signal = FIELD_SIGNALS.iter().any(|keyword| lowered.contains(keyword));
    let graph_signal = GRAPH_SIGNALS.iter().any(|keyword| lowered.contains(keyword));

    let kind = match (field_signal, graph_signal) {
        (true, true) => IntentKind::Combined,
        (true, false) => IntentKind::Field,
        (false, true) => IntentKind::Graph,
        (false, false) => IntentKind::Vector,
    };

    let mut terms = ExtractedTerms::default();
    if field_signal {
        terms.fields = Some(extract_field_terms(query));
    }
    if graph_signal {
        terms.relationships = Some(extract_relationship_terms(query));
    }

    QueryIntent {
        kind,
        confidence: CLASSIFICATION_CONFIDENCE,
        terms,
    }
}
