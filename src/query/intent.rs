//! Query intent types produced by lexical classification.

use serde::{Deserialize, Serialize};

/// Confidence assigned to every successful lexical classification.
///
/// A fixed heuristic constant, not a computed score.
pub const CLASSIFICATION_CONFIDENCE: f32 = 0.8;

/// The inferred shape of a natural-language query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    /// Pure similarity search (default when no structural signal is found).
    Vector,
    /// Field-filtering query.
    Field,
    /// Graph-relationship query.
    Graph,
    /// Both field-filtering and graph-relationship signals present.
    Combined,
}

impl IntentKind {
    /// Get the canonical name of this intent kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Vector => "vector",
            IntentKind::Field => "field",
            IntentKind::Graph => "graph",
            IntentKind::Combined => "combined",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terms extracted from the query text during classification.
///
/// A member left `None` means that extraction was not attempted for that
/// category, as opposed to `Some(vec![])` which means extraction ran and
/// found nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTerms {
    /// Tokens interpreted as field names, in traversal order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Relationship keywords, in traversal order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<String>>,
    /// Named entities. Reserved; current extraction never populates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<String>>,
    /// Query modifiers. Reserved; current extraction never populates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<String>>,
}

/// The result of classifying a single query. Ephemeral; created per call
/// and discarded after the structured query is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// The classified query shape.
    pub kind: IntentKind,
    /// Classification confidence in [0, 1].
    pub confidence: f32,
    /// Terms extracted alongside classification.
    pub terms: ExtractedTerms,
}
