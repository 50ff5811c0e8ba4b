//! Query intent analyzer.
//!
//! The public entry point of the crate. [`QueryIntentAnalyzer`] delegates
//! first-pass structural extraction to its
//! [`PatternMatcher`](crate::matcher::pattern::PatternMatcher)
//! collaborator, enriches drafts that carry neither field constraints nor
//! a graph connection, and records every interaction in a bounded
//! history.
//!
//! The analyzer is built for single-writer use: one instance per logical
//! session, no internal locking.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::intent::classifier::classify_intent;
use crate::intent::history::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, QueryHistory};
use crate::matcher::pattern::PatternMatcher;
use crate::query::intent::{IntentKind, QueryIntent};
use crate::query::structured::{FieldConstraints, FieldPredicate, StructuredQuery};
use crate::vector::Vector;

/// Configuration for a [`QueryIntentAnalyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Number of interactions retained in the history.
    pub history_capacity: usize,
    /// Result limit used by direct query assembly.
    pub direct_query_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            direct_query_limit: 10,
        }
    }
}

/// Analyzes natural-language queries and assembles structured queries.
pub struct QueryIntentAnalyzer {
    matcher: Arc<dyn PatternMatcher>,
    config: AnalyzerConfig,
    history: QueryHistory,
    session_id: Uuid,
}

impl std::fmt::Debug for QueryIntentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryIntentAnalyzer")
            .field("matcher", &self.matcher.name())
            .field("config", &self.config)
            .field("history_len", &self.history.len())
            .field("session_id", &self.session_id)
            .finish()
    }
}

impl QueryIntentAnalyzer {
    /// Create an analyzer with the default configuration.
    pub fn new(matcher: Arc<dyn PatternMatcher>) -> Self {
        Self::with_config(matcher, AnalyzerConfig::default())
    }

    /// Create an analyzer with an explicit configuration.
    pub fn with_config(matcher: Arc<dyn PatternMatcher>, config: AnalyzerConfig) -> Self {
        let history = QueryHistory::new(config.history_capacity);
        Self {
            matcher,
            config,
            history,
            session_id: Uuid::new_v4(),
        }
    }

    /// Initialize the analyzer.
    ///
    /// No eager setup is required; this is a no-op retained for interface
    /// symmetry with components that do need setup, and completes
    /// immediately.
    pub async fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a query string into a structured query.
    ///
    /// The pattern matcher produces the draft. When the draft carries
    /// neither field constraints nor a graph connection, the query is
    /// classified lexically, and a field classification with at least one
    /// extracted field term attaches an existence-constraint mapping. The
    /// interaction is recorded in the bounded history before returning.
    ///
    /// Matcher failures propagate unmodified.
    pub async fn process_query(
        &mut self,
        query: &str,
        embedding: Option<&Vector>,
    ) -> Result<StructuredQuery> {
        let mut draft = self.matcher.match_query(query, embedding)?;

        if !draft.has_field_constraints() && !draft.has_graph_connection() {
            let intent = classify_intent(query);
            if intent.kind == IntentKind::Field {
                if let Some(fields) = intent.terms.fields.as_deref() {
                    if !fields.is_empty() {
                        draft.where_clause = Some(synthesize_field_constraints(fields));
                    }
                }
            }
        }

        self.history.record(query, draft.clone());

        Ok(draft)
    }

    /// Record the observed outcome of a past interaction.
    ///
    /// `index` addresses the retained history in insertion order
    /// (0 = oldest). Out-of-range indices are rejected.
    pub fn mark_outcome(&mut self, index: usize, success: bool) -> Result<()> {
        self.history.mark_outcome(index, success)
    }

    /// The recorded interaction history.
    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    /// Identifier of the logical session owning this instance.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Retrieve prior interactions similar to the given embedding.
    ///
    /// Extension seam for similarity search over the history; the
    /// similarity function is not implemented yet, so this always returns
    /// an empty list.
    pub fn find_similar_queries(
        &self,
        _embedding: &Vector,
        _limit: usize,
    ) -> Result<Vec<HistoryEntry>> {
        Ok(Vec::new())
    }

    /// Adapt a previously assembled query to a new input string.
    ///
    /// Extension seam for query-reuse strategies; currently the identity
    /// function over the previous result.
    pub fn adapt_previous_query(
        &self,
        previous: &StructuredQuery,
        _query: &str,
    ) -> StructuredQuery {
        previous.clone()
    }

    /// Extract named entities from a query string.
    ///
    /// Extension seam for an external entity-recognition collaborator;
    /// always empty today.
    pub fn extract_entities(&self, _query: &str) -> Vec<String> {
        Vec::new()
    }

    /// Assemble a minimal structured query directly from its parts,
    /// bypassing the pattern matcher.
    ///
    /// Fallback construction strategy: the text becomes a `like` clause
    /// with the configured direct-query limit. Not wired into
    /// [`process_query`](Self::process_query).
    pub fn build_direct_query(
        &self,
        text: &str,
        _intent: &QueryIntent,
        _entities: &[String],
    ) -> StructuredQuery {
        StructuredQuery::new()
            .with_like(text)
            .with_limit(self.config.direct_query_limit)
    }
}

/// Map each extracted field term to an existence predicate.
///
/// Presence of a field keyword is treated as "this field must exist";
/// no comparison value or operator is parsed from context. Duplicate
/// terms overwrite.
fn synthesize_field_constraints(fields: &[String]) -> FieldConstraints {
    let mut constraints = FieldConstraints::default();
    for field in fields {
        constraints.insert(field.clone(), FieldPredicate::Exists(true));
    }
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::intent::CLASSIFICATION_CONFIDENCE;

    /// Substitute matcher returning a bare like-clause draft.
    #[derive(Debug)]
    struct PassthroughMatcher;

    impl PatternMatcher for PassthroughMatcher {
        fn match_query(
            &self,
            query: &str,
            _embedding: Option<&Vector>,
        ) -> Result<StructuredQuery> {
            Ok(StructuredQuery::new().with_like(query))
        }

        fn name(&self) -> &str {
            "passthrough"
        }
    }

    fn analyzer() -> QueryIntentAnalyzer {
        QueryIntentAnalyzer::new(Arc::new(PassthroughMatcher))
    }

    #[test]
    fn test_synthesize_field_constraints() {
        let fields = vec!["year".to_string(), "author".to_string(), "year".to_string()];
        let constraints = synthesize_field_constraints(&fields);

        assert_eq!(constraints.len(), 2);
        assert_eq!(
            constraints.get("year"),
            Some(&FieldPredicate::Exists(true))
        );
        assert_eq!(
            constraints.get("author"),
            Some(&FieldPredicate::Exists(true))
        );
    }

    #[tokio::test]
    async fn test_initialize_is_a_noop() {
        let mut analyzer = analyzer();
        analyzer.initialize().await.unwrap();
        assert!(analyzer.history().is_empty());
    }

    #[test]
    fn test_find_similar_queries_stub_returns_empty() {
        let analyzer = analyzer();
        let embedding = Vector::new(vec![0.5; 8]);
        let similar = analyzer.find_similar_queries(&embedding, 5).unwrap();
        assert!(similar.is_empty());
    }

    #[test]
    fn test_adapt_previous_query_stub_is_identity() {
        let analyzer = analyzer();
        let previous = StructuredQuery::new().with_like("old query").with_limit(3);
        let adapted = analyzer.adapt_previous_query(&previous, "new query");
        assert_eq!(adapted, previous);
    }

    #[test]
    fn test_extract_entities_stub_returns_empty() {
        let analyzer = analyzer();
        assert!(analyzer.extract_entities("papers by Jane Doe").is_empty());
    }

    #[test]
    fn test_build_direct_query() {
        let analyzer = analyzer();
        let intent = QueryIntent {
            kind: IntentKind::Vector,
            confidence: CLASSIFICATION_CONFIDENCE,
            terms: Default::default(),
        };

        let query = analyzer.build_direct_query("recent papers", &intent, &[]);
        assert_eq!(query.like.as_deref(), Some("recent papers"));
        assert_eq!(query.limit, Some(10));
        assert!(query.where_clause.is_none());
    }
}
