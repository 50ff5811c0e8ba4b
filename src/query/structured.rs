//! Structured query types consumed by the downstream query executor.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::vector::Vector;

/// Mapping from field name to the predicate restricting matching records.
///
/// Keys are unique; writing a predicate for a field that already has one
/// replaces it.
pub type FieldConstraints = AHashMap<String, FieldPredicate>;

/// A predicate over a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldPredicate {
    /// The field must be present, regardless of value.
    Exists(bool),
    /// The field must equal the given value.
    Equals(Value),
    /// The field must be greater than the given value.
    Greater(Value),
    /// The field must be less than the given value.
    Less(Value),
    /// The field must lie between the two given values (inclusive).
    Between(Value, Value),
}

/// A graph-connection clause requesting relationship traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConnection {
    /// Relationship keyword driving the traversal (e.g. "related").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Target entity or phrase to connect to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Maximum traversal depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl GraphConnection {
    /// Create a new graph connection for a relationship keyword.
    pub fn new<S: Into<String>>(relationship: S) -> Self {
        Self {
            relationship: Some(relationship.into()),
            target: None,
            depth: None,
        }
    }

    /// Set the traversal target.
    pub fn with_target<S: Into<String>>(mut self, target: S) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the maximum traversal depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// A structured query for the hybrid search engine.
///
/// Encodes up to three kinds of search parameters at once: free-text /
/// vector similarity (`like`, `vector`), field filtering (`where`), and
/// graph-relationship traversal (`connected`). Members left `None` are
/// omitted from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredQuery {
    /// Free-text similarity clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like: Option<String>,
    /// Embedding similarity clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vector>,
    /// Field-constraint mapping.
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<FieldConstraints>,
    /// Graph-connection clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<GraphConnection>,
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl StructuredQuery {
    /// Create an empty structured query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text similarity clause.
    pub fn with_like<S: Into<String>>(mut self, like: S) -> Self {
        self.like = Some(like.into());
        self
    }

    /// Set the embedding similarity clause.
    pub fn with_vector(mut self, vector: Vector) -> Self {
        self.vector = Some(vector);
        self
    }

    /// Set the field-constraint mapping.
    pub fn with_where(mut self, constraints: FieldConstraints) -> Self {
        self.where_clause = Some(constraints);
        self
    }

    /// Set the graph-connection clause.
    pub fn with_connected(mut self, connection: GraphConnection) -> Self {
        self.connected = Some(connection);
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether this query carries field constraints.
    pub fn has_field_constraints(&self) -> bool {
        self.where_clause.is_some()
    }

    /// Check whether this query carries a graph connection.
    pub fn has_graph_connection(&self) -> bool {
        self.connected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let query = StructuredQuery::new()
            .with_like("rust search engines")
            .with_limit(10);

        assert_eq!(query.like.as_deref(), Some("rust search engines"));
        assert_eq!(query.limit, Some(10));
        assert!(!query.has_field_constraints());
        assert!(!query.has_graph_connection());
    }

    #[test]
    fn test_serde_shape() {
        let mut constraints = FieldConstraints::default();
        constraints.insert("year".to_string(), FieldPredicate::Exists(true));

        let query = StructuredQuery::new()
            .with_like("find articles")
            .with_where(constraints);

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["like"], "find articles");
        assert_eq!(json["where"]["year"]["exists"], true);
        // Absent members are omitted entirely.
        assert!(json.get("vector").is_none());
        assert!(json.get("connected").is_none());
        assert!(json.get("limit").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let query = StructuredQuery::new()
            .with_connected(GraphConnection::new("related").with_target("climate policy"))
            .with_limit(5);

        let json = serde_json::to_string(&query).unwrap();
        let decoded: StructuredQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn test_predicate_serde_tags() {
        let predicate = FieldPredicate::Equals(serde_json::json!(2020));
        let json = serde_json::to_value(&predicate).unwrap();
        assert_eq!(json["equals"], 2020);

        let predicate = FieldPredicate::Between(serde_json::json!(1), serde_json::json!(9));
        let json = serde_json::to_value(&predicate).unwrap();
        assert_eq!(json["between"][0], 1);
        assert_eq!(json["between"][1], 9);
    }
}
