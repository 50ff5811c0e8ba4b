//! Query data model shared with the downstream query executor.
//!
//! This module defines the contract types flowing through intent analysis:
//!
//! - [`structured::StructuredQuery`]: the output artifact encoding
//!   vector-similarity, field-filter, and graph-relationship search
//!   parameters.
//! - [`intent::QueryIntent`]: the ephemeral classification of a query's
//!   shape produced by the lexical heuristics.
//!
//! The structured query shape is owned by the query executor; intent
//! analysis only ever adds a `where` constraint mapping to a draft that
//! has neither field constraints nor a graph connection.

pub mod intent;
pub mod structured;

pub use intent::{ExtractedTerms, IntentKind, QueryIntent};
pub use structured::{FieldConstraints, FieldPredicate, GraphConnection, StructuredQuery};
