//! Pattern-matching collaborator boundary.
//!
//! The bulk of structural extraction, turning raw text into a draft
//! [`StructuredQuery`](crate::query::structured::StructuredQuery), is
//! performed behind the [`pattern::PatternMatcher`] trait: a single pure
//! call with no shared mutable state, so the intent analyzer can be
//! exercised with a substitute implementation.
//!
//! [`rules::RulePatternMatcher`] is a compact rule-table reference
//! implementation for callers that do not bring their own matcher.

pub mod pattern;
pub mod rules;

pub use pattern::PatternMatcher;
pub use rules::RulePatternMatcher;
