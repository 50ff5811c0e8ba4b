//! Query intent analysis.
//!
//! Turns a natural-language question into a structured query for the
//! hybrid search engine:
//!
//! - `analyzer`: [`analyzer::QueryIntentAnalyzer`], the public entry
//!   point. Delegates structural extraction to a
//!   [`PatternMatcher`](crate::matcher::pattern::PatternMatcher) and
//!   enriches drafts that lack structural constraints.
//! - `classifier`: lexical intent classification over fixed keyword sets.
//! - `extraction`: pure field/relationship term extraction.
//! - `history`: bounded interaction history with outcome feedback.

pub mod analyzer;
pub mod classifier;
pub mod extraction;
pub mod history;

pub use analyzer::{AnalyzerConfig, QueryIntentAnalyzer};
pub use history::{HistoryEntry, QueryHistory};
