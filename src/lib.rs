//! # Yari
//!
//! Query intent analysis for hybrid search engines.
//!
//! Yari translates free-text natural-language questions into structured
//! query objects for a downstream search engine that combines vector
//! similarity, field filtering, and graph-relationship traversal. It does
//! not execute queries and does not compute embeddings; callers supply an
//! optional precomputed embedding alongside the query text.
//!
//! ## Features
//!
//! - Lexical intent classification (vector / field / graph / combined)
//! - Field and relationship term extraction
//! - Field-constraint synthesis for under-specified drafts
//! - Pluggable pattern-matching collaborator behind a narrow trait
//! - Bounded interaction history with outcome feedback
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use yari::error::Result;
//! use yari::intent::analyzer::QueryIntentAnalyzer;
//! use yari::matcher::rules::RulePatternMatcher;
//!
//! async fn example() -> Result<()> {
//!     let matcher = Arc::new(RulePatternMatcher::new()?);
//!     let mut analyzer = QueryIntentAnalyzer::new(matcher);
//!     analyzer.initialize().await?;
//!
//!     let query = analyzer
//!         .process_query("find articles where year equals 2020", None)
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&query)?);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod intent;
pub mod matcher;
pub mod query;
pub mod vector;

pub mod prelude {
    pub use crate::error::{Result, YariError};
    pub use crate::intent::analyzer::{AnalyzerConfig, QueryIntentAnalyzer};
    pub use crate::matcher::pattern::PatternMatcher;
    pub use crate::query::intent::{IntentKind, QueryIntent};
    pub use crate::query::structured::StructuredQuery;
    pub use crate::vector::Vector;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
