//! Bounded interaction history.
//!
//! Every processed query is recorded together with the structured query it
//! produced, so future learning features (similarity lookup, query reuse)
//! have material to work with. The history is a fixed-capacity FIFO: the
//! bound is enforced on every insertion, never retroactively.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, YariError};
use crate::query::structured::StructuredQuery;

/// Default number of interactions retained per analyzer instance.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// A single recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The raw query text as submitted.
    pub query: String,
    /// The structured query returned for it.
    pub result: StructuredQuery,
    /// Whether the interaction was later judged successful. Always false
    /// at write time; flipped via outcome feedback.
    pub success: bool,
    /// When the interaction was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Insertion-ordered history bounded to a fixed capacity.
///
/// Owned exclusively by one analyzer instance; lives only in process
/// memory for the instance's lifetime.
#[derive(Debug)]
pub struct QueryHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl QueryHistory {
    /// Create a history with the given capacity. A capacity of zero is
    /// clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an interaction, evicting the oldest entry when at capacity.
    ///
    /// `success` starts false; use [`mark_outcome`](Self::mark_outcome)
    /// once the interaction's outcome is known.
    pub fn record<S: Into<String>>(&mut self, query: S, result: StructuredQuery) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            query: query.into(),
            result,
            success: false,
            recorded_at: Utc::now(),
        });
    }

    /// Flip the success flag of the entry at `index` (insertion order,
    /// 0 = oldest retained entry).
    pub fn mark_outcome(&mut self, index: usize, success: bool) -> Result<()> {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.success = success;
                Ok(())
            }
            None => Err(YariError::invalid_argument(format!(
                "history index {} out of range (len {})",
                index,
                self.entries.len()
            ))),
        }
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the entry at `index` (insertion order, 0 = oldest retained).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate over retained entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(query: &str) -> StructuredQuery {
        StructuredQuery::new().with_like(query)
    }

    #[test]
    fn test_record_and_order() {
        let mut history = QueryHistory::default();
        history.record("first", result_for("first"));
        history.record("second", result_for("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().query, "first");
        assert_eq!(history.get(1).unwrap().query, "second");
        assert!(!history.get(0).unwrap().success);
    }

    #[test]
    fn test_capacity_bound_and_fifo_eviction() {
        let mut history = QueryHistory::new(3);
        for i in 0..5 {
            history.record(format!("query {i}"), result_for("q"));
            assert!(history.len() <= 3);
        }

        assert_eq!(history.len(), 3);
        let queries: Vec<&str> = history.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["query 2", "query 3", "query 4"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = QueryHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.record("only", result_for("only"));
        history.record("newer", result_for("newer"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().query, "newer");
    }

    #[test]
    fn test_mark_outcome() {
        let mut history = QueryHistory::default();
        history.record("a", result_for("a"));
        history.record("b", result_for("b"));

        history.mark_outcome(1, true).unwrap();
        assert!(!history.get(0).unwrap().success);
        assert!(history.get(1).unwrap().success);
    }

    #[test]
    fn test_mark_outcome_out_of_range() {
        let mut history = QueryHistory::default();
        history.record("a", result_for("a"));

        let err = history.mark_outcome(1, true).unwrap_err();
        assert!(matches!(err, YariError::InvalidArgument(_)));
    }
}
