//! Pattern matcher trait definition.

use crate::error::Result;
use crate::query::structured::StructuredQuery;
use crate::vector::Vector;

/// Pattern matcher trait.
///
/// Implementations turn a raw query string (and an optional caller-supplied
/// embedding) into a draft structured query. The call is a pure function of
/// its inputs: no state is read or written, and repeated invocation with
/// the same arguments yields the same draft.
pub trait PatternMatcher: Send + Sync {
    /// Produce a draft structured query for the given query text.
    ///
    /// # Arguments
    /// * `query` - The raw query string
    /// * `embedding` - Optional precomputed embedding for the query
    ///
    /// # Returns
    /// The draft `StructuredQuery`
    fn match_query(&self, query: &str, embedding: Option<&Vector>) -> Result<StructuredQuery>;

    /// Get the name of this matcher for debugging and logging.
    fn name(&self) -> &str;
}
