//! The abstract query trait consumed by the grid controller.

use crate::error::SourceError;
use crate::error::UnsupportedOrder;
use crate::model::Row;

use super::OrderExpr;
use super::Predicate;

/// The query capability a data source must provide.
///
/// A `Query` is an immutable builder: `filter`, `order_by`, `limit` and
/// `offset` each return a new query value and must leave the receiver
/// untouched, so one base query can be narrowed independently by any number
/// of renders. The grid derives a fresh builder chain from its base source
/// on every render and never shares intermediate queries between renders.
pub trait Query: Clone {
    /// Returns a new query narrowed by the given predicate.
    fn filter(&self, predicate: &Predicate) -> Self;

    /// Returns a new query ordered by the given expression.
    ///
    /// A backend that cannot express the ordering reports
    /// [`UnsupportedOrder`]; it must not silently misorder. Callers treat
    /// the error as a fallback signal, never as a render failure.
    fn order_by(&self, order: &OrderExpr) -> Result<Self, UnsupportedOrder>;

    /// Returns a new query limited to at most `n` rows.
    fn limit(&self, n: u64) -> Self;

    /// Returns a new query skipping the first `n` rows.
    fn offset(&self, n: u64) -> Self;

    /// Counts the rows matching the query's predicates.
    ///
    /// Limit and offset are not applied to the count.
    fn count(&self) -> Result<u64, SourceError>;

    /// Fetches the rows in the query's window, in query order.
    fn fetch_all(&self) -> Result<Vec<Row>, SourceError>;
}
