//! Data source error types

/// Error reported by a data source when counting or fetching rows fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Data source error: {message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Creates a new source error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned by `Query::order_by` when the backend cannot express the
/// requested ordering.
///
/// This error never escapes the grid controller: an unsupported
/// numeric-substring ordering falls back to lexicographic ordering, and a
/// source that rejects even that leaves the query unordered.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unsupported order expression on column '{column}'")]
pub struct UnsupportedOrder {
    column: String,
}

impl UnsupportedOrder {
    /// Creates a new unsupported order error for the given column.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Returns the column the rejected expression referred to.
    pub fn column(&self) -> &str {
        &self.column
    }
}
