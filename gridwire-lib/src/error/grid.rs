//! GridError for setup and render failures

use super::SourceError;

/// Errors raised by grid setup and the render pipeline.
///
/// All variants are configuration or programmer errors and are fatal to the
/// current render: there is no partial render. Malformed request input
/// (stale sort columns, out-of-range pages, tampered row ids) is never
/// reported through this type; such input is absorbed as a no-op or a
/// logged fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A column was registered under a name that already exists.
    #[error("Column '{name}' already exists")]
    DuplicateColumn { name: String },

    /// Render was attempted with no data source attached.
    #[error("Data source is not set")]
    DataSourceMissing,

    /// Actions were registered without a primary key column.
    #[error("Primary key must be set when using actions")]
    MisconfiguredActions,

    /// A declared column is absent from the fetched rows' fields.
    #[error("Column '{name}' does not exist in data source")]
    UnknownColumn { name: String },

    /// The underlying data source failed to count or fetch.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl GridError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }
}
