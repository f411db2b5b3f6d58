//! ActionError for row action callbacks

/// Error returned by a row action callback.
///
/// Dispatch logs the failure and keeps invoking the remaining callbacks of
/// the action; the error never propagates out of the grid.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Action callback failed: {message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    /// Creates a new action error.
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
