//! Error type for fallback execution.

/// Errors produced by [`execute`](crate::execute) and
/// [`Chain::run`](crate::Chain::run).
///
/// The `E` parameter is the caller's own operation error type, carried by
/// value and untouched: callers that inspect the failure see exactly what
/// the last operation produced. `NoOperations` is distinguishable from any
/// error an operation itself could raise.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChainError<E> {
    /// The operation list was empty; nothing was invoked.
    #[error("at least one operation must be provided")]
    NoOperations,

    /// Every operation failed; holds the last operation's error unchanged.
    #[error("{0}")]
    Exhausted(E),
}

impl<E> ChainError<E> {
    /// Returns `true` if the operation list was empty.
    pub fn is_no_operations(&self) -> bool {
        matches!(self, Self::NoOperations)
    }

    /// The last operation's error, if every operation failed.
    pub fn last_error(&self) -> Option<&E> {
        match self {
            Self::NoOperations => None,
            Self::Exhausted(e) => Some(e),
        }
    }

    /// Consume the error and return the last operation's error, if any.
    pub fn into_last_error(self) -> Option<E> {
        match self {
            Self::NoOperations => None,
            Self::Exhausted(e) => Some(e),
        }
    }
}
