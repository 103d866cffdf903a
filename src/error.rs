//! Error types for handlefilter.
//!
//! All errors are strongly typed using thiserror. Collaborator failures
//! propagate unmodified through the engine: no retries, no silent
//! degradation, and a lookup failure is never treated as "no override
//! exists".

use thiserror::Error;

use crate::context::ContextError;
use crate::storage::StorageError;

/// Top-level error type for filtering operations.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The (store, theme) context could not be resolved; no filtering took
    /// place.
    #[error("context resolution failed: {0}")]
    Context(#[from] ContextError),

    /// An override existence lookup failed; the filtering pass was aborted.
    #[error("override lookup failed: {0}")]
    Lookup(#[from] StorageError),
}

impl FilterError {
    /// Returns true if this is a context resolution failure.
    #[must_use]
    pub const fn is_context(&self) -> bool {
        matches!(self, Self::Context(_))
    }

    /// Returns true if this is an override lookup failure.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }
}

/// Result type alias for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_error_from_context() {
        let err: FilterError = ContextError::ThemeUnavailable {
            message: "design not initialized".to_string(),
        }
        .into();
        assert!(err.is_context());
        assert!(!err.is_lookup());
        assert!(err.to_string().contains("context resolution failed"));
        assert!(err.to_string().contains("design not initialized"));
    }

    #[test]
    fn test_filter_error_from_storage() {
        let err: FilterError = StorageError::ConnectionError("refused".to_string()).into();
        assert!(err.is_lookup());
        assert!(err.to_string().contains("override lookup failed"));
        assert!(err.to_string().contains("refused"));
    }
}
