//! Abstract override-store trait.
//!
//! Implementations answer a single question: does a persisted layout
//! override exist for this exact (store, theme, handle) combination? The
//! answer may come from a database, a remote service, or a fixture; the
//! lookup may be arbitrarily expensive, which is why the engine memoizes it
//! (see [`crate::cache`]).

use thiserror::Error;

use crate::context::{StoreId, ThemeId};
use crate::handle::Handle;

/// Errors that can occur during an override existence lookup.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying query failed.
    #[error("override query failed: {0}")]
    QueryFailed(String),

    /// The backend could not be reached.
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Backend error that does not fit the other variants.
    #[error("storage backend error: {0}")]
    BackendError(String),
}

/// Existence check for persisted layout overrides.
///
/// # Contract
/// - The result is true iff an override record exists for that exact store,
///   theme, and handle.
/// - Lookups are side-effect-free and idempotent for the lifetime of one
///   engine instance; the engine caches successful results under that
///   assumption.
pub trait OverrideExistenceStore: Send + Sync {
    /// Returns true if a persisted override exists for the given scope and
    /// handle.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the lookup cannot be answered. The
    /// engine propagates the failure unchanged and never caches it.
    fn has_override(
        &self,
        store: StoreId,
        theme: ThemeId,
        handle: &Handle,
    ) -> Result<bool, StorageError>;
}
