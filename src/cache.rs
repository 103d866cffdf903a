//! Per-pass memoization of override existence lookups.
//!
//! Override lookups can be expensive (a persisted or remote query), and the
//! same handle recurs across passes over one engine's lifetime. The cache is
//! a single map keyed by the composite (store, theme, handle) triple, scoped
//! to the owning engine: created empty, populated lazily, discarded with the
//! engine. There is no eviction, TTL, or size bound — this is a
//! correctness-oriented memo, not a general cache.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::context::{StoreId, ThemeId};
use crate::handle::Handle;
use crate::storage::StorageError;

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

type CacheKey = (StoreId, ThemeId, Handle);

/// Lazy memo table for override existence results.
///
/// # Guarantees
/// - At most one successful fetch per distinct (store, theme, handle) key
///   for the lifetime of the cache (a benign duplicate fetch may occur when
///   two threads miss the same key concurrently; the first write wins).
/// - A failed fetch is never cached: the next lookup for that key fetches
///   again rather than treating the failure as "no override exists".
/// - Entries are write-once: a stored value is never overwritten.
#[derive(Debug, Default)]
pub struct ExistenceCache {
    entries: RwLock<HashMap<CacheKey, bool>>,
}

impl ExistenceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized existence result for the key, fetching it on
    /// first use.
    ///
    /// On a hit the stored value is returned and `fetch` is not invoked. On
    /// a miss `fetch` runs once; its result is stored and returned.
    ///
    /// # Errors
    /// Propagates the `fetch` error on a miss, leaving the key unpopulated.
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn exists<F>(
        &self,
        store: StoreId,
        theme: ThemeId,
        handle: &Handle,
        fetch: F,
    ) -> Result<bool, StorageError>
    where
        F: FnOnce() -> Result<bool, StorageError>,
    {
        let key = (store, theme, handle.clone());

        {
            let entries = self.entries.read().map_err(|_| lock_err("exists/read"))?;
            if let Some(&found) = entries.get(&key) {
                return Ok(found);
            }
        }

        // Fetch outside the lock; an expensive lookup must not block readers.
        let fetched = fetch()?;

        let mut entries = self.entries.write().map_err(|_| lock_err("exists/write"))?;
        // Another thread may have fetched while we did; keep the first write.
        Ok(*entries.entry(key).or_insert(fetched))
    }

    /// Number of memoized entries.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        let entries = self.entries.read().map_err(|_| lock_err("len"))?;
        Ok(entries.len())
    }

    /// Returns true if nothing has been memoized yet.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}
