//! In-memory override store.
//!
//! Thread-safe reference implementation of [`OverrideExistenceStore`],
//! intended for tests and embedded usage.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::context::{StoreId, ThemeId};
use crate::handle::Handle;
use crate::storage::traits::{OverrideExistenceStore, StorageError};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

/// An override store backed by an in-memory set of (store, theme, handle)
/// triples.
///
/// # Examples
///
/// ```
/// use handlefilter::{Handle, InMemoryOverrideStore, OverrideExistenceStore, StoreId, ThemeId};
///
/// let store = InMemoryOverrideStore::new();
/// let handle = Handle::new("catalog_category_view_id_42").unwrap();
/// store.insert(StoreId::new(1), ThemeId::new(2), handle.clone()).unwrap();
///
/// assert!(store.has_override(StoreId::new(1), ThemeId::new(2), &handle).unwrap());
/// assert!(!store.has_override(StoreId::new(2), ThemeId::new(2), &handle).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    records: RwLock<HashSet<(StoreId, ThemeId, Handle)>>,
}

impl InMemoryOverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an override for the given scope and handle.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn insert(
        &self,
        store: StoreId,
        theme: ThemeId,
        handle: Handle,
    ) -> Result<(), StorageError> {
        let mut records = self.records.write().map_err(|_| lock_err("insert"))?;
        records.insert((store, theme, handle));
        Ok(())
    }

    /// Removes an override record. Returns true if it was present.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn remove(
        &self,
        store: StoreId,
        theme: ThemeId,
        handle: &Handle,
    ) -> Result<bool, StorageError> {
        let mut records = self.records.write().map_err(|_| lock_err("remove"))?;
        Ok(records.remove(&(store, theme, handle.clone())))
    }

    /// Number of recorded overrides.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn len(&self) -> Result<usize, StorageError> {
        let records = self.records.read().map_err(|_| lock_err("len"))?;
        Ok(records.len())
    }

    /// Returns true if no overrides are recorded.
    ///
    /// # Errors
    /// Returns [`StorageError::BackendError`] if the internal lock is
    /// poisoned.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

impl OverrideExistenceStore for InMemoryOverrideStore {
    fn has_override(
        &self,
        store: StoreId,
        theme: ThemeId,
        handle: &Handle,
    ) -> Result<bool, StorageError> {
        let records = self.records.read().map_err(|_| lock_err("has_override"))?;
        Ok(records.contains(&(store, theme, handle.clone())))
    }
}
