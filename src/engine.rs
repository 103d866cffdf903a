//! The handle filter engine.
//!
//! This module orchestrates the whole decision: classify each handle,
//! consult the policy, and memoize the override existence check. The engine
//! is the only component with access to all collaborators; construct one per
//! request/pass so the memo never leaks across requests.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::cache::ExistenceCache;
use crate::category::HandleCategory;
use crate::context::{ContextResolver, StoreId, ThemeId};
use crate::error::FilterResult;
use crate::handle::{Handle, HandleSet};
use crate::policy::FilterPolicy;
use crate::storage::OverrideExistenceStore;

/// Decision engine that prunes removable handles lacking an override.
///
/// Holds an immutable [`FilterPolicy`], the override store, and a fresh
/// [`ExistenceCache`] scoped to this instance. Dropping the engine discards
/// the memo; recreating the engine is the only way to reset it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use handlefilter::{
///     FilterPolicy, HandleFilterEngine, HandleSet, InMemoryOverrideStore,
///     StoreId, ThemeId,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = HandleFilterEngine::new(
///     FilterPolicy::remove_all(),
///     Arc::new(InMemoryOverrideStore::new()),
/// );
///
/// let handles = HandleSet::from_names(["default", "catalog_category_view_id_5"])?;
/// let filtered = engine.filter(handles, StoreId::new(1), ThemeId::new(1))?;
/// assert!(filtered.contains_name("default"));
/// assert!(!filtered.contains_name("catalog_category_view_id_5"));
/// # Ok(())
/// # }
/// ```
pub struct HandleFilterEngine {
    policy: FilterPolicy,
    overrides: Arc<dyn OverrideExistenceStore>,
    cache: ExistenceCache,
}

impl HandleFilterEngine {
    /// Creates an engine with the given policy and override store.
    ///
    /// The existence cache starts empty.
    #[must_use]
    pub fn new(policy: FilterPolicy, overrides: Arc<dyn OverrideExistenceStore>) -> Self {
        Self {
            policy,
            overrides,
            cache: ExistenceCache::new(),
        }
    }

    /// The policy this engine was constructed with.
    #[must_use]
    pub const fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// The engine-scoped existence cache.
    #[must_use]
    pub const fn cache(&self) -> &ExistenceCache {
        &self.cache
    }

    /// Filters a handle set under the given (store, theme) scope.
    ///
    /// For each handle, in the set's original order: classify it; if it
    /// matches a removable category enabled in the policy, consult the
    /// (memoized) override existence check; remove the handle unless an
    /// override exists. Handles matching no category, or a category the
    /// policy leaves alone, are kept without any lookup. Relative order of
    /// retained handles is preserved, and no handle is ever added.
    ///
    /// With a disabled policy the input is returned unchanged, without
    /// iteration or cache access.
    ///
    /// # Errors
    /// Returns [`crate::FilterError::Lookup`] when the override store fails.
    /// The failure aborts the remaining handles in the pass and is not
    /// cached; the engine never substitutes "no override" for an error.
    pub fn filter(
        &self,
        mut handles: HandleSet,
        store: StoreId,
        theme: ThemeId,
    ) -> FilterResult<HandleSet> {
        if !self.policy.enabled {
            debug!(%store, %theme, "handle filter disabled; passing handles through");
            return Ok(handles);
        }

        let mut removals: Vec<Handle> = Vec::new();

        for handle in &handles {
            let Some(category) = HandleCategory::classify(handle) else {
                continue;
            };

            if !self.policy.removes(category) {
                trace!(%handle, %category, "category not filtered by policy; keeping handle");
                continue;
            }

            let has_override = self.cache.exists(store, theme, handle, || {
                self.overrides.has_override(store, theme, handle)
            })?;

            if has_override {
                trace!(%handle, %category, "override exists; keeping handle");
            } else {
                debug!(%handle, %category, %store, %theme, "removing handle without override");
                removals.push(handle.clone());
            }
        }

        for handle in &removals {
            handles.remove(handle);
        }

        Ok(handles)
    }

    /// Resolves the active scope once, then filters.
    ///
    /// # Errors
    /// Returns [`crate::FilterError::Context`] when store or theme resolution
    /// fails; in that case no filtering occurs at all. Lookup failures
    /// propagate as in [`Self::filter`].
    pub fn filter_with_context(
        &self,
        handles: HandleSet,
        resolver: &dyn ContextResolver,
    ) -> FilterResult<HandleSet> {
        let store = resolver.resolve_store()?;
        let theme = resolver.resolve_theme()?;
        self.filter(handles, store, theme)
    }
}
