//! # handlefilter - Layout Handle Filter
//!
//! `handlefilter` prunes layout handles that exist only to name a specific
//! entity (a category id, product id, or product sku) from a request's handle
//! set, *unless* a persisted layout override exists for that exact handle
//! under the active (store, theme) scope. Pruning these handles collapses
//! cache-key cardinality in a downstream page/layout cache: without an
//! override, the per-entity handle carries no behavioral difference and only
//! fragments the cache.
//!
//! ## Core Concepts
//!
//! - **Handle**: an opaque, non-empty identifier naming one layout variant
//! - **HandleCategory**: the removable-pattern classification of a handle
//! - **FilterPolicy**: which categories may be pruned, and whether the
//!   filter runs at all
//! - **Override**: a persisted customization record proving a handle must
//!   not be pruned
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use handlefilter::{
//!     FilterPolicy, Handle, HandleFilterEngine, HandleSet,
//!     InMemoryOverrideStore, StoreId, ThemeId,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let overrides = Arc::new(InMemoryOverrideStore::new());
//! let engine = HandleFilterEngine::new(FilterPolicy::remove_all(), overrides);
//!
//! let handles = HandleSet::from_names(["default", "catalog_product_view_id_42"])?;
//! let filtered = engine.filter(handles, StoreId::new(1), ThemeId::new(3))?;
//!
//! // No override recorded, so the per-product handle is pruned.
//! assert_eq!(filtered.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod category;
pub mod context;
pub mod engine;
pub mod error;
pub mod handle;
pub mod policy;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use cache::ExistenceCache;
pub use category::{
    HandleCategory, CATEGORY_ID_MARKER, PRODUCT_ID_MARKER, PRODUCT_SKU_MARKER,
};
pub use context::{ContextError, ContextResolver, FixedContext, StoreId, ThemeId};
pub use engine::HandleFilterEngine;
pub use error::{FilterError, FilterResult};
pub use handle::{Handle, HandleSet, ValidationError};
pub use policy::FilterPolicy;
pub use storage::{InMemoryOverrideStore, OverrideExistenceStore, StorageError};
