//! Removable-pattern classification of handles.
//!
//! Handles generated per entity ("this exact product", "this exact category")
//! follow fixed naming markers. Classification tests a handle for containing
//! one of those markers anywhere in its text, in a fixed priority order.
//! Containment is deliberately substring search rather than a prefix check:
//! that reproduces the observed matching behavior of the layout pipeline this
//! filter was built for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::handle::Handle;

/// Marker identifying per-category-id handles.
pub const CATEGORY_ID_MARKER: &str = "catalog_category_view_id_";

/// Marker identifying per-product-id handles.
pub const PRODUCT_ID_MARKER: &str = "catalog_product_view_id_";

/// Marker identifying per-product-sku handles.
pub const PRODUCT_SKU_MARKER: &str = "catalog_product_view_sku_";

/// The removable-pattern category of a handle.
///
/// Categories are mutually exclusive: a handle containing more than one
/// marker is assigned the highest-priority match (category-id, then
/// product-id, then product-sku). A handle matching no marker has no
/// category ([`HandleCategory::classify`] returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleCategory {
    /// Handle names a specific category by id.
    CategoryById,
    /// Handle names a specific product by id.
    ProductById,
    /// Handle names a specific product by sku.
    ProductBySku,
}

impl HandleCategory {
    /// Classifies a handle against the marker set.
    ///
    /// Deterministic and total: every handle has exactly one classification
    /// (possibly none), stable across repeated calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use handlefilter::{Handle, HandleCategory};
    ///
    /// let h = Handle::new("catalog_product_view_id_7").unwrap();
    /// assert_eq!(HandleCategory::classify(&h), Some(HandleCategory::ProductById));
    ///
    /// let h = Handle::new("default").unwrap();
    /// assert_eq!(HandleCategory::classify(&h), None);
    /// ```
    #[must_use]
    pub fn classify(handle: &Handle) -> Option<Self> {
        let name = handle.as_str();
        if name.contains(CATEGORY_ID_MARKER) {
            Some(Self::CategoryById)
        } else if name.contains(PRODUCT_ID_MARKER) {
            Some(Self::ProductById)
        } else if name.contains(PRODUCT_SKU_MARKER) {
            Some(Self::ProductBySku)
        } else {
            None
        }
    }

    /// Returns the marker string that identifies this category.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::CategoryById => CATEGORY_ID_MARKER,
            Self::ProductById => PRODUCT_ID_MARKER,
            Self::ProductBySku => PRODUCT_SKU_MARKER,
        }
    }
}

impl fmt::Display for HandleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryById => write!(f, "category_by_id"),
            Self::ProductById => write!(f, "product_by_id"),
            Self::ProductBySku => write!(f, "product_by_sku"),
        }
    }
}

impl Handle {
    /// Convenience accessor for [`HandleCategory::classify`].
    #[must_use]
    pub fn category(&self) -> Option<HandleCategory> {
        HandleCategory::classify(self)
    }
}
