//! Filter policy configuration.

use serde::{Deserialize, Serialize};

use crate::category::HandleCategory;

/// Immutable configuration for one filter engine instance.
///
/// The policy is loaded once at engine construction and never changes
/// afterwards. When `enabled` is false no filtering occurs at all,
/// regardless of the per-category flags.
///
/// Deserialization rejects unknown fields, so a malformed policy fails at
/// load time rather than silently filtering the wrong categories.
///
/// # Examples
///
/// ```
/// use handlefilter::FilterPolicy;
///
/// let policy: FilterPolicy = serde_json::from_str(
///     r#"{"enabled": true, "remove_category_ids": true,
///         "remove_product_ids": true, "remove_product_skus": false}"#,
/// ).unwrap();
/// assert!(policy.enabled);
/// assert!(!policy.remove_product_skus);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct FilterPolicy {
    /// Master switch for the whole filter.
    pub enabled: bool,
    /// Prune per-category-id handles without an override.
    pub remove_category_ids: bool,
    /// Prune per-product-id handles without an override.
    pub remove_product_ids: bool,
    /// Prune per-product-sku handles without an override.
    pub remove_product_skus: bool,
}

impl FilterPolicy {
    /// A policy with the filter enabled for every category.
    #[must_use]
    pub const fn remove_all() -> Self {
        Self {
            enabled: true,
            remove_category_ids: true,
            remove_product_ids: true,
            remove_product_skus: true,
        }
    }

    /// A policy with the filter switched off entirely.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            remove_category_ids: false,
            remove_product_ids: false,
            remove_product_skus: false,
        }
    }

    /// Returns true if handles of the given category are subject to removal.
    ///
    /// The master switch is not consulted here; the engine short-circuits on
    /// a disabled policy before classification happens.
    #[must_use]
    pub const fn removes(&self, category: HandleCategory) -> bool {
        match category {
            HandleCategory::CategoryById => self.remove_category_ids,
            HandleCategory::ProductById => self.remove_product_ids,
            HandleCategory::ProductBySku => self.remove_product_skus,
        }
    }
}
