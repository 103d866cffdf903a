//! Store and theme scope resolution.
//!
//! Override existence is scoped to the active storefront and visual theme.
//! Both identifiers are resolved once per filtering pass, before any handle
//! is inspected, and held constant throughout that pass.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of the active storefront scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(u32);

impl StoreId {
    /// Creates a store id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the active visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(u32);

impl ThemeId {
    /// Creates a theme id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised while resolving the active (store, theme) context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The active store could not be determined.
    #[error("store resolution failed: {message}")]
    StoreUnavailable {
        /// Resolver-provided failure detail.
        message: String,
    },

    /// The active theme could not be determined.
    #[error("theme resolution failed: {message}")]
    ThemeUnavailable {
        /// Resolver-provided failure detail.
        message: String,
    },
}

/// Resolves the active (store, theme) scope for one filtering pass.
///
/// Implemented by the host application; this crate only consumes the
/// contract. Both operations are invoked once per pass, before filtering
/// begins — a failure here aborts the pass before any handle is touched.
pub trait ContextResolver: Send + Sync {
    /// Resolves the active storefront scope.
    ///
    /// # Errors
    /// Returns [`ContextError::StoreUnavailable`] when the store cannot be
    /// determined.
    fn resolve_store(&self) -> Result<StoreId, ContextError>;

    /// Resolves the active visual theme.
    ///
    /// # Errors
    /// Returns [`ContextError::ThemeUnavailable`] when the theme cannot be
    /// determined.
    fn resolve_theme(&self) -> Result<ThemeId, ContextError>;
}

/// A resolver that always yields a fixed (store, theme) pair.
///
/// Reference implementation for tests and embedded use, where the scope is
/// known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedContext {
    store: StoreId,
    theme: ThemeId,
}

impl FixedContext {
    /// Creates a fixed resolver for the given scope.
    #[must_use]
    pub const fn new(store: StoreId, theme: ThemeId) -> Self {
        Self { store, theme }
    }
}

impl ContextResolver for FixedContext {
    fn resolve_store(&self) -> Result<StoreId, ContextError> {
        Ok(self.store)
    }

    fn resolve_theme(&self) -> Result<ThemeId, ContextError> {
        Ok(self.theme)
    }
}
