//! Handle types and the ordered handle set.
//!
//! A layout handle is an opaque identifier naming one layout variant of a
//! rendering request. Handles carry no parsed structure here; the only
//! inspection this crate performs is marker containment (see
//! [`crate::category`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised when constructing handle values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Handles must be non-empty.
    #[error("handle cannot be empty")]
    EmptyHandle,
}

/// An opaque, non-empty layout handle.
///
/// Equality is exact string equality. Construction rejects empty strings;
/// every other string is a valid handle.
///
/// # Examples
///
/// ```
/// use handlefilter::Handle;
///
/// let h = Handle::new("checkout_index_index").unwrap();
/// assert_eq!(h.as_str(), "checkout_index_index");
/// assert!(Handle::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Creates a handle from a non-empty string.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyHandle`] if the input is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyHandle);
        }
        Ok(Self(name))
    }

    /// Returns the handle text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the handle, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Handle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Handle {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Handle {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// An ordered collection of unique handles for one rendering request.
///
/// Insertion order is preserved; duplicate inserts are ignored (the first
/// occurrence wins). The filter engine only ever removes handles from a set,
/// it never adds any.
///
/// # Examples
///
/// ```
/// use handlefilter::HandleSet;
///
/// let set = HandleSet::from_names(["default", "cms_page_view", "default"]).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Handle>", into = "Vec<Handle>")]
pub struct HandleSet {
    handles: Vec<Handle>,
}

impl HandleSet {
    /// Creates an empty handle set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Builds a handle set from raw handle names, preserving order and
    /// dropping duplicates.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyHandle`] if any name is empty.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.push(Handle::new(name)?);
        }
        Ok(set)
    }

    /// Appends a handle. Returns false (and leaves the set unchanged) if the
    /// handle is already present.
    pub fn push(&mut self, handle: Handle) -> bool {
        if self.contains(&handle) {
            return false;
        }
        self.handles.push(handle);
        true
    }

    /// Returns true if the set contains the given handle.
    #[must_use]
    pub fn contains(&self, handle: &Handle) -> bool {
        self.handles.contains(handle)
    }

    /// Returns true if the set contains a handle with the given name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.handles.iter().any(|h| h.as_str() == name)
    }

    /// Removes a handle, preserving the relative order of the rest.
    /// Returns true if the handle was present.
    pub fn remove(&mut self, handle: &Handle) -> bool {
        let before = self.handles.len();
        self.handles.retain(|h| h != handle);
        self.handles.len() != before
    }

    /// Number of handles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if the set holds no handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterates the handles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Handle> {
        self.handles.iter()
    }

    /// Returns the handles as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Handle] {
        &self.handles
    }

    /// Consumes the set, returning the handles in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Handle> {
        self.handles
    }
}

impl From<Vec<Handle>> for HandleSet {
    fn from(handles: Vec<Handle>) -> Self {
        let mut set = Self::new();
        for h in handles {
            set.push(h);
        }
        set
    }
}

impl From<HandleSet> for Vec<Handle> {
    fn from(set: HandleSet) -> Self {
        set.handles
    }
}

impl FromIterator<Handle> for HandleSet {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> Self {
        let mut set = Self::new();
        for h in iter {
            set.push(h);
        }
        set
    }
}

impl<'a> IntoIterator for &'a HandleSet {
    type Item = &'a Handle;
    type IntoIter = std::slice::Iter<'a, Handle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}

impl IntoIterator for HandleSet {
    type Item = Handle;
    type IntoIter = std::vec::IntoIter<Handle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.into_iter()
    }
}
