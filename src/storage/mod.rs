//! Override existence storage.
//!
//! The filter never reads or writes layout override records itself; it only
//! asks whether one exists for a given (store, theme, handle) triple. The
//! trait in [`traits`] defines that contract, and [`memory`] provides a
//! thread-safe in-memory backend for tests and embedded use.

pub mod memory;
pub mod traits;

pub use memory::InMemoryOverrideStore;
pub use traits::{OverrideExistenceStore, StorageError};
