//! Storage layer.
//!
//! The [`ObjectStore`] trait is the interpreter's only view of persistence.
//! It owns the canonical collection of live instances, keyed by
//! `ClassName.id`; commands hold at most transient clones.
//!
//! Implementations:
//! - [`fs::FileStore`]: production store, one JSON file on disk
//! - [`memory::InMemoryStore`]: no persistence, for tests

use crate::error::Result;
use crate::model::{ClassName, StoredObject};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Abstract interface over the object store.
///
/// Mutations happen in memory; `save` and `reload` synchronize with the
/// backing representation. Key order is stable so repeated reads return
/// equal listings.
pub trait ObjectStore {
    /// All stored objects, optionally filtered to one class.
    fn all(&self, class: Option<ClassName>) -> BTreeMap<String, StoredObject>;

    /// Look up one object by its `ClassName.id` key.
    fn get(&self, key: &str) -> Option<StoredObject>;

    /// Insert (or replace) an object under its own key.
    fn insert(&mut self, object: StoredObject);

    /// Remove an object by key, returning it if it was present.
    fn remove(&mut self, key: &str) -> Option<StoredObject>;

    /// Persist the in-memory collection.
    fn save(&mut self) -> Result<()>;

    /// Re-read the backing representation, replacing the in-memory view.
    fn reload(&mut self) -> Result<()>;
}
