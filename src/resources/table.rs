//! Identifier-keyed resource tables.
//!
//! Each resource category (materials, textures, transformations, primitives,
//! animations) lives in its own flat table. Tables are populated once while
//! the document loads, before the component graph resolution pass, and are
//! never mutated afterwards; during rendering they are shared read-only
//! state, safe for lock-free concurrent reads should traversal ever be
//! parallelized.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{ResourceKind, Result, SceneError};

/// A flat mapping from identifier to a resolved, shared resource.
///
/// `T: ?Sized` so a table can hold trait objects (`ResourceTable<dyn
/// Primitive>`) as well as plain structs.
pub struct ResourceTable<T: ?Sized> {
    kind: ResourceKind,
    entries: FxHashMap<String, Arc<T>>,
}

impl<T: ?Sized> ResourceTable<T> {
    #[must_use]
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            entries: FxHashMap::default(),
        }
    }

    /// Registers `value` under `id`.
    ///
    /// Fails with [`SceneError::DuplicateId`] if `id` is already present;
    /// the table keeps the first registration.
    pub fn register(&mut self, id: &str, value: Arc<T>) -> Result<()> {
        if self.entries.contains_key(id) {
            return Err(SceneError::DuplicateId {
                kind: self.kind,
                id: id.to_owned(),
            });
        }
        self.entries.insert(id.to_owned(), value);
        Ok(())
    }

    /// Looks up `id`, failing with [`SceneError::UnknownId`] if absent.
    pub fn resolve(&self, id: &str) -> Result<Arc<T>> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| SceneError::UnknownId {
                kind: self.kind,
                id: id.to_owned(),
            })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
