//! # Storage Layer
//!
//! This module defines the storage abstraction for tudu. The [`TodoStore`]
//! trait is the minimum capability set the command layer needs — append,
//! ordered enumeration, patch by id, remove by id — so the command logic is
//! written once and runs against any backend.
//!
//! ## Ordering
//!
//! `all` must return records in insertion order; it is the canonical order
//! used to map 1-based display positions to records. [`json::JsonStore`]
//! keeps the array in insertion order, [`sqlite::SqliteStore`] enumerates by
//! `rowid`.
//!
//! ## Durability
//!
//! Every mutating call persists before returning. The file backend rewrites
//! the whole file atomically (temp file + rename), the embedded store
//! mutates in place. A crash between calls loses at most the in-flight
//! mutation, never committed records.
//!
//! ## Implementations
//!
//! - [`json::JsonStore`]: flat JSON file, fully rewritten per mutation.
//! - [`sqlite::SqliteStore`]: embedded SQLite database.
//! - [`memory::MemoryStore`]: for testing logic without touching disk.

use crate::error::Result;
use crate::model::{Todo, TodoPatch};
use uuid::Uuid;

pub mod json;
pub mod memory;
pub mod sqlite;

/// Abstract interface for todo storage.
pub trait TodoStore {
    /// Append a record. The caller assigns the id ([`Todo::new`]); backends
    /// persist it verbatim.
    fn insert(&mut self, todo: &Todo) -> Result<()>;

    /// All records, in canonical (insertion) order.
    fn all(&self) -> Result<Vec<Todo>>;

    /// Apply a patch to the record with the given id.
    /// Returns the number of records affected (0 or 1).
    fn update(&mut self, id: &Uuid, patch: &TodoPatch) -> Result<usize>;

    /// Remove the record with the given id.
    /// Returns the number of records removed (0 or 1).
    fn remove(&mut self, id: &Uuid) -> Result<usize>;
}
