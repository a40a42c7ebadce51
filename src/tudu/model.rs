//! Core data types: [`Todo`] and [`TodoPatch`].
//!
//! A `Todo` is deliberately small: a stable id, the text, and the completion
//! flag. The id is assigned at creation (`Todo::new`) and never changes;
//! backends persist it verbatim, so it is never reused even after the record
//! is deleted.
//!
//! ## Legacy files
//!
//! Earlier versions of the file backend persisted only
//! `{"text": ..., "completed": ...}`. A record with no `id` field
//! deserializes with a freshly assigned id and picks up a stable one on the
//! next rewrite, so old files load cleanly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
        }
    }
}

/// Partial update applied to a stored record.
///
/// Fields left as `None` are preserved. This is the `patch` of the storage
/// capability set; commands build one and hand it to
/// [`crate::store::TodoStore::update`].
#[derive(Debug, Default, Clone)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}
