//! # Command Layer
//!
//! The core business logic of tudu. Each command lives in its own submodule
//! as a pure `run` function, generic over [`crate::store::TodoStore`].
//!
//! Commands validate, resolve positions against a fresh enumeration, mutate
//! through the store, and return a structured [`CmdResult`] — never strings
//! for the terminal. They do no I/O of their own: no stdout, no exit codes,
//! no argument parsing. The CLI layer decides how to render the result.
//!
//! Validation always completes before any mutation; a command that returns
//! an error has not touched the collection.
//!
//! ## Testing
//!
//! This is where the lion's share of testing lives. Command tests run
//! against [`crate::store::memory::MemoryStore`] and cover logic branches,
//! edge cases, and error conditions.

use crate::model::Todo;
use serde::Serialize;

pub mod add;
pub mod complete;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record paired with its 1-based display position.
///
/// The position is derived from the canonical enumeration at the time the
/// command ran; it is a view, not an identity.
#[derive(Debug, Clone)]
pub struct ListedTodo {
    pub position: usize,
    pub todo: Todo,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records modified by the operation, with their pre-operation position.
    pub affected_todos: Vec<ListedTodo>,
    /// Records to display (the `list` command), in canonical order.
    pub listed_todos: Vec<ListedTodo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_todos(mut self, todos: Vec<ListedTodo>) -> Self {
        self.listed_todos = todos;
        self
    }
}
