use super::TodoStore;
use crate::error::{Result, TuduError};
use crate::model::{Todo, TodoPatch};
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Keeps the collection in a plain `Vec` in insertion order. The write
/// failure switch lets tests exercise backend-error paths and verify that a
/// failed mutation leaves the collection unchanged.
#[derive(Default)]
pub struct MemoryStore {
    todos: Vec<Todo>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every mutating call fail with a store error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(TuduError::Store("simulated write error".to_string()));
        }
        Ok(())
    }
}

impl TodoStore for MemoryStore {
    fn insert(&mut self, todo: &Todo) -> Result<()> {
        self.check_writable()?;
        self.todos.push(todo.clone());
        Ok(())
    }

    fn all(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn update(&mut self, id: &Uuid, patch: &TodoPatch) -> Result<usize> {
        self.check_writable()?;
        if patch.is_empty() {
            return Ok(0);
        }
        let Some(todo) = self.todos.iter_mut().find(|t| &t.id == id) else {
            return Ok(0);
        };
        if let Some(text) = &patch.text {
            todo.text = text.clone();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(1)
    }

    fn remove(&mut self, id: &Uuid) -> Result<usize> {
        self.check_writable()?;
        let before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        Ok(before - self.todos.len())
    }
}
