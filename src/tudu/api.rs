//! # API Facade
//!
//! A thin facade over the command layer: the single entry point for all tudu
//! operations regardless of the UI driving them. The facade dispatches to
//! the command functions and returns structured [`CmdResult`] values; it
//! does no I/O, no formatting, and no business logic of its own.
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend:
//! `TodoApi<JsonStore>` or `TodoApi<SqliteStore>` in production,
//! `TodoApi<MemoryStore>` in tests.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::TodoStore;

pub struct TodoApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a new todo. `text` is the raw argument tokens joined with
    /// spaces; trimming and validation happen in the command.
    pub fn add(&mut self, text: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Replace the text of the todo at the 1-based position in `index`.
    pub fn update(&mut self, index: &str, text: &str) -> Result<CmdResult> {
        commands::update::run(&mut self.store, index, text)
    }

    pub fn delete(&mut self, index: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn complete(&mut self, index: &str) -> Result<CmdResult> {
        commands::complete::run(&mut self.store, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn api() -> TodoApi<MemoryStore> {
        TodoApi::new(MemoryStore::new())
    }

    #[test]
    fn add_then_list_shows_new_todo_last() {
        let mut api = api();
        api.add("first").unwrap();
        api.add("second").unwrap();

        let result = api.list().unwrap();
        let last = result.listed_todos.last().unwrap();
        assert_eq!(last.position, 2);
        assert_eq!(last.todo.text, "second");
        assert!(!last.todo.completed);
    }

    #[test]
    fn full_lifecycle_through_the_facade() {
        let mut api = api();
        api.add("buy milk").unwrap();
        api.complete("1").unwrap();
        api.update("1", "buy oat milk").unwrap();

        let listed = api.list().unwrap().listed_todos;
        assert_eq!(listed[0].todo.text, "buy oat milk");
        assert!(listed[0].todo.completed);

        api.delete("1").unwrap();
        assert!(api.list().unwrap().listed_todos.is_empty());
    }
}
