use crate::commands::{CmdMessage, CmdResult, ListedTodo};
use crate::error::Result;
use crate::model::TodoPatch;
use crate::store::TodoStore;

use super::helpers::resolve_position;

/// Flips the completion flag of the todo at the given position and reports
/// the new state.
pub fn run<S: TodoStore>(store: &mut S, token: &str) -> Result<CmdResult> {
    let todos = store.all()?;
    let (position, todo) = resolve_position(&todos, token)?;
    let now_completed = !todo.completed;
    let id = todo.id;

    store.update(&id, &TodoPatch::completed(now_completed))?;

    let mut updated = todo.clone();
    updated.completed = now_completed;

    let state = if now_completed { "completed" } else { "pending" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked todo {} as {}.",
        position, state
    )));
    result.affected_todos.push(ListedTodo {
        position,
        todo: updated,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::TuduError;
    use crate::store::memory::MemoryStore;

    #[test]
    fn marks_pending_todo_as_completed() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "buy milk").unwrap();

        let result = run(&mut store, "1").unwrap();
        assert!(store.all().unwrap()[0].completed);
        assert!(result.messages[0].content.contains("as completed"));
    }

    #[test]
    fn toggling_twice_restores_original_state() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "buy milk").unwrap();

        run(&mut store, "1").unwrap();
        let result = run(&mut store, "1").unwrap();

        assert!(!store.all().unwrap()[0].completed);
        assert!(result.messages[0].content.contains("as pending"));
    }

    #[test]
    fn rejects_invalid_index_without_mutation() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "only").unwrap();

        for token in ["0", "2", "abc"] {
            let err = run(&mut store, token).unwrap_err();
            assert!(matches!(err, TuduError::InvalidIndex(_)));
        }
        assert!(!store.all().unwrap()[0].completed);
    }
}
