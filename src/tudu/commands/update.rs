use crate::commands::{CmdMessage, CmdResult, ListedTodo};
use crate::error::{Result, TuduError};
use crate::model::TodoPatch;
use crate::store::TodoStore;

use super::helpers::resolve_position;

/// Replaces the text of the todo at the given position. Text presence and
/// index validity are both checked before any mutation; the completion flag
/// is left untouched.
pub fn run<S: TodoStore>(store: &mut S, token: &str, new_text: &str) -> Result<CmdResult> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return Err(TuduError::Validation(
            "Please provide new text for the todo.".to_string(),
        ));
    }

    let todos = store.all()?;
    let (position, todo) = resolve_position(&todos, token)?;
    let old_text = todo.text.clone();
    let id = todo.id;

    store.update(&id, &TodoPatch::text(new_text))?;

    let mut updated = todo.clone();
    updated.text = new_text.to_string();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated todo {}: \"{}\" -> \"{}\"",
        position, old_text, updated.text
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
    use crate::commands::{add, complete};
    use crate::store::memory::MemoryStore;

    #[test]
    fn replaces_text_and_reports_old_and_new() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "buy milk").unwrap();

        let result = run(&mut store, "1", "buy oat milk").unwrap();
        assert_eq!(store.all().unwrap()[0].text, "buy oat milk");
        assert!(result.messages[0].content.contains("\"buy milk\""));
        assert!(result.messages[0].content.contains("\"buy oat milk\""));
    }

    #[test]
    fn preserves_completion_flag() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "buy milk").unwrap();
        complete::run(&mut store, "1").unwrap();

        run(&mut store, "1", "buy oat milk").unwrap();
        let todo = &store.all().unwrap()[0];
        assert_eq!(todo.text, "buy oat milk");
        assert!(todo.completed);
    }

    #[test]
    fn rejects_empty_replacement_text() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "keep me").unwrap();

        let err = run(&mut store, "1", "   ").unwrap_err();
        assert!(matches!(err, TuduError::Validation(_)));
        assert_eq!(store.all().unwrap()[0].text, "keep me");
    }

    #[test]
    fn rejects_invalid_index_without_mutation() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "keep me").unwrap();

        for token in ["0", "2", "abc"] {
            let err = run(&mut store, token, "new text").unwrap_err();
            assert!(matches!(err, TuduError::InvalidIndex(_)));
        }
        assert_eq!(store.all().unwrap()[0].text, "keep me");
    }

    #[test]
    fn empty_text_is_reported_before_the_index() {
        // Both checks precede mutation; text presence comes first, so a call
        // that is wrong on both counts reports the missing text.
        let mut store = MemoryStore::new();
        let err = run(&mut store, "99", "").unwrap_err();
        assert!(matches!(err, TuduError::Validation(_)));
    }
}
