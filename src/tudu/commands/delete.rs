use crate::commands::{CmdMessage, CmdResult, ListedTodo};
use crate::error::Result;
use crate::store::TodoStore;

use super::helpers::resolve_position;

pub fn run<S: TodoStore>(store: &mut S, token: &str) -> Result<CmdResult> {
    let todos = store.all()?;
    let (position, todo) = resolve_position(&todos, token)?;
    let removed = todo.clone();

    store.remove(&removed.id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted todo {}: \"{}\"",
        position, removed.text
    )));
    result.affected_todos.push(ListedTodo {
        position,
        todo: removed,
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
    fn removes_record_and_renumbers_successors() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "first").unwrap();
        add::run(&mut store, "second").unwrap();
        add::run(&mut store, "third").unwrap();

        let result = run(&mut store, "2").unwrap();
        assert_eq!(result.affected_todos[0].position, 2);
        assert_eq!(result.affected_todos[0].todo.text, "second");

        // The item formerly at position 3 is now at position 2
        let todos = store.all().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].text, "third");
    }

    #[test]
    fn rejects_invalid_index_without_mutation() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "only").unwrap();

        for token in ["0", "2", "-1", "abc"] {
            let err = run(&mut store, token).unwrap_err();
            assert!(matches!(err, TuduError::InvalidIndex(_)));
        }
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[test]
    fn delete_on_empty_collection_is_invalid() {
        let mut store = MemoryStore::new();
        let err = run(&mut store, "1").unwrap_err();
        assert!(matches!(err, TuduError::InvalidIndex(_)));
    }
}
