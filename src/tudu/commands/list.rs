use crate::commands::{CmdResult, ListedTodo};
use crate::error::Result;
use crate::store::TodoStore;

/// Read-only: enumerates the collection in canonical order with 1-based
/// positions. The CLI renders the empty case as a distinct message.
pub fn run<S: TodoStore>(store: &S) -> Result<CmdResult> {
    let listed: Vec<_> = store
        .all()?
        .into_iter()
        .enumerate()
        .map(|(i, todo)| ListedTodo {
            position: i + 1,
            todo,
        })
        .collect();

    Ok(CmdResult::default().with_listed_todos(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::MemoryStore;

    #[test]
    fn positions_are_contiguous_from_one() {
        let mut store = MemoryStore::new();
        add::run(&mut store, "first").unwrap();
        add::run(&mut store, "second").unwrap();
        add::run(&mut store, "third").unwrap();

        let result = run(&store).unwrap();
        let positions: Vec<_> = result.listed_todos.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(result.listed_todos[0].todo.text, "first");
        assert_eq!(result.listed_todos[2].todo.text, "third");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let store = MemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_todos.is_empty());
        assert!(result.messages.is_empty());
    }
}
