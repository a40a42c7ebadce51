use crate::commands::{CmdMessage, CmdResult, ListedTodo};
use crate::error::{Result, TuduError};
use crate::model::Todo;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TuduError::Validation(
            "Please provide a todo item.".to_string(),
        ));
    }

    let todo = Todo::new(text.to_string());
    store.insert(&todo)?;

    let position = store.all()?.len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added todo: \"{}\"", todo.text)));
    result.affected_todos.push(ListedTodo { position, todo });
    Ok(result)
}
