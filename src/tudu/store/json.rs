use super::TodoStore;
use crate::error::{Result, TuduError};
use crate::model::{Todo, TodoPatch};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// On-disk record shape. The original file format carried no `id`; it is
/// optional on read so those files still load.
#[derive(Deserialize)]
struct StoredTodo {
    #[serde(default)]
    id: Option<Uuid>,
    text: String,
    completed: bool,
}

/// Flat-file backend: one JSON array of records, written with indentation
/// and fully rewritten on every mutation.
///
/// The file is re-read on every call, so each command invocation operates on
/// current persisted state with no in-process caching.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// A store persisting to the given file. The file (and its parent
    /// directory) is created on the first mutation.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TuduError::Io)?;
        let raw: Vec<StoredTodo> =
            serde_json::from_str(&content).map_err(TuduError::Serialization)?;

        let needs_migration = raw.iter().any(|r| r.id.is_none());
        let todos: Vec<Todo> = raw
            .into_iter()
            .map(|r| Todo {
                id: r.id.unwrap_or_else(Uuid::new_v4),
                text: r.text,
                completed: r.completed,
            })
            .collect();

        // Id-less legacy records get an id assigned and written back on
        // first read, so every enumeration resolves against stable ids.
        if needs_migration {
            self.persist(&todos)?;
        }
        Ok(todos)
    }

    fn persist(&self, todos: &[Todo]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TuduError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(todos).map_err(TuduError::Serialization)?;

        // Atomic write: a crash mid-write must not clobber committed records
        let tmp_path = self.path.with_file_name(format!(".todos-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(TuduError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(TuduError::Io)?;

        Ok(())
    }
}

impl TodoStore for JsonStore {
    fn insert(&mut self, todo: &Todo) -> Result<()> {
        let mut todos = self.load()?;
        todos.push(todo.clone());
        self.persist(&todos)
    }

    fn all(&self) -> Result<Vec<Todo>> {
        self.load()
    }

    fn update(&mut self, id: &Uuid, patch: &TodoPatch) -> Result<usize> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut todos = self.load()?;
        let Some(todo) = todos.iter_mut().find(|t| &t.id == id) else {
            return Ok(0);
        };
        if let Some(text) = &patch.text {
            todo.text = text.clone();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        self.persist(&todos)?;
        Ok(1)
    }

    fn remove(&mut self, id: &Uuid) -> Result<usize> {
        let mut todos = self.load()?;
        let before = todos.len();
        todos.retain(|t| &t.id != id);
        if todos.len() == before {
            return Ok(0);
        }
        self.persist(&todos)?;
        Ok(before - todos.len())
    }
}
