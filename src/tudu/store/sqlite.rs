use super::TodoStore;
use crate::error::{Result, TuduError};
use crate::model::{Todo, TodoPatch};
use rusqlite::{params, Connection};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Embedded-store backend over SQLite.
///
/// One `todos` table; enumeration order is `rowid`, which is insertion
/// order. Mutations are single statements, so partial writes cannot corrupt
/// committed records.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path and ensure the
    /// schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(TuduError::Io)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS todos (
                id        TEXT PRIMARY KEY,
                text      TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            );",
        )?;

        Ok(Self { conn })
    }
}

impl TodoStore for SqliteStore {
    fn insert(&mut self, todo: &Todo) -> Result<()> {
        self.conn.execute(
            "INSERT INTO todos (id, text, completed) VALUES (?1, ?2, ?3)",
            params![todo.id.to_string(), todo.text, todo.completed],
        )?;
        Ok(())
    }

    fn all(&self) -> Result<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, completed FROM todos ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, bool>(2)?,
            ))
        })?;

        let mut todos = Vec::new();
        for row in rows {
            let (id, text, completed) = row?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| TuduError::Store(format!("invalid record id in database: {}", e)))?;
            todos.push(Todo {
                id,
                text,
                completed,
            });
        }
        Ok(todos)
    }

    fn update(&mut self, id: &Uuid, patch: &TodoPatch) -> Result<usize> {
        let id = id.to_string();
        let affected = match (&patch.text, patch.completed) {
            (Some(text), Some(completed)) => self.conn.execute(
                "UPDATE todos SET text = ?1, completed = ?2 WHERE id = ?3",
                params![text, completed, id],
            )?,
            (Some(text), None) => self.conn.execute(
                "UPDATE todos SET text = ?1 WHERE id = ?2",
                params![text, id],
            )?,
            (None, Some(completed)) => self.conn.execute(
                "UPDATE todos SET completed = ?1 WHERE id = ?2",
                params![completed, id],
            )?,
            (None, None) => 0,
        };
        Ok(affected)
    }

    fn remove(&mut self, id: &Uuid) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM todos WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(removed)
    }
}
