use clap::{CommandFactory, Parser};
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tudu::api::TodoApi;
use tudu::commands::{CmdMessage, ListedTodo, MessageLevel};
use tudu::config::{BackendKind, TuduConfig};
use tudu::error::{Result, TuduError};
use tudu::store::json::JsonStore;
use tudu::store::sqlite::SqliteStore;
use tudu::store::TodoStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir()?;

    let config = TuduConfig::load(&data_dir)?;
    let backend = cli.backend.map(Into::into).unwrap_or(config.backend);

    match backend {
        BackendKind::Json => {
            let store = JsonStore::new(data_dir.join("todos.json"));
            dispatch(&cli, TodoApi::new(store))
        }
        BackendKind::Sqlite => {
            let store = SqliteStore::open(data_dir.join("todos.db"))?;
            dispatch(&cli, TodoApi::new(store))
        }
    }
}

/// TUDU_DATA_DIR wins (tests and scripted use), otherwise the platform data
/// directory.
fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("TUDU_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = ProjectDirs::from("com", "tudu", "tudu")
        .ok_or_else(|| TuduError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn dispatch<S: TodoStore>(cli: &Cli, mut api: TodoApi<S>) -> Result<()> {
    match &cli.command {
        Some(Commands::Add { text }) => {
            let result = api.add(&text.join(" "))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::List) => {
            let result = api.list()?;
            print_todos(&result.listed_todos);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Update { index, text }) => {
            let result = api.update(index, &text.join(" "))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { index }) => {
            let result = api.delete(index)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Complete { index }) => {
            let result = api.complete(index)?;
            print_messages(&result.messages);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_todos(todos: &[ListedTodo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    for entry in todos {
        let status = if entry.todo.completed { "[x]" } else { "[ ]" };
        let line = format!("{}. {} {}", entry.position, status, entry.todo.text);
        if entry.todo.completed {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}
