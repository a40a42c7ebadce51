use clap::{Parser, Subcommand, ValueEnum};
use tudu::config::BackendKind;

#[derive(Parser, Debug)]
#[command(name = "tudu")]
#[command(about = "A tiny persistent todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage backend for this invocation (overrides the configured default)
    #[arg(short, long, global = true, value_enum)]
    pub backend: Option<BackendArg>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BackendArg {
    /// Flat JSON file (todos.json)
    Json,
    /// Embedded SQLite store (todos.db)
    Sqlite,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Json => BackendKind::Json,
            BackendArg::Sqlite => BackendKind::Sqlite,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List all todos
    #[command(alias = "ls")]
    List,

    /// Replace the text of a todo
    Update {
        /// 1-based index of the todo (as shown by list)
        index: String,

        /// Replacement text (words are joined with spaces)
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// 1-based index of the todo
        index: String,
    },

    /// Toggle completion of a todo
    #[command(alias = "done")]
    Complete {
        /// 1-based index of the todo
        index: String,
    },
}
