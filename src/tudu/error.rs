use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuduError {
    /// Rejected input (empty todo text, empty replacement text).
    /// The message is user-facing and printed verbatim.
    #[error("{0}")]
    Validation(String),

    /// A position token that is non-numeric or outside `1..=count`.
    /// Carries the raw token as typed by the user.
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TuduError>;
