//! Store error types.

use std::path::PathBuf;

/// Errors that can occur when reading the observations database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("cannot open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A query failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A declared table does not exist
    #[error("table '{table}' not found in database")]
    MissingTable { table: &'static str },

    /// A declared table exists but lacks some of its columns
    #[error("table '{table}' is missing columns: {}", .columns.join(", "))]
    MissingColumns {
        table: &'static str,
        columns: Vec<&'static str>,
    },

    /// The blocking task running a session panicked or was cancelled
    #[error("store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type StoreResult<T> = Result<T, StoreError>;
