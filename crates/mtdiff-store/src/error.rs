use thiserror::Error;

/// Errors from block store lookups.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying sqlite database failed; anything other than "no such
    /// row" is fatal to the run.
    #[error("map database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
