use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Message metadata could not be serialized to JSON.
    #[error("metadata serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Filesystem failure while preparing the database location.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection lock was poisoned by a panicking writer.
    #[error("store connection lock poisoned")]
    Poisoned,
}
