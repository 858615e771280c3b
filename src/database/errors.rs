use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend still unreachable after the single reconnect retry.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Row decode error: {0}")]
    DecodeError(String),

    #[error("No database engine configured")]
    NotConfigured,
}
