use async_trait::async_trait;
use crate::database::errors::StorageError;
use crate::database::structs::sql_value::{SqlParam, SqlRow};

/// Minimal storage interface the peer store is built on.
///
/// Implementations own their connection handling, including the
/// reconnect-once retry on transient failures.
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    /// Runs a statement, returning the number of affected rows.
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, StorageError>;

    /// Runs a query, returning all rows.
    async fn fetch_rows(&self, statement: &str, params: &[SqlParam]) -> Result<Vec<SqlRow>, StorageError>;

    /// Engine-specific random ordering function for sampling.
    fn random_function(&self) -> &'static str;
}
