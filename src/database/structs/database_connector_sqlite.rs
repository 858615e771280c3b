use std::sync::Arc;
use parking_lot::RwLock;
use sqlx::{Pool, Sqlite};
use sqlx::sqlite::SqliteConnectOptions;

/// SQLite connector with a replaceable lazy pool.
///
/// The pool sits behind a lock so the reconnect path can swap in a fresh
/// one; statements clone the pool handle out and never hold the lock across
/// an await.
#[derive(Debug, Clone)]
pub struct DatabaseConnectorSQLite {
    pub(crate) pool: Arc<RwLock<Pool<Sqlite>>>,
    pub(crate) options: SqliteConnectOptions,
}
