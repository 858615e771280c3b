use std::sync::Arc;
use parking_lot::RwLock;
use sqlx::{MySql, Pool};
use sqlx::mysql::MySqlConnectOptions;

/// MySQL connector with a replaceable lazy pool.
#[derive(Debug, Clone)]
pub struct DatabaseConnectorMySQL {
    pub(crate) pool: Arc<RwLock<Pool<MySql>>>,
    pub(crate) options: MySqlConnectOptions,
}
