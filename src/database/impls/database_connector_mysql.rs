use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::warn;
use parking_lot::RwLock;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions, MySqlRow};
use sqlx::{ConnectOptions, MySql, Pool, Row};
use crate::database::errors::StorageError;
use crate::database::helpers::is_transient;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::sql_value::{SqlParam, SqlRow, SqlValue};
use crate::database::traits::database_backend::DatabaseBackend;

const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    pub fn create(dsl: &str) -> Result<DatabaseConnectorMySQL, StorageError> {
        let options = MySqlConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let pool = MySqlPoolOptions::new().connect_lazy_with(options.clone());
        Ok(DatabaseConnectorMySQL {
            pool: Arc::new(RwLock::new(pool)),
            options,
        })
    }

    fn pool(&self) -> Pool<MySql> {
        self.pool.read().clone()
    }

    fn reconnect(&self) {
        warn!("{} Connection lost, rebuilding pool", LOG_PREFIX);
        let pool = MySqlPoolOptions::new().connect_lazy_with(self.options.clone());
        *self.pool.write() = pool;
    }

    async fn run_execute(
        pool: &Pool<MySql>,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<u64, sqlx::Error> {
        let mut query = sqlx::query(statement);
        for param in params {
            query = match param {
                SqlParam::Bytes(value) => query.bind(value.clone()),
                SqlParam::Int(value) => query.bind(*value),
            };
        }
        Ok(query.execute(pool).await?.rows_affected())
    }

    async fn run_fetch(
        pool: &Pool<MySql>,
        statement: &str,
        params: &[SqlParam],
    ) -> Result<Vec<SqlRow>, sqlx::Error> {
        let mut query = sqlx::query(statement);
        for param in params {
            query = match param {
                SqlParam::Bytes(value) => query.bind(value.clone()),
                SqlParam::Int(value) => query.bind(*value),
            };
        }
        let rows = query.fetch_all(pool).await?;
        Ok(rows.iter().map(Self::decode_row).collect())
    }

    fn decode_row(row: &MySqlRow) -> SqlRow {
        let mut values = Vec::with_capacity(row.len());
        for index in 0..row.len() {
            if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
                values.push(value.map_or(SqlValue::Null, SqlValue::Int));
            } else if let Ok(value) = row.try_get::<Option<Vec<u8>>, _>(index) {
                values.push(value.map_or(SqlValue::Null, SqlValue::Bytes));
            } else {
                values.push(SqlValue::Null);
            }
        }
        SqlRow(values)
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnectorMySQL {
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, StorageError> {
        match Self::run_execute(&self.pool(), statement, params).await {
            Ok(affected) => Ok(affected),
            Err(error) if is_transient(&error) => {
                self.reconnect();
                Self::run_execute(&self.pool(), statement, params)
                    .await
                    .map_err(|retry_error| StorageError::ConnectionError(retry_error.to_string()))
            }
            Err(error) => Err(StorageError::QueryError(error)),
        }
    }

    async fn fetch_rows(&self, statement: &str, params: &[SqlParam]) -> Result<Vec<SqlRow>, StorageError> {
        match Self::run_fetch(&self.pool(), statement, params).await {
            Ok(rows) => Ok(rows),
            Err(error) if is_transient(&error) => {
                self.reconnect();
                Self::run_fetch(&self.pool(), statement, params)
                    .await
                    .map_err(|retry_error| StorageError::ConnectionError(retry_error.to_string()))
            }
            Err(error) => Err(StorageError::QueryError(error)),
        }
    }

    fn random_function(&self) -> &'static str {
        "RAND()"
    }
}
