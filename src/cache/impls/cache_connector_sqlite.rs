use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Row};
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_sqlite::CacheConnectorSQLite;
use crate::cache::traits::cache_backend::CacheBackend;

impl CacheConnectorSQLite {
    pub async fn create(dsl: &str) -> Result<CacheConnectorSQLite, CacheError> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let pool = SqlitePoolOptions::new().connect_lazy_with(options);
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS `cache` (\
                `cache_name` TEXT PRIMARY KEY, \
                `cache_expire_time` INTEGER NOT NULL, \
                `cache_value` TEXT NOT NULL\
            )",
        )
        .execute(&pool)
        .await?;
        Ok(CacheConnectorSQLite { pool })
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorSQLite {
    async fn get(&self, key: &str, now: i64) -> Result<Option<String>, CacheError> {
        let row = sqlx::query(
            "SELECT `cache_value` FROM `cache` \
             WHERE `cache_name` = ? AND `cache_expire_time` > ?",
        )
        .bind(key)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|row| row.get::<String, _>(0)))
    }

    async fn set(&self, key: &str, value: &str, ttl: u64, now: i64) -> Result<(), CacheError> {
        sqlx::query(
            "REPLACE INTO `cache` (`cache_name`, `cache_expire_time`, `cache_value`) \
             VALUES (?, ?, ?)",
        )
        .bind(key)
        .bind(now + ttl as i64)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn gc(&self, now: i64) -> Result<u64, CacheError> {
        let result = sqlx::query("DELETE FROM `cache` WHERE `cache_expire_time` < ?")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
