use async_trait::async_trait;
use log::info;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StorageError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::sql_value::{SqlParam, SqlRow};
use crate::database::traits::database_backend::DatabaseBackend;

impl DatabaseConnector {
    pub fn new(config: &DatabaseConfig) -> Result<DatabaseConnector, StorageError> {
        match config.engine {
            DatabaseDrivers::sqlite3 => {
                let sqlite = DatabaseConnectorSQLite::create(config.path.as_str())?;
                info!("[DB] Using SQLite backend on {}", config.path);
                Ok(DatabaseConnector {
                    mysql: None,
                    sqlite: Some(sqlite),
                    engine: Some(DatabaseDrivers::sqlite3),
                })
            }
            DatabaseDrivers::mysql => {
                let mysql = DatabaseConnectorMySQL::create(config.path.as_str())?;
                info!("[DB] Using MySQL backend on {}", config.path);
                Ok(DatabaseConnector {
                    mysql: Some(mysql),
                    sqlite: None,
                    engine: Some(DatabaseDrivers::mysql),
                })
            }
        }
    }

    pub fn engine(&self) -> Option<DatabaseDrivers> {
        self.engine
    }

    pub fn backend(&self) -> Result<&dyn DatabaseBackend, StorageError> {
        match self.engine.as_ref().ok_or(StorageError::NotConfigured)? {
            DatabaseDrivers::sqlite3 => self
                .sqlite
                .as_ref()
                .map(|sqlite| sqlite as &dyn DatabaseBackend)
                .ok_or(StorageError::NotConfigured),
            DatabaseDrivers::mysql => self
                .mysql
                .as_ref()
                .map(|mysql| mysql as &dyn DatabaseBackend)
                .ok_or(StorageError::NotConfigured),
        }
    }
}

#[async_trait]
impl DatabaseBackend for DatabaseConnector {
    async fn execute(&self, statement: &str, params: &[SqlParam]) -> Result<u64, StorageError> {
        self.backend()?.execute(statement, params).await
    }

    async fn fetch_rows(&self, statement: &str, params: &[SqlParam]) -> Result<Vec<SqlRow>, StorageError> {
        self.backend()?.fetch_rows(statement, params).await
    }

    fn random_function(&self) -> &'static str {
        match self.engine {
            Some(DatabaseDrivers::mysql) => "RAND()",
            _ => "RANDOM()",
        }
    }
}
