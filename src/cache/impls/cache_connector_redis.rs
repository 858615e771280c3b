use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::traits::cache_backend::CacheBackend;

impl CacheConnectorRedis {
    pub async fn create(path: &str) -> Result<CacheConnectorRedis, CacheError> {
        let client = redis::Client::open(path)?;
        let manager = client.get_connection_manager().await?;
        Ok(CacheConnectorRedis { manager })
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorRedis {
    async fn get(&self, key: &str, _now: i64) -> Result<Option<String>, CacheError> {
        let mut connection = self.manager.clone();
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut connection)
            .await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: u64, _now: i64) -> Result<(), CacheError> {
        let mut connection = self.manager.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl)
            .query_async::<()>(&mut connection)
            .await?;
        Ok(())
    }

    async fn gc(&self, _now: i64) -> Result<u64, CacheError> {
        // Redis expires keys on its own.
        Ok(0)
    }
}
