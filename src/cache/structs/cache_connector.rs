use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_connector_sqlite::CacheConnectorSQLite;

#[derive(Clone)]
pub struct CacheConnector {
    pub redis: Option<CacheConnectorRedis>,
    pub sqlite: Option<CacheConnectorSQLite>,
    pub engine: Option<CacheEngine>,
    pub prefix: String,
    pub ttl: u64,
}
