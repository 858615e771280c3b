pub mod cache_connector;
pub mod cache_connector_redis;
pub mod cache_connector_sqlite;
pub mod cached_swarm;
