use serde::{Deserialize, Serialize};
use crate::cache::enums::cache_engine::CacheEngine;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// `None` disables caching; the tracker then always reads the store.
    pub engine: Option<CacheEngine>,
    /// Redis address (`host:port`) or SQLite connection string, depending
    /// on the engine.
    pub path: String,
    /// Prepended to every cache key.
    pub prefix: String,
    /// Entry lifetime in seconds.
    pub ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> CacheConfig {
        CacheConfig {
            engine: None,
            path: String::from("sqlite:///dev/shm/tracker.cache.db"),
            prefix: String::from("peers_"),
            ttl: 300,
        }
    }
}
