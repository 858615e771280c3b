use log::{debug, info, warn};
use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_connector_sqlite::CacheConnectorSQLite;
use crate::cache::structs::cached_swarm::CachedSwarm;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;

const LOG_PREFIX: &str = "[CACHE]";

impl CacheConnector {
    /// Connects the configured engine. A config without an engine yields the
    /// null connector, same as [`CacheConnector::null`].
    pub async fn new(config: &CacheConfig) -> Result<CacheConnector, CacheError> {
        match config.engine {
            None => Ok(CacheConnector::null()),
            Some(CacheEngine::redis) => {
                let redis = CacheConnectorRedis::create(config.path.as_str()).await?;
                info!("{} Using Redis cache on {}", LOG_PREFIX, config.path);
                Ok(CacheConnector {
                    redis: Some(redis),
                    sqlite: None,
                    engine: Some(CacheEngine::redis),
                    prefix: config.prefix.clone(),
                    ttl: config.ttl,
                })
            }
            Some(CacheEngine::sqlite3) => {
                let sqlite = CacheConnectorSQLite::create(config.path.as_str()).await?;
                info!("{} Using SQLite cache on {}", LOG_PREFIX, config.path);
                Ok(CacheConnector {
                    redis: None,
                    sqlite: Some(sqlite),
                    engine: Some(CacheEngine::sqlite3),
                    prefix: config.prefix.clone(),
                    ttl: config.ttl,
                })
            }
        }
    }

    /// A connector with no backend. Every read misses, every write and
    /// sweep is a no-op.
    pub fn null() -> CacheConnector {
        CacheConnector {
            redis: None,
            sqlite: None,
            engine: None,
            prefix: String::new(),
            ttl: 0,
        }
    }

    fn backend(&self) -> Option<&dyn CacheBackend> {
        match self.engine? {
            CacheEngine::redis => self.redis.as_ref().map(|redis| redis as &dyn CacheBackend),
            CacheEngine::sqlite3 => self.sqlite.as_ref().map(|sqlite| sqlite as &dyn CacheBackend),
        }
    }

    /// Key for one sampled swarm. The requested peer count is part of the
    /// key so differently sized samples never alias.
    pub fn swarm_key(&self, info_hash_hex: &str, numwant: u64) -> String {
        format!("{}{}:{}", self.prefix, info_hash_hex, numwant)
    }

    /// Cached snapshot for `key`, or `None` on miss, expiry, engine failure
    /// or an undecodable value.
    pub async fn get_swarm(&self, key: &str, now: i64) -> Option<CachedSwarm> {
        let backend = self.backend()?;
        match backend.get(key, now).await {
            Ok(Some(value)) => match serde_json::from_str::<CachedSwarm>(value.as_str()) {
                Ok(swarm) => {
                    debug!("{} hit {}", LOG_PREFIX, key);
                    Some(swarm)
                }
                Err(error) => {
                    warn!("{} Discarding undecodable entry {}: {}", LOG_PREFIX, key, error);
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!("{} Read failed for {}: {}", LOG_PREFIX, key, error);
                None
            }
        }
    }

    /// Stores a snapshot under `key` for the configured TTL. Failures are
    /// logged and swallowed.
    pub async fn set_swarm(&self, key: &str, swarm: &CachedSwarm, now: i64) {
        let Some(backend) = self.backend() else {
            return;
        };
        let value = match serde_json::to_string(swarm) {
            Ok(value) => value,
            Err(error) => {
                warn!("{} Encode failed for {}: {}", LOG_PREFIX, key, error);
                return;
            }
        };
        if let Err(error) = backend.set(key, value.as_str(), self.ttl, now).await {
            warn!("{} Write failed for {}: {}", LOG_PREFIX, key, error);
        }
    }

    /// Sweeps expired entries. Returns 0 on the null connector, on engines
    /// with native expiry and on failure.
    pub async fn gc(&self, now: i64) -> u64 {
        let Some(backend) = self.backend() else {
            return 0;
        };
        match backend.gc(now).await {
            Ok(dropped) => {
                if dropped > 0 {
                    info!("{} Dropped {} expired entries", LOG_PREFIX, dropped);
                }
                dropped
            }
            Err(error) => {
                warn!("{} Sweep failed: {}", LOG_PREFIX, error);
                0
            }
        }
    }
}
