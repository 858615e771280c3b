use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// String key/value store with per-entry expiry.
///
/// `now` is passed in so engines without native TTLs can filter expired
/// entries at read time.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str, now: i64) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: &str, ttl: u64, now: i64) -> Result<(), CacheError>;
    /// Removes entries expired before `now`; returns how many were dropped.
    async fn gc(&self, now: i64) -> Result<u64, CacheError>;
}
