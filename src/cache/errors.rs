use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("redis error: {0}")]
    RedisError(#[from] redis::RedisError),
    #[error("cache database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("cache encode error: {0}")]
    EncodeError(#[from] serde_json::Error),
    #[error("cache engine is not configured")]
    NotConfigured,
}
