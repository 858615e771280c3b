use redis::aio::ConnectionManager;

#[derive(Clone)]
pub struct CacheConnectorRedis {
    pub manager: ConnectionManager,
}
