use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct CacheConnectorSQLite {
    pub pool: Pool<Sqlite>,
}
