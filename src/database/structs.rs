pub mod database_connector;
pub mod database_connector_mysql;
pub mod database_connector_sqlite;
pub mod peer_store;
pub mod sql_value;
pub mod swarm_counts;
