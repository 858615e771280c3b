pub mod cache_config;
pub mod configuration;
pub mod database_config;
pub mod tracker_config;
