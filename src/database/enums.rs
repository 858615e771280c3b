pub mod database_drivers;
pub mod peer_sort;
