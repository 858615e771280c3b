pub mod gc_policy;
pub mod info_hash;
pub mod memory_blocklist;
pub mod tracker_service;
pub mod tracker_service_handlers;
pub mod tracker_service_ip;
