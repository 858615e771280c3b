pub mod announce_query_request;
pub mod gc_policy;
pub mod info_hash;
pub mod memory_blocklist;
pub mod peer_record;
pub mod scrape_query_request;
pub mod tracker_service;
