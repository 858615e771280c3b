#![allow(dead_code)]
use rand::RngExt;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tempfile::TempDir;
use swarmtrack::cache::structs::cache_connector::CacheConnector;
use swarmtrack::common::traits::clock::Clock;
use swarmtrack::config::structs::configuration::Configuration;
use swarmtrack::database::structs::peer_store::PeerStore;
use swarmtrack::tracker::structs::info_hash::InfoHash;
use swarmtrack::tracker::structs::memory_blocklist::MemoryBlocklist;
use swarmtrack::tracker::structs::tracker_service::TrackerService;

/// Settable clock so tests can move through announce intervals.
pub struct TestClock(AtomicI64);

impl TestClock {
    pub fn new(now: i64) -> TestClock {
        TestClock(AtomicI64::new(now))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct TestService {
    pub service: Arc<TrackerService>,
    pub blocklist: Arc<MemoryBlocklist>,
    pub clock: Arc<TestClock>,
    pub dir: TempDir,
}

pub async fn create_test_service(now: i64) -> TestService {
    create_test_service_with(Configuration::default(), now).await
}

pub async fn create_test_service_with(mut config: Configuration, now: i64) -> TestService {
    let dir = create_temp_dir();
    config.database.path = format!("sqlite://{}/tracker.db", dir.path().display());
    if config.cache.engine.is_some() {
        config.cache.path = format!("sqlite://{}/cache.db", dir.path().display());
    }
    let config = Arc::new(config);
    let store = PeerStore::new(&config.database).await.expect("Failed to open peer store");
    let cache = CacheConnector::new(&config.cache).await.expect("Failed to open cache");
    let blocklist = Arc::new(MemoryBlocklist::new());
    let clock = Arc::new(TestClock::new(now));
    let service = TrackerService::with_parts(
        config,
        store,
        cache,
        blocklist.clone(),
        clock.clone(),
    )
    .expect("Failed to build tracker service");
    TestService {
        service: Arc::new(service),
        blocklist,
        clock,
        dir,
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn percent_encode_hash(info_hash: &InfoHash) -> String {
    info_hash.0.iter().map(|byte| format!("%{:02X}", byte)).collect()
}

pub fn announce_query(info_hash: &InfoHash, port: u16, extra: &str) -> String {
    let mut query = format!("info_hash={}&port={}", percent_encode_hash(info_hash), port);
    if !extra.is_empty() {
        query.push('&');
        query.push_str(extra);
    }
    query
}

pub fn scrape_query(info_hash: &InfoHash) -> String {
    format!("info_hash={}", percent_encode_hash(info_hash))
}

pub fn no_headers() -> HashMap<String, String> {
    HashMap::new()
}

pub fn remote(text: &str) -> SocketAddr {
    text.parse().expect("Failed to parse socket address")
}

pub fn contains(body: &[u8], marker: &[u8]) -> bool {
    body.windows(marker.len()).any(|window| window == marker)
}
