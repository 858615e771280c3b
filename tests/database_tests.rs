mod common;

use std::sync::Arc;
use swarmtrack::config::structs::database_config::DatabaseConfig;
use swarmtrack::database::enums::database_drivers::DatabaseDrivers;
use swarmtrack::database::structs::peer_store::PeerStore;

fn file_config(dir: &tempfile::TempDir) -> DatabaseConfig {
    DatabaseConfig {
        engine: DatabaseDrivers::sqlite3,
        path: format!("sqlite://{}/tracker.db", dir.path().display()),
    }
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = common::create_temp_dir();
    let info_hash = common::random_info_hash();
    {
        let store = PeerStore::new(&file_config(&dir)).await.unwrap();
        store.upsert(&info_hash, [10, 0, 0, 1], 6881, 0, 1_000).await.unwrap();
    }
    let store = PeerStore::new(&file_config(&dir)).await.unwrap();
    assert_eq!(store.count_all().await.unwrap(), 1);
    let counts = store.aggregate(&info_hash).await.unwrap();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.complete, 1);
}

#[tokio::test]
async fn test_concurrent_upserts_on_one_endpoint_keep_one_row() {
    let dir = common::create_temp_dir();
    let store = Arc::new(PeerStore::new(&file_config(&dir)).await.unwrap());
    let info_hash = common::random_info_hash();

    let mut handles = Vec::new();
    for round in 0..10i64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.upsert(&info_hash, [10, 0, 0, 1], 6881, round, 1_000 + round).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.count_all().await.unwrap(), 1);
}

#[tokio::test]
async fn test_sampling_is_scoped_to_one_swarm() {
    let dir = common::create_temp_dir();
    let store = PeerStore::new(&file_config(&dir)).await.unwrap();
    let first = common::random_info_hash();
    let second = common::random_info_hash();

    store.upsert(&first, [10, 0, 0, 1], 1, 0, 1_000).await.unwrap();
    store.upsert(&second, [10, 0, 0, 2], 2, 0, 1_000).await.unwrap();

    let peers = store.sample(&first, 0, 50).await.unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].info_hash, first);
}

#[tokio::test]
async fn test_expire_then_scrape_consistency() {
    let dir = common::create_temp_dir();
    let store = PeerStore::new(&file_config(&dir)).await.unwrap();
    let info_hash = common::random_info_hash();

    store.upsert(&info_hash, [10, 0, 0, 1], 1, 0, 500).await.unwrap();
    store.upsert(&info_hash, [10, 0, 0, 2], 2, 100, 1_500).await.unwrap();
    assert_eq!(store.expire(1_000).await.unwrap(), 1);

    let counts = store.aggregate(&info_hash).await.unwrap();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.complete, 0);
}
