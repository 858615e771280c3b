#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tempfile::TempDir;
    use crate::cache::structs::cache_connector::CacheConnector;
    use crate::common::traits::clock::Clock;
    use crate::config::structs::configuration::Configuration;
    use crate::database::structs::peer_store::PeerStore;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::memory_blocklist::MemoryBlocklist;
    use crate::tracker::structs::tracker_service::TrackerService;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> i64 {
            self.0
        }
    }

    struct TestSetup {
        service: TrackerService,
        blocklist: Arc<MemoryBlocklist>,
        _dir: TempDir,
    }

    async fn build(mut config: Configuration, now: i64) -> TestSetup {
        let dir = TempDir::new().unwrap();
        config.database.path = format!("sqlite://{}/tracker.db", dir.path().display());
        if config.cache.engine.is_some() {
            config.cache.path = format!("sqlite://{}/cache.db", dir.path().display());
        }
        let config = Arc::new(config);
        let store = PeerStore::new(&config.database).await.unwrap();
        let cache = CacheConnector::new(&config.cache).await.unwrap();
        let blocklist = Arc::new(MemoryBlocklist::new());
        let service = TrackerService::with_parts(
            config,
            store,
            cache,
            blocklist.clone(),
            Arc::new(FixedClock(now)),
        )
        .unwrap();
        TestSetup { service, blocklist, _dir: dir }
    }

    fn encoded_hash(seed: u8) -> String {
        format!("%{:02X}", seed).repeat(20)
    }

    fn headers() -> HashMap<String, String> {
        HashMap::new()
    }

    fn addr(text: &str) -> SocketAddr {
        text.parse().unwrap()
    }

    mod gc_policy_tests {
        use crate::config::structs::tracker_config::TrackerConfig;
        use crate::tracker::structs::gc_policy::GcPolicy;

        #[test]
        fn test_threshold_from_interval_and_factor() {
            let policy = GcPolicy { interval: 1800, factor: 2.5 };
            assert_eq!(policy.threshold(10_000), 10_000 - 4_500);
        }

        #[test]
        fn test_interval_floor_is_sixty_seconds() {
            let policy = GcPolicy { interval: 30, factor: 2.0 };
            assert_eq!(policy.threshold(1_000), 1_000 - 120);
        }

        #[test]
        fn test_factor_floor_is_two() {
            let policy = GcPolicy { interval: 100, factor: 0.5 };
            assert_eq!(policy.threshold(1_000), 1_000 - 200);
        }

        #[test]
        fn test_policy_from_config() {
            let policy = GcPolicy::new(&TrackerConfig::default());
            assert_eq!(policy.interval, 1800);
            assert_eq!(policy.factor, 2.5);
        }
    }

    mod announce_tests {
        use super::*;

        #[tokio::test]
        async fn test_announce_response_wire_format() {
            let setup = build(Configuration::default(), 10_000).await;
            let query = format!("info_hash={}&port=6881&left=0", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.1:49152"))
                .await;
            assert_eq!(
                body,
                b"d8:completei1e10:incompletei0e8:intervali1800e12:min intervali900e\
                  5:peersld2:ip8:10.0.0.14:porti6881eeee"
                    .to_vec()
            );
        }

        #[tokio::test]
        async fn test_announce_compact_packs_six_bytes_per_peer() {
            let setup = build(Configuration::default(), 10_000).await;
            let query = format!("info_hash={}&port=6881&left=0&compact=1", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.1:49152"))
                .await;
            let mut expected = b"5:peers6:".to_vec();
            expected.extend_from_slice(&[10, 0, 0, 1]);
            expected.extend_from_slice(&6881u16.to_be_bytes());
            expected.push(b'e');
            assert!(body.windows(expected.len()).any(|window| window == expected));
        }

        #[tokio::test]
        async fn test_invalid_info_hash_fails_without_write() {
            let setup = build(Configuration::default(), 10_000).await;
            let body = setup
                .service
                .announce(
                    Some(String::from("info_hash=short&port=6881")),
                    &headers(),
                    addr("10.0.0.1:49152"),
                )
                .await;
            assert_eq!(body, TrackerService::failure_response("invalid info_hash"));
            assert_eq!(setup.service.store.count_all().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_missing_port_fails() {
            let setup = build(Configuration::default(), 10_000).await;
            let body = setup
                .service
                .announce(
                    Some(format!("info_hash={}", encoded_hash(0xAA))),
                    &headers(),
                    addr("10.0.0.1:49152"),
                )
                .await;
            assert_eq!(body, TrackerService::failure_response("missing port"));
        }

        #[tokio::test]
        async fn test_numwant_is_clamped_to_two_hundred() {
            let setup = build(Configuration::default(), 10_000).await;
            let hash = InfoHash([0xAA; 20]);
            for index in 0..210u16 {
                let ip = [10, 0, (index >> 8) as u8, index as u8];
                setup.service.store.upsert(&hash, ip, 7000 + index, 1, 10_000).await.unwrap();
            }
            let query = format!(
                "info_hash={}&port=6881&left=0&compact=1&numwant=10000",
                encoded_hash(0xAA)
            );
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.1:49152"))
                .await;
            let marker = b"5:peers1200:";
            assert!(body.windows(marker.len()).any(|window| window == marker));
        }

        #[tokio::test]
        async fn test_gc_trigger_expires_exactly_below_threshold() {
            // interval 1800, factor 2.5: threshold = 10000 - 4500 = 5500
            let setup = build(Configuration::default(), 10_000).await;
            let hash = InfoHash([0xAA; 20]);
            setup.service.store.upsert(&hash, [10, 0, 0, 1], 1, 1, 5_499).await.unwrap();
            setup.service.store.upsert(&hash, [10, 0, 0, 2], 2, 1, 5_500).await.unwrap();
            setup.service.store.upsert(&hash, [10, 0, 0, 3], 3, 1, 5_501).await.unwrap();
            let body = setup
                .service
                .announce(Some(String::from("run_gc")), &headers(), addr("10.0.0.1:49152"))
                .await;
            assert_eq!(body, b"ok".to_vec());
            assert_eq!(setup.service.store.count_all().await.unwrap(), 2);
        }

        #[tokio::test]
        async fn test_ignored_address_is_rejected_without_write() {
            let mut config = Configuration::default();
            config.tracker.ignore_list = vec![String::from("10.0.0.0/8")];
            let setup = build(config, 10_000).await;
            let query = format!("info_hash={}&port=6881", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("10.1.2.3:49152"))
                .await;
            assert_eq!(body, TrackerService::failure_response("client address is not allowed"));
            assert_eq!(setup.service.store.count_all().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn test_blocked_info_hash_is_rejected() {
            let setup = build(Configuration::default(), 10_000).await;
            setup.blocklist.block_info_hash(InfoHash([0xAA; 20]).to_string().as_str());
            let query = format!("info_hash={}&port=6881", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.1:49152"))
                .await;
            assert_eq!(body, TrackerService::failure_response("client or torrent is blocked"));
        }

        #[tokio::test]
        async fn test_reported_ip_honored_when_configured() {
            let mut config = Configuration::default();
            config.tracker.ignore_reported_ip = false;
            let setup = build(config, 10_000).await;
            let query = format!("info_hash={}&port=6881&ip=1.2.3.4", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("9.9.9.9:49152"))
                .await;
            let marker = b"2:ip7:1.2.3.4";
            assert!(body.windows(marker.len()).any(|window| window == marker));
        }

        #[tokio::test]
        async fn test_internal_reported_ip_falls_back_to_direct_address() {
            let mut config = Configuration::default();
            config.tracker.ignore_reported_ip = false;
            let setup = build(config, 10_000).await;
            let query = format!("info_hash={}&port=6881&ip=192.168.1.5", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query), &headers(), addr("9.9.9.9:49152"))
                .await;
            let marker = b"2:ip7:9.9.9.9";
            assert!(body.windows(marker.len()).any(|window| window == marker));
        }

        #[tokio::test]
        async fn test_proxy_header_trusted_only_from_trusted_proxy() {
            let mut config = Configuration::default();
            config.tracker.reverse_proxy = true;
            config.tracker.trusted_proxies = vec![String::from("127.0.0.1")];
            let setup = build(config, 10_000).await;
            let mut proxied = headers();
            proxied.insert(String::from("X-Real-IP"), String::from("8.8.4.4"));

            let query = format!("info_hash={}&port=6881", encoded_hash(0xAA));
            let body = setup
                .service
                .announce(Some(query.clone()), &proxied, addr("127.0.0.1:49152"))
                .await;
            let marker = b"2:ip7:8.8.4.4";
            assert!(body.windows(marker.len()).any(|window| window == marker));

            // the same header from an untrusted address is ignored
            let body = setup
                .service
                .announce(Some(query), &proxied, addr("9.9.9.9:49152"))
                .await;
            let marker = b"2:ip7:9.9.9.9";
            assert!(body.windows(marker.len()).any(|window| window == marker));
        }

        #[tokio::test]
        async fn test_cached_swarm_serves_stale_within_ttl() {
            let mut config = Configuration::default();
            config.cache.engine = Some(crate::cache::enums::cache_engine::CacheEngine::sqlite3);
            let setup = build(config, 10_000).await;
            let query = format!("info_hash={}&port=6881&left=0", encoded_hash(0xAA));
            let first = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.1:49152"))
                .await;
            // the second announcer is upserted but reads the cached sample,
            // which predates it
            let query = format!("info_hash={}&port=6882&left=0", encoded_hash(0xAA));
            let second = setup
                .service
                .announce(Some(query), &headers(), addr("10.0.0.2:49152"))
                .await;
            assert_eq!(first, second);
            assert_eq!(setup.service.store.count_all().await.unwrap(), 2);
        }
    }

    mod scrape_tests {
        use super::*;

        #[tokio::test]
        async fn test_scrape_zero_peers_reports_zero_counts() {
            let setup = build(Configuration::default(), 10_000).await;
            let body = setup
                .service
                .scrape(Some(format!("info_hash={}", encoded_hash(0xAA))))
                .await;
            let mut expected = b"d5:filesd20:".to_vec();
            expected.extend_from_slice(&[0xAA; 20]);
            expected.extend_from_slice(b"d8:completei0e10:downloadedi0e10:incompletei0eeee");
            assert_eq!(body, expected);
        }

        #[tokio::test]
        async fn test_scrape_counts_and_downloaded_approximation() {
            let setup = build(Configuration::default(), 10_000).await;
            let hash = InfoHash([0xAA; 20]);
            setup.service.store.upsert(&hash, [10, 0, 0, 1], 1, 0, 10_000).await.unwrap();
            setup.service.store.upsert(&hash, [10, 0, 0, 2], 2, 0, 10_000).await.unwrap();
            setup.service.store.upsert(&hash, [10, 0, 0, 3], 3, 99, 10_000).await.unwrap();
            let body = setup
                .service
                .scrape(Some(format!("info_hash={}", encoded_hash(0xAA))))
                .await;
            let marker = b"d8:completei2e10:downloadedi2e10:incompletei1ee";
            assert!(body.windows(marker.len()).any(|window| window == marker));
        }

        #[tokio::test]
        async fn test_scrape_missing_info_hash_fails() {
            let setup = build(Configuration::default(), 10_000).await;
            let body = setup.service.scrape(Some(String::from("other=1"))).await;
            assert_eq!(body, TrackerService::failure_response("missing info_hash"));
        }

        #[tokio::test]
        async fn test_scrape_skips_undecodable_hashes() {
            let setup = build(Configuration::default(), 10_000).await;
            let body = setup
                .service
                .scrape(Some(format!("info_hash=bad&info_hash={}", encoded_hash(0xBB))))
                .await;
            let mut expected = b"d5:filesd20:".to_vec();
            expected.extend_from_slice(&[0xBB; 20]);
            expected.extend_from_slice(b"d8:completei0e10:downloadedi0e10:incompletei0eeee");
            assert_eq!(body, expected);
        }
    }
}
