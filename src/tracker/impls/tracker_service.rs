use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, warn};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::common::structs::custom_error::CustomError;
use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::peer_store::PeerStore;
use crate::net::impls::ip_range::{internal_ranges, parse_ranges};
use crate::tracker::structs::gc_policy::GcPolicy;
use crate::tracker::structs::memory_blocklist::MemoryBlocklist;
use crate::tracker::structs::tracker_service::TrackerService;
use crate::tracker::traits::blocklist::Blocklist;

pub(crate) const LOG_PREFIX: &str = "[TRACKER]";

impl TrackerService {
    /// Builds a service from configuration: connects the store, the cache
    /// and an empty in-process blocklist on the system clock.
    ///
    /// An unreachable cache is not fatal; the service degrades to the null
    /// connector and serves every announce from the store.
    pub async fn new(config: Arc<Configuration>) -> Result<TrackerService, CustomError> {
        let store = PeerStore::new(&config.database)
            .await
            .map_err(|error| CustomError::new(error.to_string().as_str()))?;
        let cache = match CacheConnector::new(&config.cache).await {
            Ok(cache) => cache,
            Err(error) => {
                warn!("{} Cache unavailable, continuing without: {}", LOG_PREFIX, error);
                CacheConnector::null()
            }
        };
        Self::with_parts(
            config,
            store,
            cache,
            Arc::new(MemoryBlocklist::new()),
            Arc::new(SystemClock),
        )
    }

    /// Assembles a service from already constructed collaborators.
    pub fn with_parts(
        config: Arc<Configuration>,
        store: PeerStore,
        cache: CacheConnector,
        blocklist: Arc<dyn Blocklist>,
        clock: Arc<dyn Clock>,
    ) -> Result<TrackerService, CustomError> {
        let ignore_ranges = parse_ranges(config.tracker.ignore_list.as_slice())?;
        let trusted_proxy_ranges = parse_ranges(config.tracker.trusted_proxies.as_slice())?;
        let gc_policy = GcPolicy::new(&config.tracker);
        Ok(TrackerService {
            config,
            store,
            cache,
            gc_policy,
            blocklist,
            clock,
            ignore_ranges,
            trusted_proxy_ranges,
            internal_ranges: internal_ranges(),
        })
    }

    /// One expiry pass over the store and the cache.
    ///
    /// Store failures are logged, not propagated; the next sweep or trigger
    /// retries naturally. Returns the number of expired peer records.
    pub async fn run_gc(&self) -> u64 {
        let now = self.clock.now();
        let threshold = self.gc_policy.threshold(now);
        let expired = match self.store.expire(threshold).await {
            Ok(count) => count,
            Err(storage_error) => {
                error!("{} Expiry sweep failed: {}", LOG_PREFIX, storage_error);
                0
            }
        };
        self.cache.gc(now).await;
        expired
    }

    /// Spawns the periodic background expiry sweep.
    pub fn spawn_gc_sweep(service: Arc<TrackerService>) -> JoinHandle<()> {
        let period = Duration::from_secs(service.config.tracker.cleanup_interval.max(1));
        tokio::spawn(async move {
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately
            timer.tick().await;
            loop {
                timer.tick().await;
                let expired = service.run_gc().await;
                debug!("{} Background sweep expired {} peer records", LOG_PREFIX, expired);
            }
        })
    }
}
