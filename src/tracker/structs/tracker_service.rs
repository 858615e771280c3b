use std::sync::Arc;
use crate::cache::structs::cache_connector::CacheConnector;
use crate::common::traits::clock::Clock;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::peer_store::PeerStore;
use crate::net::structs::ip_range::IpRange;
use crate::tracker::structs::gc_policy::GcPolicy;
use crate::tracker::traits::blocklist::Blocklist;

/// The announce/scrape request handler.
///
/// Holds no per-request state; one instance is shared across all handler
/// tasks behind an `Arc`.
pub struct TrackerService {
    pub config: Arc<Configuration>,
    pub store: PeerStore,
    pub cache: CacheConnector,
    pub gc_policy: GcPolicy,
    pub blocklist: Arc<dyn Blocklist>,
    pub clock: Arc<dyn Clock>,
    pub(crate) ignore_ranges: Vec<IpRange>,
    pub(crate) trusted_proxy_ranges: Vec<IpRange>,
    pub(crate) internal_ranges: Vec<IpRange>,
}
