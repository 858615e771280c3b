use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrackerConfig {
    /// Seconds clients are told to wait between announces.
    pub announce_interval: u64,
    /// Peer records expire after `max(announce_interval, 60) * max(factor, 2)`
    /// seconds without a new announce.
    pub peer_expire_factor: f64,
    /// Peers returned per announce when the client sends no `numwant`.
    pub default_numwant: u64,
    /// Interval of the background expiry sweep, in seconds.
    pub cleanup_interval: u64,
    /// Query parameter whose mere presence on /announce triggers GC.
    pub run_gc_key: String,
    /// Trust `X-Real-IP` / `X-Forwarded-For` from listed proxies.
    pub reverse_proxy: bool,
    /// Proxy addresses (single IPs or CIDR) allowed to supply client IPs.
    pub trusted_proxies: Vec<String>,
    /// When false, a structurally valid `ip` announce parameter overrides
    /// the connection address.
    pub ignore_reported_ip: bool,
    /// Permit reported IPs inside RFC1918/loopback ranges.
    pub allow_internal_ip: bool,
    /// Addresses (single IPs or CIDR) whose announces are rejected.
    pub ignore_list: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> TrackerConfig {
        TrackerConfig {
            announce_interval: 1800,
            peer_expire_factor: 2.5,
            default_numwant: 50,
            cleanup_interval: 900,
            run_gc_key: String::from("run_gc"),
            reverse_proxy: false,
            trusted_proxies: vec![],
            ignore_reported_ip: true,
            allow_internal_ip: false,
            ignore_list: vec![],
        }
    }
}
