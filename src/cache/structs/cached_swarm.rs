use serde::{Deserialize, Serialize};

/// One peer as stored in a cached sampling result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedPeer {
    pub ip: String,
    pub port: u16,
}

/// A sampled swarm snapshot, serialized to JSON for the cache value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedSwarm {
    pub peers: Vec<CachedPeer>,
    pub complete: u64,
    pub incomplete: u64,
}
