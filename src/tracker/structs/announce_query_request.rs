use crate::tracker::structs::info_hash::InfoHash;

/// A validated announce request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    /// Effective client address after proxy and override resolution.
    pub ip: [u8; 4],
    pub port: u16,
    pub uploaded: i64,
    pub downloaded: i64,
    pub left: i64,
    pub compact: bool,
    pub no_peer_id: bool,
    /// Peers to return, already defaulted and clamped.
    pub numwant: u64,
    pub event: Option<String>,
}
