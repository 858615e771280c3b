use crate::tracker::structs::info_hash::InfoHash;

/// One row of the peer table.
///
/// The `(info_hash, ip, port)` triple is the primary key; each announce
/// overwrites the prior record for that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerRecord {
    pub info_hash: InfoHash,
    pub ip: [u8; 4],
    pub port: u16,
    /// Bytes left to download; 0 means the peer is seeding.
    pub left: i64,
    /// Epoch seconds of the last announce.
    pub update_time: i64,
}
