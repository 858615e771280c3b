/// External blocklist seam.
///
/// Consulted once per announce with the resolved client address and the
/// hex form of the requested torrent.
pub trait Blocklist: Send + Sync {
    fn is_blocked(&self, ip: &str, info_hash_hex: &str) -> bool;
}
