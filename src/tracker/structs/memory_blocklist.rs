use std::collections::HashSet;
use parking_lot::RwLock;

/// In-process [`crate::tracker::traits::blocklist::Blocklist`] over two
/// hash sets. Stands in for an external blocklist service.
#[derive(Debug, Default)]
pub struct MemoryBlocklist {
    pub(crate) ips: RwLock<HashSet<String>>,
    pub(crate) info_hashes: RwLock<HashSet<String>>,
}
