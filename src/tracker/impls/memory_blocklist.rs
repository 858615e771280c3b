use crate::tracker::structs::memory_blocklist::MemoryBlocklist;
use crate::tracker::traits::blocklist::Blocklist;

impl MemoryBlocklist {
    pub fn new() -> MemoryBlocklist {
        MemoryBlocklist::default()
    }

    pub fn block_ip(&self, ip: &str) {
        self.ips.write().insert(ip.to_string());
    }

    pub fn block_info_hash(&self, info_hash_hex: &str) {
        self.info_hashes.write().insert(info_hash_hex.to_lowercase());
    }
}

impl Blocklist for MemoryBlocklist {
    fn is_blocked(&self, ip: &str, info_hash_hex: &str) -> bool {
        self.ips.read().contains(ip)
            || self.info_hashes.read().contains(info_hash_hex.to_lowercase().as_str())
    }
}
