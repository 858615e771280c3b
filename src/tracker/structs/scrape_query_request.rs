use crate::tracker::structs::info_hash::InfoHash;

/// A validated scrape request: the hashes that decoded to 20 bytes, in
/// request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    pub info_hashes: Vec<InfoHash>,
}
