/// Aggregate counts for one swarm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwarmCounts {
    /// All live peer records for the info hash.
    pub total: u64,
    /// Records with `left == 0` (seeds).
    pub complete: u64,
}
