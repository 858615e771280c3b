/// Peer expiry policy.
///
/// Records older than `now - max(interval, 60) * max(factor, 2)` are
/// eligible for deletion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcPolicy {
    pub interval: u64,
    pub factor: f64,
}
