use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::structs::gc_policy::GcPolicy;

impl GcPolicy {
    pub fn new(config: &TrackerConfig) -> GcPolicy {
        GcPolicy {
            interval: config.announce_interval,
            factor: config.peer_expire_factor,
        }
    }

    /// The cutoff below which peer records are expired.
    ///
    /// The interval is floored at 60 seconds and the factor at 2, so a
    /// misconfigured tracker never expires peers faster than it tells them
    /// to come back.
    pub fn threshold(&self, now: i64) -> i64 {
        let interval = self.interval.max(60) as f64;
        let factor = self.factor.max(2.0);
        now - (interval * factor) as i64
    }
}
