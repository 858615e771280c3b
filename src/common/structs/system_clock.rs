/// Wall clock implementation of [`crate::common::traits::clock::Clock`]
/// backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;
