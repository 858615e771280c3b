use std::time::SystemTime;
use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            Err(_) => 0,
        }
    }
}
