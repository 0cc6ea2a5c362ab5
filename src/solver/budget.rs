use std::time::{Duration, Instant};

use log::trace;

use crate::constants::MILLIS_PER_SECOND;

/// Wall clock allowance for one search, polled before every node.
///
/// The budget is in whole milliseconds and is only exceeded once strictly more
/// than `limit_ms` have passed. A negative limit is exceeded from the start.
#[derive(Copy, Clone, Debug)]
pub struct TimeBudget {
    start: Instant,
    limit_ms: i64,
}

impl TimeBudget {
    pub fn from_millis(limit_ms: i64) -> TimeBudget {
        TimeBudget {
            start: Instant::now(),
            limit_ms,
        }
    }
    pub fn from_seconds(seconds: i64) -> TimeBudget {
        TimeBudget::from_millis(seconds.saturating_mul(MILLIS_PER_SECOND))
    }
    pub fn restart(&mut self) {
        self.start = Instant::now();
    }
    pub fn limit_millis(&self) -> i64 { self.limit_ms }
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
    pub fn exceeded(&self) -> bool {
        let elapsed = self.start.elapsed().as_millis();
        let exceeded = i128::try_from(elapsed).unwrap_or(i128::MAX) > i128::from(self.limit_ms);
        if exceeded {
            trace!("time budget of {}ms exceeded after {}ms", self.limit_ms, elapsed);
        }
        return exceeded;
    }
}
