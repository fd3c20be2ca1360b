// src/timing.rs
use std::time::{Duration, Instant};

/// Repeating deadline that fires on a fixed period.
///
/// The schedule is advanced by polling: `poll` returns how many whole
/// periods have elapsed since the last call and moves the next deadline
/// forward accordingly. Dropping the ticker cancels it; there is no
/// background thread involved.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        // A zero period would never advance the schedule
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Returns the number of ticks that became due at or before `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_due {
            fired += 1;
            self.next_due += self.period;
        }
        fired
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

/// One-shot deadline. Elapsed once `now` reaches the due time.
#[derive(Debug, Clone, Copy)]
pub struct Delay {
    due: Instant,
}

impl Delay {
    pub fn new(after: Duration, now: Instant) -> Self {
        Self { due: now + after }
    }

    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn due(&self) -> Instant {
        self.due
    }
}
