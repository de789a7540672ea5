use std::thread::sleep;
use std::time::{Duration, Instant};

/// Fixed-interval tick gate. Sleeps until the next deadline instead of
/// spinning on the clock.
pub struct Ticker {
    interval: Duration,
    next_tick: Instant,
}

impl Ticker {
    /// The first `wait` returns one full interval from now.
    pub fn new(interval: Duration) -> Self {
        Ticker { interval, next_tick: Instant::now() + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the current deadline and schedules the next one.
    /// A tick that overran starts a fresh cadence rather than firing a burst.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_tick.checked_duration_since(now) {
            sleep(remaining);
            self.next_tick += self.interval;
        } else {
            self.next_tick = now + self.interval;
        }
    }
}
