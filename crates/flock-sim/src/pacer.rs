//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Blocks at the end of each frame until the configured interval has elapsed.
///
/// Pacing is purely presentational: the simulation integrates per tick, not
/// per elapsed second, so skipping the pacer (interval `None`, as tests do)
/// changes nothing but wall-clock speed.
pub struct FramePacer {
    interval: Option<Duration>,
    last: Option<Instant>,
}

impl FramePacer {
    /// `interval = None` disables pacing entirely.
    pub fn new(interval: Option<Duration>) -> Self {
        Self { interval, last: None }
    }

    /// Sleep until one interval past the previous call.
    ///
    /// A frame that overran its interval is not "paid back" — the deadline
    /// resets to now, so one slow frame doesn't cause a catch-up burst.
    pub fn wait(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };
        let now = Instant::now();
        match self.last {
            None => self.last = Some(now),
            Some(prev) => {
                let deadline = prev + interval;
                if let Some(remaining) = deadline.checked_duration_since(now) {
                    std::thread::sleep(remaining);
                    self.last = Some(deadline);
                } else {
                    self.last = Some(now);
                }
            }
        }
    }
}
