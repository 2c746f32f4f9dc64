use std::time::{Duration, Instant};

/// A fixed-cadence schedule polled from a loop.
pub struct Ticker {
    next: Instant,    // The next time a tick is due.
    period: Duration, // Time between ticks.
}

impl Ticker {
    /// Creates a ticker that fires `rate` times per second.
    pub fn new(rate: f32) -> Self {
        let period = Duration::from_secs_f32(1.0 / rate);
        Self {
            next: Instant::now() + period,
            period,
        }
    }

    /// Checks whether a tick is due, re-arming the schedule when it is.
    ///
    /// Fires at most once per call; the next tick is measured from the
    /// moment this one was observed.
    pub fn is_due(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next {
            return false;
        }

        self.next = now + self.period;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_the_period_and_rearms() {
        let mut ticker = Ticker::new(100.0);

        assert!(!ticker.is_due());
        std::thread::sleep(Duration::from_millis(20));
        assert!(ticker.is_due());
        assert!(!ticker.is_due());
    }
}
