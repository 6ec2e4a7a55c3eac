//! Time source for record ids and display stamps.

use chrono::{DateTime, Duration, FixedOffset, Local};
use std::cell::Cell;

/// Supplies the current wall-clock time in the user's local offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    fn now_ms(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Device clock in the system timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Manually driven clock.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: Cell<DateTime<FixedOffset>>,
}

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self {
            current: Cell::new(at),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    pub fn set(&self, at: DateTime<FixedOffset>) {
        self.current.set(at);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{Duration, FixedOffset, TimeZone};

    #[test]
    fn fixed_clock_advances() {
        let start = FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .unwrap();
        let clock = FixedClock::new(start);

        clock.advance(Duration::milliseconds(250));

        assert_eq!(clock.now_ms(), start.timestamp_millis() + 250);
    }
}
