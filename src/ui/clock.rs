//! Time sources for the adapter.
//!
//! The toast slot needs a monotonic instant and the grid needs the local
//! calendar day. Both come through [`Clock`] so tests can drive them.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::utils::date;

pub trait Clock {
    fn now(&self) -> Instant;
    fn today(&self) -> NaiveDate;
}

/// Wall clock and local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        date::today()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
    today: Rc<Cell<NaiveDate>>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
            today: Rc::new(Cell::new(today)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let handle = clock.clone();
        let start = clock.now();

        handle.advance(Duration::from_secs(5));
        handle.set_today(NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());

        assert_eq!(clock.now() - start, Duration::from_secs(5));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }
}
