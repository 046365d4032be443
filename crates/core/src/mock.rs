use chrono::NaiveDate;
use mockall::mock;

use crate::clock::Clock;

// Mock clock for pinning "today" in tests
mock! {
    pub Clock {}

    impl Clock for Clock {
        fn today(&self) -> NaiveDate;
    }
}

/// Builds a mock clock that always reports `date`.
pub fn fixed_clock(date: NaiveDate) -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_today().return_const(date);
    clock
}
