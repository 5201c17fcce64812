//! Shared fixed-clock helpers for user-directory tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use user_directory::DatasetGenerator;

/// Clock pinned to a single instant.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to midday UTC on the given date.
    ///
    /// # Panics
    ///
    /// Panics if the date does not exist.
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        match Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single() {
            Some(now) => Self(now),
            None => panic!("invalid fixed clock date {year}-{month}-{day}"),
        }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Build a seeded generator whose generation date is fixed.
pub fn seeded_generator(count: usize, seed: u64, clock: FixedClock) -> DatasetGenerator {
    DatasetGenerator::new(count)
        .with_seed(seed)
        .with_clock(Arc::new(clock))
}
