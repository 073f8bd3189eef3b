// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use tempora_core::EventTime;

/// A deterministic clock for tests.
///
/// Hands out timestamps spaced a fixed step apart from a fixed base, so
/// assertions can name the exact instants a test recorded. `next` draws
/// consecutive ticks from an atomic counter and is safe to share across
/// threads; `at` and `zoned_at` are pure functions of the tick.
#[derive(Debug)]
pub struct TestClock {
    base: DateTime<Utc>,
    step: Duration,
    ticks: AtomicU64,
}

impl TestClock {
    /// Creates a clock starting at `2024-01-01T00:00:00Z` with one-minute steps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_step(Duration::minutes(1))
    }

    /// Creates a clock with a custom step between ticks.
    #[must_use]
    pub fn with_step(step: Duration) -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            step,
            ticks: AtomicU64::new(0),
        }
    }

    /// Returns the next timestamp, advancing the clock by one step.
    pub fn next(&self) -> DateTime<Utc> {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed) as i32;
        self.at(tick)
    }

    /// Returns the timestamp at the given tick without advancing the clock.
    #[must_use]
    pub fn at(&self, tick: i32) -> DateTime<Utc> {
        self.base + self.step * tick
    }

    /// Returns the timestamp at the given tick, expressed in a fixed offset
    /// of `offset_hours` east of UTC.
    #[must_use]
    pub fn zoned_at(&self, tick: i32, offset_hours: i32) -> EventTime {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        self.at(tick).with_timezone(&offset)
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}
