// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, FixedOffset, Utc};
use proptest::prelude::*;
use tempora_core::EventTime;

/// Generates an arbitrary UTC instant between 1970 and 2033.
pub fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..=2_000_000_000).prop_map(|seconds| DateTime::from_timestamp(seconds, 0).unwrap())
}

/// Generates an arbitrary fixed offset on quarter-hour boundaries,
/// covering UTC-14:00 through UTC+14:00.
pub fn offset() -> impl Strategy<Value = FixedOffset> {
    (-56i32..=56).prop_map(|quarters| FixedOffset::east_opt(quarters * 900).unwrap())
}

/// Generates an arbitrary zoned timestamp.
pub fn event_time() -> impl Strategy<Value = EventTime> {
    (instant(), offset()).prop_map(|(instant, offset)| instant.with_timezone(&offset))
}

/// Returns the ticks `0..count` in a seed-determined shuffled order.
#[must_use]
pub fn shuffled_ticks(count: i32, seed: u64) -> Vec<i32> {
    let mut ticks: Vec<i32> = (0..count).collect();
    fastrand::Rng::with_seed(seed).shuffle(&mut ticks);
    ticks
}
