// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::time::{to_event_time, to_instant, EventTime, Instant};
use chrono::{DateTime, TimeZone};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// One timestamped association: a point in time and the payload recorded at
/// that point.
///
/// Ordering, equality and hashing consider the instant only. The payload and
/// the display offset are deliberately irrelevant: two entries recorded at
/// the same absolute time are the same entry for every ordering purpose, so
/// entries taken from differently zoned sources interleave correctly.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use tempora_core::Entry;
///
/// let athens = FixedOffset::east_opt(2 * 3600).unwrap();
/// let local = Entry::new(&athens.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(), "a");
/// let utc = Entry::new(&Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(), "b");
///
/// // Same absolute time, so equal regardless of payload and offset.
/// assert_eq!(local, utc);
/// ```
#[derive(Debug, Clone)]
pub struct Entry<P> {
    event_time: EventTime,
    payload: P,
}

impl<P> Entry<P> {
    /// Creates an entry at the given timestamp, normalizing the zone into
    /// display metadata.
    #[must_use]
    pub fn new<Tz: TimeZone>(timestamp: &DateTime<Tz>, payload: P) -> Self {
        Self {
            event_time: to_event_time(timestamp),
            payload,
        }
    }

    /// The zoned timestamp this entry was recorded with.
    #[must_use]
    pub const fn event_time(&self) -> EventTime {
        self.event_time
    }

    /// The zone-independent point in time; the entry's ordering key.
    #[must_use]
    pub fn instant(&self) -> Instant {
        to_instant(&self.event_time)
    }

    /// A shared view of the payload.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access to the payload.
    ///
    /// Useful on detached entries (snapshots, removed entries) before
    /// re-insertion; the time key cannot be changed through it.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Consumes the entry and returns the payload.
    #[must_use]
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Consumes the entry and returns both halves.
    #[must_use]
    pub fn into_parts(self) -> (EventTime, P) {
        (self.event_time, self.payload)
    }

    /// Display-timestamp update on augment; the instant is unchanged by
    /// construction (callers pass a timestamp denoting the same instant).
    pub(crate) fn set_event_time(&mut self, event_time: EventTime) {
        self.event_time = event_time;
    }
}

impl<P> PartialEq for Entry<P> {
    fn eq(&self, other: &Self) -> bool {
        // chrono compares the underlying UTC instant, not the offset.
        self.event_time == other.event_time
    }
}

impl<P> Eq for Entry<P> {}

impl<P> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event_time.cmp(&other.event_time)
    }
}

impl<P> Hash for Entry<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant().hash(state);
    }
}

impl<P: Display> Display for Entry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.event_time.to_rfc3339(), self.payload)
    }
}
