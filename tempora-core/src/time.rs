// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timestamp normalization.
//!
//! A series accepts timestamps in any chrono time zone and reduces each one
//! to an [`Instant`] (UTC) for ordering, equality and storage. The original
//! zone offset survives only as display metadata on the stored entry, as an
//! [`EventTime`]. Two timestamps denoting the same absolute point in time
//! collapse to the same instant, whatever their offsets.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// A point in time carrying the zone offset it was recorded with.
///
/// This is the display form of a timestamp. It plays no role in ordering;
/// see [`Instant`] for the key form.
pub type EventTime = DateTime<FixedOffset>;

/// A zone-independent point in time, the sole ordering and equality key of
/// every series.
pub type Instant = DateTime<Utc>;

/// Reduces a timestamp in any time zone to its [`Instant`].
///
/// This is a pure function of its input: no clock is consulted and no state
/// is involved.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use tempora_core::to_instant;
///
/// let athens = FixedOffset::east_opt(2 * 3600).unwrap();
/// let local = athens.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// let utc = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
///
/// assert_eq!(to_instant(&local), utc);
/// ```
#[must_use]
pub fn to_instant<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Instant {
    timestamp.with_timezone(&Utc)
}

/// Fixes a timestamp's offset, yielding its [`EventTime`] display form.
///
/// The absolute point in time is unchanged; only the representation becomes
/// offset-carrying.
#[must_use]
pub fn to_event_time<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> EventTime {
    timestamp.fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn same_absolute_time_in_different_zones_reduces_to_one_instant() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();

        let athens = plus_two.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let new_york = minus_five.with_ymd_and_hms(2024, 1, 15, 5, 0, 0).unwrap();

        assert_eq!(to_instant(&athens), to_instant(&new_york));
    }

    #[test]
    fn instant_of_a_utc_timestamp_is_itself() {
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(to_instant(&utc), utc);
    }

    #[test]
    fn event_time_preserves_the_offset() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let athens = plus_two.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let event_time = to_event_time(&athens);
        assert_eq!(event_time.offset(), &plus_two);
        assert_eq!(to_instant(&event_time), to_instant(&athens));
    }
}
