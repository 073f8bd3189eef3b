// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, TimeZone};
use std::fmt;
use tempora_core::{to_event_time, Entry, EventTime, SeriesCore, Shape};

/// Single-use builder for immutable series.
///
/// Operations take the builder by value and hand it back, so a finished
/// chain leaves nothing behind to reuse; the compiler enforces the
/// single-use contract. Staged events are not validated until the build:
/// the sorted shapes report the first rejected event from `build`, the
/// infallible shapes build without a result wrapper.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_series::ImmutableMultiEventSeries;
///
/// let series: ImmutableMultiEventSeries<&str> = ImmutableMultiEventSeries::builder()
///     .with(&Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(), "alarm")
///     .with(&Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(), "snooze")
///     .build();
///
/// assert_eq!(series.len(), 1);
/// assert_eq!(series.event_count(), 2);
/// ```
pub struct SeriesBuilder<S: Shape> {
    shape: S,
    staged: Vec<Staged<S>>,
}

enum Staged<S: Shape> {
    Event(EventTime, S::Event),
    Payload(EventTime, S::Payload),
}

impl<S: Shape> SeriesBuilder<S> {
    /// Creates a builder driven by the given shape policy.
    #[must_use]
    pub fn with_shape(shape: S) -> Self {
        Self {
            shape,
            staged: Vec::new(),
        }
    }

    /// Stages one event at the timestamp.
    #[must_use]
    pub fn with<Tz: TimeZone>(mut self, timestamp: &DateTime<Tz>, event: S::Event) -> Self {
        self.staged.push(Staged::Event(to_event_time(timestamp), event));
        self
    }

    /// Stages a whole payload at the timestamp.
    #[must_use]
    pub fn with_payload<Tz: TimeZone>(
        mut self,
        timestamp: &DateTime<Tz>,
        payload: S::Payload,
    ) -> Self {
        self.staged
            .push(Staged::Payload(to_event_time(timestamp), payload));
        self
    }

    /// Stages a detached entry at its own timestamp.
    #[must_use]
    pub fn with_entry(mut self, entry: Entry<S::Payload>) -> Self {
        let (event_time, payload) = entry.into_parts();
        self.staged.push(Staged::Payload(event_time, payload));
        self
    }

    /// Stages every entry of the collection, in iteration order.
    #[must_use]
    pub fn with_entries<I>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<S::Payload>>,
    {
        entries.into_iter().fold(self, Self::with_entry)
    }

    /// Number of staged operations, taken before anything is applied.
    #[must_use]
    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    /// Folds the staged operations into a fresh engine, in staging order.
    pub(crate) fn build_core(self) -> Result<SeriesCore<S>, S::Error> {
        let mut core = SeriesCore::with_shape(self.shape);
        for staged in self.staged {
            match staged {
                Staged::Event(event_time, event) => {
                    core.add(&event_time, event)?;
                }
                Staged::Payload(event_time, payload) => {
                    core.merge_payload(&event_time, payload)?;
                }
            }
        }
        Ok(core)
    }
}

impl<S: Shape + Default> Default for SeriesBuilder<S> {
    fn default() -> Self {
        Self::with_shape(S::default())
    }
}

impl<S: Shape + fmt::Debug> fmt::Debug for SeriesBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesBuilder")
            .field("shape", &self.shape)
            .field("staged", &self.staged.len())
            .finish()
    }
}
