// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::builder::SeriesBuilder;
use crate::immutable::Immutable;
use crate::series::Series;
use chrono::{DateTime, TimeZone};
use std::cmp::Ordering;
use tempora_core::{Entry, EventOrdering, MultiShape, Result, Sorted, SortedEvents};

/// A series holding an ordered event collection per instant.
///
/// Events at one instant are kept sorted by the configured
/// [`EventOrdering`] and duplicates collapse. Placement can fail: a partial
/// ordering rejects events it cannot compare, and every mutating operation
/// reports that through [`SeriesError`](tempora_core::SeriesError) before
/// anything changes.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_series::SortedMultiEventSeries;
///
/// let mut series = SortedMultiEventSeries::new();
/// let noon = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// series.add(&noon, 30)?;
/// series.add(&noon, 10)?;
/// series.add(&noon, 20)?;
///
/// assert_eq!(series.get(&noon).unwrap().as_slice(), &[10, 20, 30]);
/// # Ok::<(), tempora_core::SeriesError>(())
/// ```
pub type SortedMultiEventSeries<E> = Series<Sorted<E>>;

/// The immutable form of [`SortedMultiEventSeries`].
pub type ImmutableSortedMultiEventSeries<E> = Immutable<Sorted<E>>;

impl<E> Series<Sorted<E>> {
    /// Creates a series ordering events by the given comparison function.
    #[must_use]
    pub fn with_comparator(compare: fn(&E, &E) -> Ordering) -> Self {
        Self::with_shape(Sorted::with_ordering(EventOrdering::by(compare)))
    }

    /// Creates a series with an explicit event ordering.
    #[must_use]
    pub fn with_ordering(ordering: EventOrdering<E>) -> Self {
        Self::with_shape(Sorted::with_ordering(ordering))
    }

    /// Places every event of the batch at the timestamp.
    ///
    /// The batch is validated as a whole before the series is touched; an
    /// empty batch is a no-op and creates no entry.
    ///
    /// # Errors
    /// The first event the ordering cannot place, either among the batch or
    /// among the events already at the instant.
    pub fn add_all<Tz, I>(&mut self, timestamp: &DateTime<Tz>, events: I) -> Result<()>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = E>,
    {
        let payload = self.core.shape().from_events(events)?;
        if payload.is_empty() {
            return Ok(());
        }
        self.core.merge_payload(timestamp, payload)
    }
}

impl<E: Clone> Immutable<Sorted<E>> {
    /// A copy of this series with the event placed at the timestamp.
    ///
    /// # Errors
    /// An event the ordering cannot place; this series is unaffected either
    /// way.
    pub fn with<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, event: E) -> Result<Self> {
        let mut core = self.core.clone();
        core.add(timestamp, event)?;
        Ok(Self { core })
    }

    /// A copy of this series with the whole batch placed at the timestamp.
    ///
    /// # Errors
    /// As for [`add_all`](Series::add_all); this series is unaffected
    /// either way.
    pub fn with_all<Tz, I>(&self, timestamp: &DateTime<Tz>, events: I) -> Result<Self>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = E>,
    {
        let mut series = Series { core: self.core.clone() };
        series.add_all(timestamp, events)?;
        Ok(series.freeze())
    }

    /// A copy of this series with the whole ordered collection merged at
    /// the timestamp. A vacant instant adopts the collection along with
    /// its own ordering; an empty collection yields a plain copy.
    ///
    /// # Errors
    /// The first event of the collection the receiving entry's ordering
    /// cannot place; this series is unaffected either way.
    pub fn with_payload<Tz: TimeZone>(
        &self,
        timestamp: &DateTime<Tz>,
        payload: SortedEvents<E>,
    ) -> Result<Self> {
        let mut core = self.core.clone();
        if !payload.is_empty() {
            core.merge_payload(timestamp, payload)?;
        }
        Ok(Self { core })
    }

    /// A copy of this series with the detached entry merged in at its own
    /// timestamp.
    ///
    /// # Errors
    /// As for [`with_payload`](Self::with_payload).
    pub fn with_entry(&self, entry: Entry<SortedEvents<E>>) -> Result<Self> {
        let (event_time, payload) = entry.into_parts();
        self.with_payload(&event_time, payload)
    }

    /// A copy of this series with every entry of the collection merged in,
    /// in iteration order.
    ///
    /// # Errors
    /// The first event any receiving entry's ordering cannot place; the
    /// partially built copy is abandoned and this series is unaffected.
    pub fn with_entries<I>(&self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry<SortedEvents<E>>>,
    {
        let mut core = self.core.clone();
        for entry in entries {
            let (event_time, payload) = entry.into_parts();
            if payload.is_empty() {
                continue;
            }
            core.merge_payload(&event_time, payload)?;
        }
        Ok(Self { core })
    }

    /// A copy of this series without the event at the timestamp. Emptying
    /// a collection this way deletes its entry in the copy.
    #[must_use]
    pub fn without_event<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, event: &E) -> Self {
        let mut core = self.core.clone();
        core.remove_event(timestamp, event);
        Self { core }
    }

    /// A copy of this series without any entry at the timestamp.
    #[must_use]
    pub fn without<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> Self {
        let mut core = self.core.clone();
        core.remove_entry(timestamp);
        Self { core }
    }
}

impl<E: PartialOrd> Immutable<Sorted<E>> {
    /// Starts a builder ordering events by their natural partial order.
    #[must_use]
    pub fn builder() -> SeriesBuilder<Sorted<E>> {
        SeriesBuilder::default()
    }
}

impl<E> Immutable<Sorted<E>> {
    /// Starts a builder with an explicit event ordering.
    #[must_use]
    pub fn builder_with_ordering(ordering: EventOrdering<E>) -> SeriesBuilder<Sorted<E>> {
        SeriesBuilder::with_shape(Sorted::with_ordering(ordering))
    }
}

impl<E> SeriesBuilder<Sorted<E>> {
    /// Builds the immutable series, replaying the staged operations in
    /// order.
    ///
    /// # Errors
    /// The first staged event the ordering cannot place.
    pub fn build(self) -> Result<ImmutableSortedMultiEventSeries<E>> {
        Ok(Immutable {
            core: self.build_core()?,
        })
    }
}
