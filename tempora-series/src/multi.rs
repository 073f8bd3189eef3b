// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::builder::SeriesBuilder;
use crate::immutable::Immutable;
use crate::series::{infallible, Series};
use chrono::{DateTime, TimeZone};
use tempora_core::{Entry, EventBag, Grouped, MultiShape, Shape};

/// A series holding an event collection per instant.
///
/// The collection type is any [`EventBag`]; the default `Vec<E>` keeps
/// events in arrival order and admits duplicates. Event-level removal that
/// empties a collection deletes the entry, so an occupied instant always
/// carries at least one event.
pub type MultiEventSeries<E, C = Vec<E>> = Series<Grouped<E, C>>;

/// The immutable form of [`MultiEventSeries`].
pub type ImmutableMultiEventSeries<E, C = Vec<E>> = Immutable<Grouped<E, C>>;

impl<E, C: EventBag<E>> Series<Grouped<E, C>> {
    /// Appends the event to the timestamp's collection, creating the entry
    /// when the instant is vacant. Returns whether the collection grew,
    /// which set-like bags answer with `false` for a duplicate.
    pub fn add<Tz: TimeZone>(&mut self, timestamp: &DateTime<Tz>, event: E) -> bool {
        infallible(self.core.add(timestamp, event))
    }

    /// Appends every event of the batch to the timestamp's collection.
    ///
    /// An empty batch is a no-op; in particular it creates no entry at a
    /// vacant instant.
    pub fn add_all<Tz, I>(&mut self, timestamp: &DateTime<Tz>, events: I)
    where
        Tz: TimeZone,
        I: IntoIterator<Item = E>,
    {
        let payload = infallible(self.core.shape().from_events(events));
        if self.core.shape().event_count(&payload) == 0 {
            return;
        }
        infallible(self.core.merge_payload(timestamp, payload));
    }
}

impl<E, C> Immutable<Grouped<E, C>>
where
    C: EventBag<E> + Clone,
{
    /// A copy of this series with the event appended at the timestamp.
    #[must_use]
    pub fn with<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, event: E) -> Self {
        let mut core = self.core.clone();
        infallible(core.add(timestamp, event));
        Self { core }
    }

    /// A copy of this series with the whole batch appended at the
    /// timestamp. An empty batch yields a plain copy.
    #[must_use]
    pub fn with_all<Tz, I>(&self, timestamp: &DateTime<Tz>, events: I) -> Self
    where
        Tz: TimeZone,
        I: IntoIterator<Item = E>,
    {
        let mut series = Series { core: self.core.clone() };
        series.add_all(timestamp, events);
        series.freeze()
    }

    /// A copy of this series with the whole collection merged at the
    /// timestamp. A vacant instant adopts the collection as its payload;
    /// an empty collection yields a plain copy.
    #[must_use]
    pub fn with_payload<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, payload: C) -> Self {
        let mut core = self.core.clone();
        if core.shape().event_count(&payload) > 0 {
            infallible(core.merge_payload(timestamp, payload));
        }
        Self { core }
    }

    /// A copy of this series with the detached entry merged in at its own
    /// timestamp.
    #[must_use]
    pub fn with_entry(&self, entry: Entry<C>) -> Self {
        let (event_time, payload) = entry.into_parts();
        self.with_payload(&event_time, payload)
    }

    /// A copy of this series with every entry of the collection merged in,
    /// in iteration order.
    #[must_use]
    pub fn with_entries<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<C>>,
    {
        let mut core = self.core.clone();
        for entry in entries {
            let (event_time, payload) = entry.into_parts();
            if core.shape().event_count(&payload) == 0 {
                continue;
            }
            infallible(core.merge_payload(&event_time, payload));
        }
        Self { core }
    }

    /// A copy of this series without one occurrence of the event at the
    /// timestamp. Emptying a collection this way deletes its entry in the
    /// copy.
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

impl<E, C: EventBag<E>> Immutable<Grouped<E, C>> {
    /// Starts a builder for this series type.
    #[must_use]
    pub fn builder() -> SeriesBuilder<Grouped<E, C>> {
        SeriesBuilder::default()
    }
}

impl<E, C: EventBag<E>> SeriesBuilder<Grouped<E, C>> {
    /// Builds the immutable series. Appending adds cannot be rejected, so
    /// the build is direct.
    #[must_use]
    pub fn build(self) -> ImmutableMultiEventSeries<E, C> {
        Immutable {
            core: infallible(self.build_core()),
        }
    }
}
