// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::builder::SeriesBuilder;
use crate::immutable::Immutable;
use crate::series::{infallible, Series};
use chrono::{DateTime, TimeZone};
use tempora_core::{Entry, Single};

/// A series holding one event per instant.
pub type EventSeries<E> = Series<Single<E>>;

/// The immutable form of [`EventSeries`].
pub type ImmutableEventSeries<E> = Immutable<Single<E>>;

impl<E> Series<Single<E>> {
    /// Adds the event at the timestamp, returning the displaced event when
    /// the instant was already occupied.
    pub fn add<Tz: TimeZone>(&mut self, timestamp: &DateTime<Tz>, event: E) -> Option<E> {
        self.core.put(timestamp, event).map(Entry::into_payload)
    }
}

impl<E: Clone> Immutable<Single<E>> {
    /// A copy of this series with the event added at the timestamp. An
    /// occupied instant has its event displaced in the copy.
    #[must_use]
    pub fn with<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, event: E) -> Self {
        let mut core = self.core.clone();
        core.put(timestamp, event);
        Self { core }
    }

    /// A copy of this series with the detached entry added at its own
    /// timestamp, displacing whatever occupied that instant.
    #[must_use]
    pub fn with_entry(&self, entry: Entry<E>) -> Self {
        let mut core = self.core.clone();
        core.insert_entry(entry);
        Self { core }
    }

    /// A copy of this series with every entry of the collection added, in
    /// iteration order.
    #[must_use]
    pub fn with_entries<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<E>>,
    {
        let mut core = self.core.clone();
        for entry in entries {
            core.insert_entry(entry);
        }
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

impl<E> Immutable<Single<E>> {
    /// Starts a builder for this series type.
    #[must_use]
    pub fn builder() -> SeriesBuilder<Single<E>> {
        SeriesBuilder::default()
    }
}

impl<E> SeriesBuilder<Single<E>> {
    /// Builds the immutable series. Single-event adds cannot be rejected,
    /// so the build is direct.
    #[must_use]
    pub fn build(self) -> ImmutableEventSeries<E> {
        Immutable {
            core: infallible(self.build_core()),
        }
    }
}
