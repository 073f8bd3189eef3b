// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::immutable::Immutable;
use chrono::{DateTime, TimeZone};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};
use tempora_core::{Entry, IntoIter, Iter, SeriesCore, Shape};

/// Consumes a result whose error type has no values.
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A mutable event series: the core engine plus the shape-specific surface.
///
/// The series dereferences to [`SeriesCore`], so every engine operation -
/// lookups, iteration, range selection - is available directly. The type
/// aliases pick the value shape:
///
/// * [`EventSeries`](crate::EventSeries) - one event per instant, adds
///   displace
/// * [`MultiEventSeries`](crate::MultiEventSeries) - an event collection per
///   instant, adds append
/// * [`SortedMultiEventSeries`](crate::SortedMultiEventSeries) - an ordered
///   event collection per instant, adds place and can be rejected
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_series::EventSeries;
///
/// let mut series = EventSeries::new();
/// series.add(&Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(), "close");
/// series.add(&Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(), "open");
///
/// let ordered: Vec<_> = series.iter().map(|entry| *entry.payload()).collect();
/// assert_eq!(ordered, vec!["open", "close"]);
/// ```
pub struct Series<S: Shape> {
    pub(crate) core: SeriesCore<S>,
}

impl<S: Shape> Series<S> {
    /// Creates an empty series driven by the given shape policy.
    #[must_use]
    pub fn with_shape(shape: S) -> Self {
        Self {
            core: SeriesCore::with_shape(shape),
        }
    }

    /// Removes the entry at the timestamp's instant, returning its payload.
    pub fn remove<Tz: TimeZone>(&mut self, timestamp: &DateTime<Tz>) -> Option<S::Payload> {
        self.core.remove_entry(timestamp).map(Entry::into_payload)
    }

    /// Freezes this series into its immutable form.
    ///
    /// Moves the storage across without copying; thaw the result to get a
    /// mutable series back.
    #[must_use]
    pub fn freeze(self) -> Immutable<S> {
        Immutable { core: self.core }
    }
}

impl<S: Shape + Default> Series<S> {
    /// Creates an empty series with the shape's default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shape(S::default())
    }

    /// Builds a series from detached entries, keyed by each entry's instant.
    ///
    /// Entries at the same instant displace one another; the last one in
    /// iteration order survives.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<S::Payload>>,
    {
        let mut series = Self::new();
        for entry in entries {
            series.core.insert_entry(entry);
        }
        series
    }
}

impl<S: Shape> Deref for Series<S> {
    type Target = SeriesCore<S>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<S: Shape> DerefMut for Series<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.core
    }
}

impl<S: Shape + Default> Default for Series<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape + Clone> Clone for Series<S>
where
    S::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<S: Shape + fmt::Debug> fmt::Debug for Series<S>
where
    S::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Series").field(&self.core).finish()
    }
}

impl<S: Shape> Display for Series<S>
where
    S::Payload: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.core, f)
    }
}

impl<S, Tz> Extend<(DateTime<Tz>, S::Event)> for Series<S>
where
    S: Shape<Error = Infallible>,
    Tz: TimeZone,
{
    fn extend<I: IntoIterator<Item = (DateTime<Tz>, S::Event)>>(&mut self, iter: I) {
        for (timestamp, event) in iter {
            infallible(self.core.add(&timestamp, event));
        }
    }
}

impl<S, Tz> FromIterator<(DateTime<Tz>, S::Event)> for Series<S>
where
    S: Shape<Error = Infallible> + Default,
    Tz: TimeZone,
{
    fn from_iter<I: IntoIterator<Item = (DateTime<Tz>, S::Event)>>(iter: I) -> Self {
        let mut series = Self::new();
        series.extend(iter);
        series
    }
}

impl<'a, S: Shape> IntoIterator for &'a Series<S> {
    type Item = &'a Entry<S::Payload>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.iter()
    }
}

impl<S: Shape> IntoIterator for Series<S> {
    type Item = Entry<S::Payload>;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.into_iter()
    }
}
