// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series::Series;
use chrono::{DateTime, TimeZone};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::ops::Deref;
use tempora_core::{Entry, IntoIter, Iter, SeriesCore, Shape};

/// An immutable event series.
///
/// Immutability is structural: the type dereferences to the read-only side
/// of [`SeriesCore`] and exposes no mutating method, so there is nothing to
/// lock and nothing a holder can corrupt. Derived series are produced by
/// the shape-specific `with`/`without` family, which clones the storage and
/// applies the change to the copy; the original is never touched, also when
/// the change is rejected.
///
/// Conversion to and from the mutable [`Series`] moves the storage in O(1).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_series::ImmutableEventSeries;
///
/// let series = ImmutableEventSeries::builder()
///     .with(&Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(), "open")
///     .with(&Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap(), "close")
///     .build();
///
/// let extended = series.with(&Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(), "lunch");
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(extended.len(), 3);
/// ```
pub struct Immutable<S: Shape> {
    pub(crate) core: SeriesCore<S>,
}

impl<S: Shape> Immutable<S> {
    /// Creates an empty immutable series driven by the given shape policy.
    #[must_use]
    pub fn with_shape(shape: S) -> Self {
        Self {
            core: SeriesCore::with_shape(shape),
        }
    }

    /// Thaws this series back into its mutable form.
    ///
    /// Moves the storage across without copying. The immutable value is
    /// consumed, so no frozen view of the now-mutable storage survives.
    #[must_use]
    pub fn thaw(self) -> Series<S> {
        Series { core: self.core }
    }
}

impl<S: Shape + Default> Immutable<S> {
    /// Creates an empty immutable series with the shape's default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shape(S::default())
    }

    /// Builds an immutable series from detached entries, keyed by each
    /// entry's instant. Later entries displace earlier ones at the same
    /// instant.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry<S::Payload>>,
    {
        Series::from_entries(entries).freeze()
    }
}

impl<S: Shape> Deref for Immutable<S> {
    type Target = SeriesCore<S>;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

impl<S: Shape> From<Series<S>> for Immutable<S> {
    fn from(series: Series<S>) -> Self {
        series.freeze()
    }
}

impl<S: Shape> From<Immutable<S>> for Series<S> {
    fn from(series: Immutable<S>) -> Self {
        series.thaw()
    }
}

impl<S: Shape + Default> Default for Immutable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape + Clone> Clone for Immutable<S>
where
    S::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<S: Shape + fmt::Debug> fmt::Debug for Immutable<S>
where
    S::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Immutable").field(&self.core).finish()
    }
}

impl<S: Shape> Display for Immutable<S>
where
    S::Payload: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.core, f)
    }
}

impl<S, Tz> FromIterator<(DateTime<Tz>, S::Event)> for Immutable<S>
where
    S: Shape<Error = Infallible> + Default,
    Tz: TimeZone,
{
    fn from_iter<I: IntoIterator<Item = (DateTime<Tz>, S::Event)>>(iter: I) -> Self {
        iter.into_iter().collect::<Series<S>>().freeze()
    }
}

impl<'a, S: Shape> IntoIterator for &'a Immutable<S> {
    type Item = &'a Entry<S::Payload>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.iter()
    }
}

impl<S: Shape> IntoIterator for Immutable<S> {
    type Item = Entry<S::Payload>;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.core.into_iter()
    }
}
