// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::entry::Entry;
use crate::iter::{EventTimes, Events, IntoIter, Iter, RangeIter};
use crate::shape::{MultiShape, Shape};
use crate::time::{to_event_time, to_instant, Instant};
use chrono::{DateTime, TimeZone};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::ops::Bound;

// Conditional logging based on tracing feature
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {
        // No-op when tracing is disabled
    };
}

/// The ordered store engine: a sorted association from instant to entry.
///
/// Every series variant is this one engine under a different [`Shape`]
/// policy; there are no parallel implementations. The engine maintains the
/// store invariants:
///
/// * at most one entry per distinct instant - adding at an occupied instant
///   augments that entry's payload through the shape, never duplicates it
/// * [`len`](Self::len) counts distinct instants, not events
/// * iteration is ascending by instant, and the descending traversal is the
///   exact reverse
/// * everything handed out is a shared borrow, a detached clone, or a view
///   type without mutators, so no returned view can corrupt the store
///
/// Timestamps arrive in any chrono time zone and are reduced to instants
/// for keying; the zoned form survives on the entry for display, following
/// the most recent add at that instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tempora_core::{SeriesCore, Single};
///
/// let mut store: SeriesCore<Single<&str>> = SeriesCore::default();
/// store.put(&Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(), "second");
/// store.put(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), "first");
///
/// let payloads: Vec<_> = store.iter().map(|entry| *entry.payload()).collect();
/// assert_eq!(payloads, vec!["first", "second"]);
/// ```
pub struct SeriesCore<S: Shape> {
    shape: S,
    entries: BTreeMap<Instant, Entry<S::Payload>>,
}

impl<S: Shape> SeriesCore<S> {
    /// Creates an empty store driven by the given shape policy.
    #[must_use]
    pub fn with_shape(shape: S) -> Self {
        Self {
            shape,
            entries: BTreeMap::new(),
        }
    }

    /// The shape policy driving this store.
    #[must_use]
    pub const fn shape(&self) -> &S {
        &self.shape
    }

    /// Adds one event at the timestamp's instant.
    ///
    /// A vacant instant gets a fresh entry; an occupied one has the event
    /// folded into its payload by the shape, with the stored zoned timestamp
    /// following this add. Returns whether the store's event count grew.
    ///
    /// # Errors
    /// Shapes that validate (the sorted one) reject an unplaceable event
    /// before anything changes; shapes with `Error = Infallible` never fail.
    pub fn add<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
        event: S::Event,
    ) -> Result<bool, S::Error> {
        let instant = to_instant(timestamp);
        match self.entries.entry(instant) {
            btree_map::Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                let grew = self.shape.merge_event(entry.payload_mut(), event)?;
                entry.set_event_time(to_event_time(timestamp));
                trace!(%instant, grew, "event merged into existing entry");
                Ok(grew)
            }
            btree_map::Entry::Vacant(vacant) => {
                let payload = self.shape.from_event(event)?;
                vacant.insert(Entry::new(timestamp, payload));
                trace!(%instant, "entry created");
                Ok(true)
            }
        }
    }

    /// Folds a whole payload into the timestamp's entry, creating the entry
    /// when the instant is vacant.
    ///
    /// # Errors
    /// As for [`add`](Self::add). A mid-merge rejection leaves the events
    /// accepted before it in place; under a total ordering no rejection is
    /// possible at all.
    pub fn merge_payload<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
        incoming: S::Payload,
    ) -> Result<(), S::Error> {
        let instant = to_instant(timestamp);
        match self.entries.entry(instant) {
            btree_map::Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                self.shape.merge_payload(entry.payload_mut(), incoming)?;
                entry.set_event_time(to_event_time(timestamp));
                trace!(%instant, "payload merged into existing entry");
                Ok(())
            }
            btree_map::Entry::Vacant(vacant) => {
                vacant.insert(Entry::new(timestamp, incoming));
                trace!(%instant, "entry created from payload");
                Ok(())
            }
        }
    }

    /// Replaces the timestamp's payload wholesale, returning the displaced
    /// entry if the instant was occupied.
    pub fn put<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
        payload: S::Payload,
    ) -> Option<Entry<S::Payload>> {
        let entry = Entry::new(timestamp, payload);
        trace!(instant = %entry.instant(), "payload replaced");
        self.entries.insert(entry.instant(), entry)
    }

    /// Inserts a detached entry at its own instant, returning the displaced
    /// entry if that instant was occupied.
    pub fn insert_entry(&mut self, entry: Entry<S::Payload>) -> Option<Entry<S::Payload>> {
        self.entries.insert(entry.instant(), entry)
    }

    /// The payload at the timestamp's instant, if any. Never mutates.
    #[must_use]
    pub fn get<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> Option<&S::Payload> {
        self.entries
            .get(&to_instant(timestamp))
            .map(Entry::payload)
    }

    /// The full entry at the timestamp's instant, if any.
    #[must_use]
    pub fn entry<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> Option<&Entry<S::Payload>> {
        self.entries.get(&to_instant(timestamp))
    }

    /// Mutable payload access for augment-style operations.
    ///
    /// Emptying a multi-value payload through this does not remove the
    /// entry; event-level removal on the series types handles that rule.
    pub fn payload_mut<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
    ) -> Option<&mut S::Payload> {
        self.entries
            .get_mut(&to_instant(timestamp))
            .map(Entry::payload_mut)
    }

    /// Removes and returns the whole entry at the timestamp's instant.
    pub fn remove_entry<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
    ) -> Option<Entry<S::Payload>> {
        let instant = to_instant(timestamp);
        let removed = self.entries.remove(&instant);
        if removed.is_some() {
            trace!(%instant, "entry removed");
        }
        removed
    }

    /// Whether an entry exists at the timestamp's instant.
    #[must_use]
    pub fn contains<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        self.entries.contains_key(&to_instant(timestamp))
    }

    /// Number of entries, which is the number of distinct instants.
    ///
    /// Multi-value payloads contribute one however many events they hold;
    /// see [`event_count`](Self::event_count) for the event total.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of events across all entries.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.entries
            .values()
            .map(|entry| self.shape.event_count(entry.payload()))
            .sum()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        trace!(discarded = self.entries.len(), "store cleared");
        self.entries.clear();
    }

    /// The entry at the smallest instant.
    #[must_use]
    pub fn first(&self) -> Option<&Entry<S::Payload>> {
        self.entries.first_key_value().map(|(_, entry)| entry)
    }

    /// The entry at the largest instant.
    #[must_use]
    pub fn last(&self) -> Option<&Entry<S::Payload>> {
        self.entries.last_key_value().map(|(_, entry)| entry)
    }

    /// Lazy ascending iterator over the entries; `.rev()` descends.
    ///
    /// Borrows the store, so mutation while iterating is a compile error
    /// rather than a runtime hazard.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(self.entries.values())
    }

    /// Detached ascending snapshot of the entries.
    ///
    /// The snapshot is an independent clone: later store mutation leaves it
    /// untouched. An empty store yields an empty vector.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry<S::Payload>>
    where
        S::Payload: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Ascending iterator over the distinct zoned timestamps.
    pub fn event_times(&self) -> EventTimes<'_, S> {
        EventTimes::new(self.iter())
    }

    /// Flattening ascending iterator over every event.
    pub fn events(&self) -> Events<'_, S> {
        Events::new(&self.shape, self.iter())
    }

    /// Entries with instants between `from` and `to`, bound inclusivity per
    /// the flags.
    ///
    /// # Panics
    /// Panics when `from` is after `to` once both are reduced to instants,
    /// matching the underlying sorted map's range contract. Equal bounds
    /// are fine and select either the single entry at that instant (both
    /// flags inclusive) or nothing.
    pub fn entries_between<TzFrom: TimeZone, TzTo: TimeZone>(
        &self,
        from: &DateTime<TzFrom>,
        from_inclusive: bool,
        to: &DateTime<TzTo>,
        to_inclusive: bool,
    ) -> RangeIter<'_, S> {
        let from_key = to_instant(from);
        let to_key = to_instant(to);
        assert!(
            from_key <= to_key,
            "entries_between: `from` must not be after `to`"
        );
        let inner = if from_key == to_key && !from_inclusive && !to_inclusive {
            // An open range over one instant is empty; the sorted map
            // rejects the excluded-excluded encoding of it.
            self.entries.range(from_key..from_key)
        } else {
            self.entries
                .range((bound(from_key, from_inclusive), bound(to_key, to_inclusive)))
        };
        RangeIter::new(inner)
    }

    /// Entries strictly between `from` and `to` (both bounds exclusive).
    ///
    /// # Panics
    /// As for [`entries_between`](Self::entries_between).
    pub fn entries_within<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        to: &DateTime<Tz>,
    ) -> RangeIter<'_, S> {
        self.entries_between(from, false, to, false)
    }

    /// Entries up to `to`, inclusivity per the flag.
    pub fn entries_head<Tz: TimeZone>(
        &self,
        to: &DateTime<Tz>,
        inclusive: bool,
    ) -> RangeIter<'_, S> {
        RangeIter::new(
            self.entries
                .range((Bound::Unbounded, bound(to_instant(to), inclusive))),
        )
    }

    /// Entries strictly before `to`.
    pub fn entries_before<Tz: TimeZone>(&self, to: &DateTime<Tz>) -> RangeIter<'_, S> {
        self.entries_head(to, false)
    }

    /// Entries from `from` on, inclusivity per the flag.
    pub fn entries_tail<Tz: TimeZone>(
        &self,
        from: &DateTime<Tz>,
        inclusive: bool,
    ) -> RangeIter<'_, S> {
        RangeIter::new(
            self.entries
                .range((bound(to_instant(from), inclusive), Bound::Unbounded)),
        )
    }

    /// Entries strictly after `from`.
    pub fn entries_after<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> RangeIter<'_, S> {
        self.entries_tail(from, false)
    }
}

impl<S: MultiShape> SeriesCore<S> {
    /// Removes one event occurrence from the timestamp's entry, reporting
    /// whether anything was removed.
    ///
    /// An entry whose last event goes this way is deleted outright, so an
    /// occupied instant always carries at least one event.
    pub fn remove_event<Tz: TimeZone>(
        &mut self,
        timestamp: &DateTime<Tz>,
        event: &S::Event,
    ) -> bool {
        let instant = to_instant(timestamp);
        let (removed, emptied) = match self.entries.get_mut(&instant) {
            Some(entry) => {
                let removed = self.shape.remove_event(entry.payload_mut(), event);
                let emptied = removed && self.shape.event_count(entry.payload()) == 0;
                (removed, emptied)
            }
            None => (false, false),
        };
        if emptied {
            self.entries.remove(&instant);
            trace!(%instant, "entry emptied and removed");
        }
        removed
    }

    /// Whether the timestamp's entry holds the given event.
    #[must_use]
    pub fn contains_event<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, event: &S::Event) -> bool {
        self.entries
            .get(&to_instant(timestamp))
            .is_some_and(|entry| self.shape.contains_event(entry.payload(), event))
    }
}

const fn bound(instant: Instant, inclusive: bool) -> Bound<Instant> {
    if inclusive {
        Bound::Included(instant)
    } else {
        Bound::Excluded(instant)
    }
}

impl<S: Shape + Default> Default for SeriesCore<S> {
    fn default() -> Self {
        Self::with_shape(S::default())
    }
}

impl<S: Shape + Clone> Clone for SeriesCore<S>
where
    S::Payload: Clone,
{
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<S: Shape + fmt::Debug> fmt::Debug for SeriesCore<S>
where
    S::Payload: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesCore")
            .field("shape", &self.shape)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<S: Shape> Display for SeriesCore<S>
where
    S::Payload: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Series[")?;
        for (index, entry) in self.entries.values().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl<'a, S: Shape> IntoIterator for &'a SeriesCore<S> {
    type Item = &'a Entry<S::Payload>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Shape> IntoIterator for SeriesCore<S> {
    type Item = Entry<S::Payload>;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_values())
    }
}
