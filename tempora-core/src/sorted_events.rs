// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::series_error::{Result, SeriesError};
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// The ordering configuration of a strictly ordered payload.
///
/// Either the natural ordering of the event type, which may be partial and
/// can therefore reject values, or a caller-supplied total comparator, which
/// places every value.
///
/// Comparators are plain function pointers: ordering configuration is
/// stateless and fixed at construction, and this keeps the configuration
/// `Copy` and free of lifetime bounds.
pub struct EventOrdering<E> {
    kind: Kind<E>,
}

enum Kind<E> {
    Partial(fn(&E, &E) -> Option<Ordering>),
    Total(fn(&E, &E) -> Ordering),
}

impl<E> EventOrdering<E> {
    /// The natural ordering of `E`.
    ///
    /// Partial orders are accepted; a value the ordering cannot place (such
    /// as a floating-point NaN) is rejected at insertion time with
    /// [`SeriesError::IncomparableEvent`].
    #[must_use]
    pub fn natural() -> Self
    where
        E: PartialOrd,
    {
        Self {
            kind: Kind::Partial(<E as PartialOrd>::partial_cmp),
        }
    }

    /// A total comparator; every value can be placed.
    #[must_use]
    pub fn by(compare: fn(&E, &E) -> Ordering) -> Self {
        Self {
            kind: Kind::Total(compare),
        }
    }

    /// Compares two events under this ordering.
    ///
    /// # Errors
    /// Returns [`SeriesError::IncomparableEvent`] when a partial ordering
    /// has no answer for the pair.
    pub fn try_compare(&self, left: &E, right: &E) -> Result<Ordering> {
        match self.kind {
            Kind::Partial(compare) => compare(left, right).ok_or_else(|| {
                SeriesError::incomparable_event(
                    "the configured ordering cannot place the value among its peers",
                )
            }),
            Kind::Total(compare) => Ok(compare(left, right)),
        }
    }
}

impl<E> Clone for EventOrdering<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EventOrdering<E> {}

impl<E> Clone for Kind<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Kind<E> {}

impl<E> fmt::Debug for EventOrdering<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Partial(_) => f.write_str("EventOrdering(natural)"),
            Kind::Total(_) => f.write_str("EventOrdering(comparator)"),
        }
    }
}

/// A strictly ordered, duplicate-free event payload.
///
/// The multi-value payload of a sorted series: events are kept ascending
/// under the configured [`EventOrdering`] and ordering-equal duplicates
/// collapse. The read surface is the full story - the only mutators are
/// [`try_insert`](Self::try_insert) and [`remove`](Self::remove), both of
/// which preserve the invariant, so a view of this type can never corrupt
/// the series that handed it out.
///
/// # Examples
///
/// ```
/// use tempora_core::SortedEvents;
///
/// let mut events = SortedEvents::natural();
/// events.try_insert(30)?;
/// events.try_insert(10)?;
/// events.try_insert(20)?;
///
/// assert_eq!(events.as_slice(), &[10, 20, 30]);
/// # Ok::<(), tempora_core::SeriesError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SortedEvents<E> {
    events: Vec<E>,
    ordering: EventOrdering<E>,
}

impl<E> SortedEvents<E> {
    /// Creates an empty payload under the given ordering.
    #[must_use]
    pub fn new(ordering: EventOrdering<E>) -> Self {
        Self {
            events: Vec::new(),
            ordering,
        }
    }

    /// Creates an empty payload under the natural ordering of `E`.
    #[must_use]
    pub fn natural() -> Self
    where
        E: PartialOrd,
    {
        Self::new(EventOrdering::natural())
    }

    /// The ordering this payload was built with.
    #[must_use]
    pub fn ordering(&self) -> EventOrdering<E> {
        self.ordering
    }

    /// Inserts an event at its ordered position.
    ///
    /// Returns `Ok(true)` when the event was added and `Ok(false)` for an
    /// ordering-equal duplicate, in which case the stored event is retained
    /// and the incoming one dropped.
    ///
    /// The first event is checked for self-comparability, so a value the
    /// ordering cannot place is rejected even into an empty payload.
    ///
    /// # Errors
    /// Returns [`SeriesError::IncomparableEvent`] when the ordering cannot
    /// place the event; the payload is unchanged in that case.
    pub fn try_insert(&mut self, event: E) -> Result<bool> {
        if self.events.is_empty() {
            self.ordering.try_compare(&event, &event)?;
            self.events.push(event);
            return Ok(true);
        }

        let mut low = 0;
        let mut high = self.events.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.ordering.try_compare(&event, &self.events[middle])? {
                Ordering::Less => high = middle,
                Ordering::Greater => low = middle + 1,
                Ordering::Equal => return Ok(false),
            }
        }
        self.events.insert(low, event);
        Ok(true)
    }

    /// Removes the event ordering-equal to the given one, reporting whether
    /// it was present.
    ///
    /// A value the ordering cannot place is by construction absent, so the
    /// answer for it is `false` rather than an error.
    pub fn remove(&mut self, event: &E) -> bool {
        match self.position(event) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an ordering-equal event is present.
    ///
    /// As with [`remove`](Self::remove), an unplaceable value is reported
    /// absent.
    #[must_use]
    pub fn contains(&self, event: &E) -> bool {
        self.position(event).is_some()
    }

    /// Number of contained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the payload holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The smallest event under the configured ordering.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.events.first()
    }

    /// The largest event under the configured ordering.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    /// Iterates the events in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    /// The events as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    /// Consumes the payload and returns the events in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.events
    }

    fn position(&self, event: &E) -> Option<usize> {
        let mut low = 0;
        let mut high = self.events.len();
        while low < high {
            let middle = low + (high - low) / 2;
            match self.ordering.try_compare(event, &self.events[middle]) {
                Ok(Ordering::Less) => high = middle,
                Ok(Ordering::Greater) => low = middle + 1,
                Ok(Ordering::Equal) => return Some(middle),
                Err(_) => return None,
            }
        }
        None
    }
}

impl<E: PartialEq> PartialEq for SortedEvents<E> {
    fn eq(&self, other: &Self) -> bool {
        // Two payloads are equal by content; the ordering is configuration.
        self.events == other.events
    }
}

impl<E: Eq> Eq for SortedEvents<E> {}

impl<E> IntoIterator for SortedEvents<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a SortedEvents<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Display> Display for SortedEvents<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, event) in self.events.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{event}")?;
        }
        f.write_str("]")
    }
}
