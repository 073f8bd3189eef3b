// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::event_bag::EventBag;
use crate::series_error::SeriesError;
use crate::sorted_events::{EventOrdering, SortedEvents};
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// The value-shape policy of a series.
///
/// One store engine serves every series variant; what varies is the payload
/// kept per instant and how additional events fold into it. A `Shape`
/// captures exactly that variation, so the variants are configurations of
/// the engine rather than parallel implementations:
///
/// * [`Single`] - one event per instant, adding overwrites
/// * [`Grouped`] - an [`EventBag`] of events per instant, adding merges
/// * [`Sorted`] - a [`SortedEvents`] payload, adding merges with validation
///
/// `Error` is [`Infallible`] for the shapes whose merges always succeed,
/// which lets their public surface stay `Result`-free without masking any
/// failure path.
pub trait Shape {
    /// Individual event value.
    type Event;
    /// Per-instant payload stored in an entry.
    type Payload;
    /// Failure mode of this shape's merges; [`Infallible`] when none exists.
    type Error;
    /// Borrowing iterator over a payload's events.
    type Events<'a>: Iterator<Item = &'a Self::Event>
    where
        Self: 'a,
        Self::Event: 'a,
        Self::Payload: 'a;

    /// Creates the payload for a brand-new entry from its first event.
    fn from_event(&self, event: Self::Event) -> Result<Self::Payload, Self::Error>;

    /// Folds one more event into an existing payload, reporting whether the
    /// payload grew.
    ///
    /// Validation, where the shape has any, happens before the payload is
    /// touched.
    fn merge_event(
        &self,
        payload: &mut Self::Payload,
        event: Self::Event,
    ) -> Result<bool, Self::Error>;

    /// Folds a whole payload into an existing one, event by event.
    fn merge_payload(
        &self,
        payload: &mut Self::Payload,
        incoming: Self::Payload,
    ) -> Result<(), Self::Error>;

    /// Iterates a payload's events in the payload's own order.
    fn events<'a>(&self, payload: &'a Self::Payload) -> Self::Events<'a>;

    /// Number of events a payload holds.
    fn event_count(&self, payload: &Self::Payload) -> usize;
}

/// Event-level operations for the shapes whose payload holds several events.
///
/// [`Single`] deliberately does not implement this: removing or testing for
/// one event inside a one-event payload is entry-level work.
pub trait MultiShape: Shape {
    /// Builds a payload from a collection of events, applying the same merge
    /// rules as repeated [`Shape::merge_event`] calls.
    fn from_events<I>(&self, events: I) -> Result<Self::Payload, Self::Error>
    where
        I: IntoIterator<Item = Self::Event>;

    /// Removes one occurrence of the event from the payload.
    fn remove_event(&self, payload: &mut Self::Payload, event: &Self::Event) -> bool;

    /// Whether the payload contains the event.
    fn contains_event(&self, payload: &Self::Payload, event: &Self::Event) -> bool;
}

/// One event per instant; adding at an occupied instant overwrites.
pub struct Single<E> {
    marker: PhantomData<E>,
}

impl<E> Default for Single<E> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<E> Clone for Single<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Single<E> {}

impl<E> fmt::Debug for Single<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Single")
    }
}

impl<E> Shape for Single<E> {
    type Event = E;
    type Payload = E;
    type Error = Infallible;
    type Events<'a>
        = std::iter::Once<&'a E>
    where
        Self: 'a,
        E: 'a;

    fn from_event(&self, event: E) -> Result<E, Infallible> {
        Ok(event)
    }

    fn merge_event(&self, payload: &mut E, event: E) -> Result<bool, Infallible> {
        *payload = event;
        Ok(true)
    }

    fn merge_payload(&self, payload: &mut E, incoming: E) -> Result<(), Infallible> {
        *payload = incoming;
        Ok(())
    }

    fn events<'a>(&self, payload: &'a E) -> Self::Events<'a> {
        std::iter::once(payload)
    }

    fn event_count(&self, _payload: &E) -> usize {
        1
    }
}

/// Several events per instant, collected in a caller-selected [`EventBag`].
///
/// The bag type defaults to [`Vec`], the insertion-ordered list.
pub struct Grouped<E, C = Vec<E>> {
    marker: PhantomData<(E, C)>,
}

impl<E, C> Default for Grouped<E, C> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<E, C> Clone for Grouped<E, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, C> Copy for Grouped<E, C> {}

impl<E, C> fmt::Debug for Grouped<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Grouped")
    }
}

impl<E, C: EventBag<E>> Shape for Grouped<E, C> {
    type Event = E;
    type Payload = C;
    type Error = Infallible;
    type Events<'a>
        = C::Iter<'a>
    where
        Self: 'a,
        E: 'a,
        C: 'a;

    fn from_event(&self, event: E) -> Result<C, Infallible> {
        let mut bag = C::empty();
        bag.insert(event);
        Ok(bag)
    }

    fn merge_event(&self, payload: &mut C, event: E) -> Result<bool, Infallible> {
        Ok(payload.insert(event))
    }

    fn merge_payload(&self, payload: &mut C, incoming: C) -> Result<(), Infallible> {
        for event in incoming {
            payload.insert(event);
        }
        Ok(())
    }

    fn events<'a>(&self, payload: &'a C) -> Self::Events<'a> {
        payload.iter()
    }

    fn event_count(&self, payload: &C) -> usize {
        payload.len()
    }
}

impl<E, C: EventBag<E>> MultiShape for Grouped<E, C> {
    fn from_events<I>(&self, events: I) -> Result<C, Infallible>
    where
        I: IntoIterator<Item = E>,
    {
        let mut bag = C::empty();
        for event in events {
            bag.insert(event);
        }
        Ok(bag)
    }

    fn remove_event(&self, payload: &mut C, event: &E) -> bool {
        payload.remove(event)
    }

    fn contains_event(&self, payload: &C, event: &E) -> bool {
        payload.contains(event)
    }
}

/// Several events per instant, kept strictly ordered and duplicate-free.
///
/// Carries the [`EventOrdering`] every payload is built with. Merging
/// validates that the ordering can place each incoming event before anything
/// is stored.
pub struct Sorted<E> {
    ordering: EventOrdering<E>,
}

impl<E> Sorted<E> {
    /// A sorted shape under the given ordering.
    #[must_use]
    pub fn with_ordering(ordering: EventOrdering<E>) -> Self {
        Self { ordering }
    }

    /// A sorted shape under the natural ordering of `E`.
    #[must_use]
    pub fn natural() -> Self
    where
        E: PartialOrd,
    {
        Self::with_ordering(EventOrdering::natural())
    }

    /// The ordering payloads of this shape are built with.
    #[must_use]
    pub fn ordering(&self) -> EventOrdering<E> {
        self.ordering
    }
}

impl<E: PartialOrd> Default for Sorted<E> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<E> Clone for Sorted<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Sorted<E> {}

impl<E> fmt::Debug for Sorted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sorted({:?})", self.ordering)
    }
}

impl<E> Shape for Sorted<E> {
    type Event = E;
    type Payload = SortedEvents<E>;
    type Error = SeriesError;
    type Events<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn from_event(&self, event: E) -> Result<SortedEvents<E>, SeriesError> {
        let mut events = SortedEvents::new(self.ordering);
        events.try_insert(event)?;
        Ok(events)
    }

    fn merge_event(
        &self,
        payload: &mut SortedEvents<E>,
        event: E,
    ) -> Result<bool, SeriesError> {
        payload.try_insert(event)
    }

    fn merge_payload(
        &self,
        payload: &mut SortedEvents<E>,
        incoming: SortedEvents<E>,
    ) -> Result<(), SeriesError> {
        for event in incoming {
            payload.try_insert(event)?;
        }
        Ok(())
    }

    fn events<'a>(&self, payload: &'a SortedEvents<E>) -> Self::Events<'a> {
        payload.iter()
    }

    fn event_count(&self, payload: &SortedEvents<E>) -> usize {
        payload.len()
    }
}

impl<E> MultiShape for Sorted<E> {
    fn from_events<I>(&self, events: I) -> Result<SortedEvents<E>, SeriesError>
    where
        I: IntoIterator<Item = E>,
    {
        let mut payload = SortedEvents::new(self.ordering);
        for event in events {
            payload.try_insert(event)?;
        }
        Ok(payload)
    }

    fn remove_event(&self, payload: &mut SortedEvents<E>, event: &E) -> bool {
        payload.remove(event)
    }

    fn contains_event(&self, payload: &SortedEvents<E>, event: &E) -> bool {
        payload.contains(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_shape_overwrites_on_merge() {
        let shape: Single<i32> = Single::default();
        let mut payload = shape.from_event(1).unwrap();

        assert!(shape.merge_event(&mut payload, 2).unwrap());
        assert_eq!(payload, 2);
        assert_eq!(shape.event_count(&payload), 1);
    }

    #[test]
    fn grouped_shape_reports_set_growth() {
        let shape: Grouped<i32, HashSet<i32>> = Grouped::default();
        let mut payload = shape.from_event(7).unwrap();

        assert!(!shape.merge_event(&mut payload, 7).unwrap());
        assert!(shape.merge_event(&mut payload, 8).unwrap());
        assert_eq!(shape.event_count(&payload), 2);
    }

    #[test]
    fn grouped_shape_builds_payloads_with_the_bag_factory() {
        let shape: Grouped<&str> = Grouped::default();
        let payload = shape.from_events(["b", "a", "b"]).unwrap();

        assert_eq!(payload, vec!["b", "a", "b"]);
        assert_eq!(shape.events(&payload).count(), 3);
    }

    #[test]
    fn sorted_shape_validates_the_whole_collection() {
        let shape: Sorted<f64> = Sorted::natural();

        let error = shape.from_events([1.0, f64::NAN, 2.0]).unwrap_err();
        assert!(error.is_configuration());
    }

    #[test]
    fn sorted_shape_merges_in_order() {
        let shape: Sorted<i32> = Sorted::natural();
        let mut payload = shape.from_event(5).unwrap();
        shape.merge_event(&mut payload, 1).unwrap();

        let incoming = shape.from_events([9, 3]).unwrap();
        shape.merge_payload(&mut payload, incoming).unwrap();

        assert_eq!(payload.as_slice(), &[1, 3, 5, 9]);
    }
}
