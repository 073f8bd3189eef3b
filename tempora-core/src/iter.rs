// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Iterators over a series.
//!
//! All of these borrow the series, so the borrow checker excludes mutation
//! for as long as one is alive; none of them can observe a half-applied
//! change. Ascending instant order throughout; the descending traversal of
//! the double-ended ones is exactly the reverse sequence.

use crate::entry::Entry;
use crate::shape::Shape;
use crate::time::{EventTime, Instant};
use std::collections::btree_map;
use std::iter::FusedIterator;

/// Ascending iterator over a series' entries.
///
/// Double-ended: `.rev()` yields the descending traversal.
pub struct Iter<'a, S: Shape> {
    inner: btree_map::Values<'a, Instant, Entry<S::Payload>>,
}

impl<'a, S: Shape> Iter<'a, S> {
    pub(crate) fn new(inner: btree_map::Values<'a, Instant, Entry<S::Payload>>) -> Self {
        Self { inner }
    }
}

impl<S: Shape> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, S: Shape> Iterator for Iter<'a, S> {
    type Item = &'a Entry<S::Payload>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: Shape> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<S: Shape> ExactSizeIterator for Iter<'_, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<S: Shape> FusedIterator for Iter<'_, S> {}

/// Consuming ascending iterator over a series' entries.
pub struct IntoIter<S: Shape> {
    inner: btree_map::IntoValues<Instant, Entry<S::Payload>>,
}

impl<S: Shape> IntoIter<S> {
    pub(crate) fn new(inner: btree_map::IntoValues<Instant, Entry<S::Payload>>) -> Self {
        Self { inner }
    }
}

impl<S: Shape> Iterator for IntoIter<S> {
    type Item = Entry<S::Payload>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: Shape> DoubleEndedIterator for IntoIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<S: Shape> ExactSizeIterator for IntoIter<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<S: Shape> FusedIterator for IntoIter<S> {}

/// Ascending iterator over the entries of a time range.
pub struct RangeIter<'a, S: Shape> {
    inner: btree_map::Range<'a, Instant, Entry<S::Payload>>,
}

impl<'a, S: Shape> RangeIter<'a, S> {
    pub(crate) fn new(inner: btree_map::Range<'a, Instant, Entry<S::Payload>>) -> Self {
        Self { inner }
    }
}

impl<S: Shape> Clone for RangeIter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, S: Shape> Iterator for RangeIter<'a, S> {
    type Item = &'a Entry<S::Payload>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, entry)| entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: Shape> DoubleEndedIterator for RangeIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, entry)| entry)
    }
}

impl<S: Shape> FusedIterator for RangeIter<'_, S> {}

/// Ascending iterator over the distinct zoned timestamps of a series.
pub struct EventTimes<'a, S: Shape> {
    inner: Iter<'a, S>,
}

impl<'a, S: Shape> EventTimes<'a, S> {
    pub(crate) fn new(inner: Iter<'a, S>) -> Self {
        Self { inner }
    }
}

impl<S: Shape> Clone for EventTimes<'_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Shape> Iterator for EventTimes<'_, S> {
    type Item = EventTime;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::event_time)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: Shape> DoubleEndedIterator for EventTimes<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Entry::event_time)
    }
}

impl<S: Shape> ExactSizeIterator for EventTimes<'_, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<S: Shape> FusedIterator for EventTimes<'_, S> {}

/// Flattening iterator over every event in a series, in ascending timestamp
/// order; events sharing an instant come out in their payload's own order.
pub struct Events<'a, S: Shape> {
    shape: &'a S,
    entries: Iter<'a, S>,
    current: Option<S::Events<'a>>,
}

impl<'a, S: Shape> Events<'a, S> {
    pub(crate) fn new(shape: &'a S, entries: Iter<'a, S>) -> Self {
        Self {
            shape,
            entries,
            current: None,
        }
    }
}

impl<'a, S: Shape> Iterator for Events<'a, S> {
    type Item = &'a S::Event;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(event) = current.next() {
                    return Some(event);
                }
                self.current = None;
            }
            match self.entries.next() {
                Some(entry) => self.current = Some(self.shape.events(entry.payload())),
                None => return None,
            }
        }
    }
}

impl<S: Shape> FusedIterator for Events<'_, S> {}
