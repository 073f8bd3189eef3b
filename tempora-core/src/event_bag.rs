// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// The collection contract for multi-valued payloads.
///
/// A multi-valued series stores one `EventBag` per instant and is generic
/// over which implementation it uses, so the caller chooses the payload
/// semantics at the type level:
///
/// * [`Vec`] - insertion-ordered list, duplicates allowed (the default)
/// * [`VecDeque`] - same semantics with deque storage
/// * [`HashSet`] - unordered set, duplicates collapse
///
/// [`EventBag::empty`] is the collection factory: series and builders call
/// it whenever a brand-new payload is needed for an instant.
///
/// # Examples
///
/// ```
/// use tempora_core::EventBag;
///
/// fn first_len<C: EventBag<u32>>() -> usize {
///     let mut bag = C::empty();
///     bag.insert(7);
///     bag.len()
/// }
///
/// assert_eq!(first_len::<Vec<u32>>(), 1);
/// ```
pub trait EventBag<E>: IntoIterator<Item = E> {
    /// Borrowing iterator over the contained events.
    type Iter<'a>: Iterator<Item = &'a E>
    where
        Self: 'a,
        E: 'a;

    /// Creates an empty collection; the payload-collection factory.
    fn empty() -> Self;

    /// Adds one event, reporting whether the collection grew.
    ///
    /// List-like implementations always grow; set-like ones return `false`
    /// for a duplicate and keep the stored event.
    fn insert(&mut self, event: E) -> bool;

    /// Removes one occurrence of the event, reporting whether it was present.
    fn remove(&mut self, event: &E) -> bool;

    /// Whether the event is present.
    fn contains(&self, event: &E) -> bool;

    /// Number of contained events.
    fn len(&self) -> usize;

    /// Whether the collection holds no events.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the contained events in the collection's own order.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<E: PartialEq> EventBag<E> for Vec<E> {
    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn empty() -> Self {
        Self::new()
    }

    fn insert(&mut self, event: E) -> bool {
        self.push(event);
        true
    }

    fn remove(&mut self, event: &E) -> bool {
        match self.as_slice().iter().position(|stored| stored == event) {
            Some(position) => {
                // Inherent Vec::remove; shifts the tail left.
                self.remove(position);
                true
            }
            None => false,
        }
    }

    fn contains(&self, event: &E) -> bool {
        self.as_slice().contains(event)
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<E: PartialEq> EventBag<E> for VecDeque<E> {
    type Iter<'a>
        = std::collections::vec_deque::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn empty() -> Self {
        Self::new()
    }

    fn insert(&mut self, event: E) -> bool {
        self.push_back(event);
        true
    }

    fn remove(&mut self, event: &E) -> bool {
        let position = (0..self.len()).find(|&index| self[index] == *event);
        match position {
            Some(index) => {
                // Inherent VecDeque::remove by index.
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&self, event: &E) -> bool {
        let (front, back) = self.as_slices();
        front.contains(event) || back.contains(event)
    }

    fn len(&self) -> usize {
        let (front, back) = self.as_slices();
        front.len() + back.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        // Inherent VecDeque::iter.
        self.iter()
    }
}

impl<E: Eq + Hash> EventBag<E> for HashSet<E> {
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, E>
    where
        Self: 'a,
        E: 'a;

    fn empty() -> Self {
        Self::new()
    }

    fn insert(&mut self, event: E) -> bool {
        // Inherent HashSet::insert reports set growth.
        self.insert(event)
    }

    fn remove(&mut self, event: &E) -> bool {
        self.remove(event)
    }

    fn contains(&self, event: &E) -> bool {
        self.contains(event)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}
