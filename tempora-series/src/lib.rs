// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timestamp-ordered event series with pluggable value shapes.
//!
//! A series maps points in time to events. Timestamps arrive in any chrono
//! time zone and are reduced to the instant they denote, so the same moment
//! expressed in different zones is the same position in the series; the
//! zoned form is kept alongside for display. Entries stay sorted by instant
//! and iteration walks them in that order, both directions.
//!
//! # Architecture
//!
//! One engine, [`SeriesCore`](tempora_core::SeriesCore), stores every
//! variant; a [`Shape`](tempora_core::Shape) policy decides what a single
//! instant holds and how an incoming event is folded in. The crate surfaces
//! the engine through three aliases of [`Series`]:
//!
//! | Type | Per instant | Adding an event |
//! |------|-------------|-----------------|
//! | [`EventSeries`] | one event | displaces, returns the old event |
//! | [`MultiEventSeries`] | an [`EventBag`] collection | appends |
//! | [`SortedMultiEventSeries`] | a [`SortedEvents`] collection | places in order, fallible |
//!
//! Each alias has an [`Immutable`] counterpart assembled by the single-use
//! [`SeriesBuilder`] and derived from with `with`/`without` copies.
//!
//! # Recording and Querying
//!
//! ```
//! use chrono::{FixedOffset, TimeZone, Utc};
//! use tempora_series::MultiEventSeries;
//!
//! let mut series: MultiEventSeries<&str> = MultiEventSeries::new();
//! let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//!
//! // 14:00 in Helsinki is the same instant as noon UTC.
//! let helsinki = noon.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
//! series.add(&noon, "deploy started");
//! series.add(&helsinki, "deploy finished");
//!
//! assert_eq!(series.len(), 1);
//! assert_eq!(series.event_count(), 2);
//! ```
//!
//! Range selection borrows the series and walks only the selected entries;
//! the convenience forms exclude their bounds:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora_series::EventSeries;
//!
//! let mut series = EventSeries::new();
//! for hour in [6, 9, 12, 15] {
//!     series.add(&Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(), hour);
//! }
//!
//! let from = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
//! let to = Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();
//!
//! let inner: Vec<_> = series
//!     .entries_within(&from, &to)
//!     .map(|entry| *entry.payload())
//!     .collect();
//! assert_eq!(inner, vec![9, 12]);
//!
//! let closed: Vec<_> = series
//!     .entries_between(&from, true, &to, true)
//!     .map(|entry| *entry.payload())
//!     .collect();
//! assert_eq!(closed, vec![6, 9, 12, 15]);
//! ```
//!
//! # Immutable Series
//!
//! The immutable form exposes no mutating method; derived series are
//! independent copies, and a rejected change leaves the source untouched:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tempora_series::ImmutableSortedMultiEventSeries;
//!
//! let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
//! let series = ImmutableSortedMultiEventSeries::builder()
//!     .with(&noon, 2.0)
//!     .with(&noon, 1.0)
//!     .build()?;
//!
//! let grown = series.with(&noon, 1.5)?;
//! assert_eq!(grown.get(&noon).unwrap().as_slice(), &[1.0, 1.5, 2.0]);
//!
//! // NaN has no place under the natural float order; the source survives.
//! assert!(series.with(&noon, f64::NAN).is_err());
//! assert_eq!(series.event_count(), 2);
//! # Ok::<(), tempora_series::SeriesError>(())
//! ```
//!
//! # Performance Characteristics
//!
//! Storage is a sorted map keyed by instant: point operations are
//! `O(log n)`, iteration and range scans are linear in what they visit,
//! and freezing or thawing a series moves the storage without copying.
//! The `with`/`without` family clones the storage once per derived series.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod builder;
pub mod immutable;
pub mod multi;
pub mod series;
pub mod single;
pub mod sorted;

// Re-export commonly used types
pub use builder::SeriesBuilder;
pub use immutable::Immutable;
pub use multi::{ImmutableMultiEventSeries, MultiEventSeries};
pub use series::Series;
pub use single::{EventSeries, ImmutableEventSeries};
pub use sorted::{ImmutableSortedMultiEventSeries, SortedMultiEventSeries};
pub use tempora_core::{
    Entry, EventBag, EventOrdering, EventTime, EventTimes, Events, Grouped, Instant, IntoIter,
    Iter, MultiShape, RangeIter, Result, SeriesError, Shape, Single, Sorted, SortedEvents,
};
