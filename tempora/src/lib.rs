// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tempora
//!
//! Timestamp-ordered event series with zone-aware timestamps, immutable
//! variants and single-use builders.
//!
//! ## Overview
//!
//! Tempora keeps events sorted by the absolute point in time they occurred
//! at. Timestamps may arrive in any time zone; they are reduced to instants
//! for ordering and lookup while the zoned form is kept for display, so
//! producers in different zones interleave correctly on one timeline.
//!
//! ## Design Philosophy
//!
//! Tempora maintains a clean separation between recording and sharing:
//!
//! - **Recording**: use the mutable [`Series`] family for in-place adds,
//!   merges and removals
//! - **Sharing**: use the [`Immutable`] family, which has no mutating
//!   methods at all; derived series come from the `with`/`without`
//!   operations, which copy and leave the source untouched
//!
//! The two forms convert into each other by moving the storage, so freezing
//! a recording or reopening a snapshot costs nothing per entry.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tempora::prelude::*;
//!
//! let morning = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
//! let evening = Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap();
//!
//! let mut series: MultiEventSeries<&str> = MultiEventSeries::new();
//! series.add(&morning, "badge-in");
//! series.add(&morning, "door-open");
//! series.add(&evening, "badge-out");
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.event_count(), 3);
//!
//! // Freeze into an immutable view; derive variants without touching it.
//! let snapshot = series.freeze();
//! let noon = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
//! let extended = snapshot.with(&noon, "lunch");
//! assert_eq!(snapshot.len(), 2);
//! assert_eq!(extended.len(), 3);
//! ```

// Re-export core types
pub use tempora_core::{
    to_event_time, to_instant, Entry, EventBag, EventOrdering, EventTime, EventTimes, Events,
    Grouped, Instant, IntoIter, Iter, MultiShape, RangeIter, Result, SeriesCore, SeriesError,
    Shape, Single, Sorted, SortedEvents,
};

// Re-export the series family
pub use tempora_series::{
    EventSeries, Immutable, ImmutableEventSeries, ImmutableMultiEventSeries,
    ImmutableSortedMultiEventSeries, MultiEventSeries, Series, SeriesBuilder,
    SortedMultiEventSeries,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tempora_core::{Entry, EventOrdering, EventTime, Instant, SeriesError};
    pub use tempora_series::{
        EventSeries, ImmutableEventSeries, ImmutableMultiEventSeries,
        ImmutableSortedMultiEventSeries, MultiEventSeries, SeriesBuilder, SortedMultiEventSeries,
    };
}
