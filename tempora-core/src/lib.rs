// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod entry;
pub mod event_bag;
pub mod iter;
pub mod series_error;
pub mod shape;
pub mod sorted_events;
pub mod store;
pub mod time;

pub use self::entry::Entry;
pub use self::event_bag::EventBag;
pub use self::iter::{EventTimes, Events, IntoIter, Iter, RangeIter};
pub use self::series_error::{Result, SeriesError};
pub use self::shape::{Grouped, MultiShape, Shape, Single, Sorted};
pub use self::sorted_events::{EventOrdering, SortedEvents};
pub use self::store::SeriesCore;
pub use self::time::{to_event_time, to_instant, EventTime, Instant};
