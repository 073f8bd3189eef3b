// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the tempora event series workspace.
//!
//! This crate provides fixture types, a deterministic clock, proptest
//! strategies and assertion helpers for testing series behavior. It is
//! designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `TestClock`
//!
//! A deterministic clock handing out evenly spaced timestamps, so tests can
//! name the exact instants they recorded:
//!
//! ```rust
//! use tempora_test_utils::TestClock;
//!
//! let clock = TestClock::new();
//! assert_eq!(clock.next(), clock.at(0));
//! assert!(clock.at(0) < clock.at(1));
//!
//! // The same tick expressed two hours east of UTC is the same instant.
//! assert_eq!(clock.zoned_at(3, 2), clock.at(3));
//! ```
//!
//! ## Fixtures
//!
//! - `Reading` - a totally ordered sensor reading
//! - `Trade` - a partially ordered trade; a NaN price compares to nothing
//!
//! ```rust
//! use tempora_test_utils::test_data::{temperature, trade_eur};
//!
//! let reading = temperature(21);
//! assert_eq!(reading.to_string(), "Reading[sensor=temperature, value=21]");
//!
//! let unpriced = trade_eur(f64::NAN);
//! assert!(unpriced.partial_cmp(&trade_eur(1.0)).is_none());
//! ```
//!
//! # Module Organization
//!
//! - `clock` - deterministic timestamp source
//! - `generators` - proptest strategies for instants, offsets and zoned
//!   timestamps, plus seeded shuffles
//! - `helpers` - assertion functions
//! - `reading`, `trade` - fixture types
//! - `test_data` - factory functions for the fixtures

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod clock;
pub mod generators;
pub mod helpers;
pub mod reading;
pub mod test_data;
pub mod trade;

// Re-export commonly used test utilities
pub use clock::TestClock;
pub use helpers::assert_ascending;
pub use reading::Reading;
pub use trade::Trade;
