// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the tempora event-store crates.
//!
//! Most misuse of a series is rejected at compile time: immutable variants
//! have no mutating methods and the builder is consumed by `build`, so those
//! whole error classes cannot occur at run time. What remains is data-driven
//! configuration failure, reported through [`SeriesError`] before any state
//! changes.
//!
//! # Examples
//!
//! ```
//! use tempora_core::{SeriesError, Result};
//!
//! fn place_event() -> Result<()> {
//!     // An ordering that cannot place the value reports context
//!     Err(SeriesError::incomparable_event("NaN has no position under f64 ordering"))
//! }
//! ```

/// Root error type for all series operations.
///
/// A returned error guarantees the originating series is unchanged: every
/// fallible operation validates before it mutates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SeriesError {
    /// The configured ordering cannot place an event.
    ///
    /// Raised by strictly ordered payloads when a value is mutually
    /// incomparable with the stored events (for natural ordering, when
    /// `partial_cmp` returns `None`, as with a floating-point NaN).
    #[error("Incomparable event: {context}")]
    IncomparableEvent {
        /// Description of the value the ordering could not place
        context: String,
    },
}

impl SeriesError {
    /// Create an incomparable-event error with the given context.
    pub fn incomparable_event(context: impl Into<String>) -> Self {
        Self::IncomparableEvent {
            context: context.into(),
        }
    }

    /// Check whether this error reports an ordering-configuration problem.
    ///
    /// Configuration errors are permanent for the offending value: retrying
    /// the same insertion fails again until the series is rebuilt with an
    /// ordering that can place it.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::IncomparableEvent { .. })
    }
}

/// Specialized Result type for series operations.
///
/// This is a type alias for `std::result::Result<T, SeriesError>`, providing
/// a convenient shorthand for functions that return series errors.
///
/// # Examples
///
/// ```
/// use tempora_core::Result;
///
/// fn checked_insert() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SeriesError>;
