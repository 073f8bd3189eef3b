// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

/// A fixture whose natural order is partial: a NaN price compares to
/// nothing, which exercises the rejection paths of sorted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub symbol: String,
    pub price: f64,
}

impl Trade {
    #[must_use]
    pub fn new(symbol: String, price: f64) -> Self {
        Self { symbol, price }
    }
}

impl PartialOrd for Trade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.price.partial_cmp(&other.price) {
            Some(Ordering::Equal) => Some(self.symbol.cmp(&other.symbol)),
            ordering => ordering,
        }
    }
}

impl Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trade[symbol={}, price={}]", self.symbol, self.price)
    }
}
