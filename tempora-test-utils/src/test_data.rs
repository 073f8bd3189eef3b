// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::reading::Reading;
use crate::trade::Trade;

/// Creates a temperature reading with the given value.
#[must_use]
pub fn temperature(value: i64) -> Reading {
    Reading::new("temperature".to_string(), value)
}

/// Creates a humidity reading with the given value.
#[must_use]
pub fn humidity(value: i64) -> Reading {
    Reading::new("humidity".to_string(), value)
}

/// Creates a pressure reading with the given value.
#[must_use]
pub fn pressure(value: i64) -> Reading {
    Reading::new("pressure".to_string(), value)
}

/// Creates a reading for an arbitrary sensor.
#[must_use]
pub fn reading(sensor: &str, value: i64) -> Reading {
    Reading::new(sensor.to_string(), value)
}

/// Creates a trade for an arbitrary symbol.
#[must_use]
pub fn trade(symbol: &str, price: f64) -> Trade {
    Trade::new(symbol.to_string(), price)
}

/// Creates a EURUSD trade with the given price.
#[must_use]
pub fn trade_eur(price: f64) -> Trade {
    trade("EURUSD", price)
}

/// Creates a GBPUSD trade with the given price.
#[must_use]
pub fn trade_gbp(price: f64) -> Trade {
    trade("GBPUSD", price)
}
