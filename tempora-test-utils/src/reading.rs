// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reading {
    pub sensor: String,
    pub value: i64,
}

impl Reading {
    #[must_use]
    pub const fn new(sensor: String, value: i64) -> Self {
        Self { sensor, value }
    }
}

impl Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reading[sensor={}, value={}]", self.sensor, self.value)
    }
}
