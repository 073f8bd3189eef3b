// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tempora_core::Entry;

/// Asserts that the entries arrive in strictly ascending instant order.
///
/// # Panics
///
/// Panics if any entry's instant is not strictly greater than its
/// predecessor's.
pub fn assert_ascending<'a, P, I>(entries: I)
where
    I: IntoIterator<Item = &'a Entry<P>>,
    P: 'a,
{
    let mut previous = None;
    for entry in entries {
        if let Some(last) = previous {
            assert!(
                last < entry.instant(),
                "entries out of order: {last} came before {}",
                entry.instant()
            );
        }
        previous = Some(entry.instant());
    }
}
