// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::{HashSet, VecDeque};
use tempora_series::{Entry, MultiEventSeries};
use tempora_test_utils::test_data::{humidity, pressure, temperature};
use tempora_test_utils::{Reading, TestClock};

#[test]
fn test_add_groups_events_at_the_same_instant() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();

    // Act
    series.add(&clock.at(0), temperature(21));
    series.add(&clock.at(0), humidity(40));
    series.add(&clock.at(1), pressure(1013));

    // Assert
    assert_eq!(series.len(), 2);
    assert_eq!(series.event_count(), 3);
    assert_eq!(
        series.get(&clock.at(0)),
        Some(&vec![temperature(21), humidity(40)])
    );
}

#[test]
fn test_add_reports_whether_the_collection_grew() {
    // Arrange
    let clock = TestClock::new();
    let mut listed: MultiEventSeries<Reading> = MultiEventSeries::new();
    let mut deduplicated: MultiEventSeries<Reading, HashSet<Reading>> = MultiEventSeries::new();

    // Act & Assert: the list admits duplicates, the set collapses them.
    assert!(listed.add(&clock.at(0), temperature(21)));
    assert!(listed.add(&clock.at(0), temperature(21)));
    assert_eq!(listed.event_count(), 2);

    assert!(deduplicated.add(&clock.at(0), temperature(21)));
    assert!(!deduplicated.add(&clock.at(0), temperature(21)));
    assert_eq!(deduplicated.event_count(), 1);
}

#[test]
fn test_deque_bag_keeps_arrival_order() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<i32, VecDeque<i32>> = MultiEventSeries::new();

    // Act
    series.add_all(&clock.at(0), [3, 1, 2]);

    // Assert
    let events = series.get(&clock.at(0)).expect("entry exists");
    assert_eq!(events.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
}

#[test]
fn test_add_all_merges_into_the_existing_collection() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add(&clock.at(0), temperature(20));

    // Act
    series.add_all(&clock.at(0), [temperature(21), temperature(22)]);

    // Assert
    assert_eq!(series.len(), 1);
    assert_eq!(series.event_count(), 3);
}

#[test]
fn test_add_all_with_no_events_creates_no_entry() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();

    // Act
    series.add_all(&clock.at(0), std::iter::empty());

    // Assert
    assert!(series.is_empty());
    assert!(!series.contains(&clock.at(0)));
}

#[test]
fn test_remove_event_prunes_the_emptied_entry() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add(&clock.at(0), temperature(21));

    // Act & Assert: removing the last event removes the entry with it.
    assert!(series.remove_event(&clock.at(0), &temperature(21)));
    assert!(series.is_empty());
    assert!(!series.contains(&clock.at(0)));
}

#[test]
fn test_remove_event_keeps_the_entry_while_events_remain() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add_all(&clock.at(0), [temperature(21), humidity(40)]);

    // Act & Assert
    assert!(series.remove_event(&clock.at(0), &temperature(21)));
    assert_eq!(series.len(), 1);
    assert_eq!(series.get(&clock.at(0)), Some(&vec![humidity(40)]));
}

#[test]
fn test_remove_event_reports_absence() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add(&clock.at(0), temperature(21));

    // Act & Assert: neither a foreign event nor a vacant instant removes.
    assert!(!series.remove_event(&clock.at(0), &pressure(1013)));
    assert!(!series.remove_event(&clock.at(1), &temperature(21)));
    assert_eq!(series.event_count(), 1);
}

#[test]
fn test_contains_event_sees_through_zones() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add(&clock.zoned_at(4, 2), temperature(21));

    // Act & Assert
    assert!(series.contains_event(&clock.at(4), &temperature(21)));
    assert!(!series.contains_event(&clock.at(4), &humidity(40)));
}

#[test]
fn test_events_flattens_collections_in_instant_order() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add_all(&clock.at(1), [humidity(40), humidity(41)]);
    series.add(&clock.at(0), temperature(21));

    // Act
    let values: Vec<i64> = series.events().map(|reading| reading.value).collect();

    // Assert
    assert_eq!(values, vec![21, 40, 41]);
}

#[test]
fn test_remove_returns_the_whole_collection() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add_all(&clock.at(0), [temperature(21), humidity(40)]);

    // Act
    let removed = series.remove(&clock.at(0));

    // Assert
    assert_eq!(removed, Some(vec![temperature(21), humidity(40)]));
    assert!(series.is_empty());
}

#[test]
fn test_put_replaces_the_whole_collection() {
    // Arrange
    let clock = TestClock::new();
    let mut series: MultiEventSeries<Reading> = MultiEventSeries::new();
    series.add_all(&clock.at(0), [temperature(21), humidity(40)]);

    // Act
    let displaced = series.put(&clock.at(0), vec![pressure(1013)]);

    // Assert
    assert_eq!(
        displaced.map(Entry::into_payload),
        Some(vec![temperature(21), humidity(40)])
    );
    assert_eq!(series.get(&clock.at(0)), Some(&vec![pressure(1013)]));
    assert_eq!(series.event_count(), 1);
}
