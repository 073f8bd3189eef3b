// Copyright 2026 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use tempora_core::{Entry, EventOrdering, Grouped, SeriesCore, Single, Sorted};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
}

fn shifted(timestamp: DateTime<Utc>, offset_hours: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    timestamp.with_timezone(&offset)
}

#[test]
fn test_add_creates_entry_at_vacant_instant() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();

    let grew = store.add(&at(9), 42).unwrap();

    assert!(grew);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&at(9)), Some(&42));
}

#[test]
fn test_add_at_occupied_instant_replaces_single_payload() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.add(&at(9), 1).unwrap();

    let grew = store.add(&at(9), 2).unwrap();

    assert!(!grew);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&at(9)), Some(&2));
}

#[test]
fn test_put_returns_displaced_entry() {
    let mut store: SeriesCore<Single<&str>> = SeriesCore::default();

    assert!(store.put(&at(9), "first").is_none());
    let displaced = store.put(&at(9), "second").unwrap();

    assert_eq!(*displaced.payload(), "first");
    assert_eq!(store.get(&at(9)), Some(&"second"));
}

#[test]
fn test_insert_entry_keys_by_the_entry_instant() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();

    store.insert_entry(Entry::new(&shifted(at(9), 2), 7));

    // Keyed by instant, so the UTC form of the same moment finds it.
    assert_eq!(store.get(&at(9)), Some(&7));
}

#[test]
fn test_zoned_timestamps_collapse_to_one_instant() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();

    store.add(&at(12), "from utc").unwrap();
    store.add(&shifted(at(12), 2), "from +02:00").unwrap();
    store.add(&shifted(at(12), -5), "from -05:00").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.event_count(), 3);
}

#[test]
fn test_display_timestamp_follows_latest_add() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();

    store.add(&at(12), "first").unwrap();
    store.add(&shifted(at(12), 2), "second").unwrap();

    let entry = store.entry(&at(12)).unwrap();
    assert_eq!(entry.event_time().offset().local_minus_utc(), 2 * 3600);
    assert_eq!(entry.instant(), at(12));
}

#[test]
fn test_len_counts_instants_not_events() {
    let mut store: SeriesCore<Grouped<i32>> = SeriesCore::default();
    store.add(&at(9), 1).unwrap();
    store.add(&at(9), 2).unwrap();
    store.add(&at(10), 3).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.event_count(), 3);
}

#[test]
fn test_iteration_is_ascending_by_instant() {
    let mut store: SeriesCore<Single<&str>> = SeriesCore::default();
    store.put(&at(14), "afternoon");
    store.put(&at(8), "morning");
    store.put(&at(20), "evening");

    let payloads: Vec<_> = store.iter().map(|entry| *entry.payload()).collect();

    assert_eq!(payloads, vec!["morning", "afternoon", "evening"]);
}

#[test]
fn test_descending_iteration_is_exact_reverse() {
    let mut store: SeriesCore<Single<u32>> = SeriesCore::default();
    for hour in [15, 7, 11, 3, 19] {
        store.put(&at(hour), hour);
    }

    let ascending: Vec<_> = store.iter().map(|entry| *entry.payload()).collect();
    let descending: Vec<_> = store.iter().rev().map(|entry| *entry.payload()).collect();

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_entries_snapshot_is_detached_from_later_mutation() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.put(&at(9), 1);
    store.put(&at(10), 2);

    let snapshot = store.entries();
    store.put(&at(11), 3);
    store.remove_entry(&at(9));

    assert_eq!(snapshot.len(), 2);
    assert_eq!(*snapshot[0].payload(), 1);
    assert_eq!(*snapshot[1].payload(), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_empty_store_yields_empty_views() {
    let store: SeriesCore<Single<i32>> = SeriesCore::default();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.event_count(), 0);
    assert!(store.entries().is_empty());
    assert!(store.iter().next().is_none());
    assert!(store.events().next().is_none());
    assert!(store.first().is_none());
    assert!(store.last().is_none());
}

#[test]
fn test_remove_entry_returns_the_removed_entry() {
    let mut store: SeriesCore<Single<&str>> = SeriesCore::default();
    store.put(&at(9), "gone");

    let removed = store.remove_entry(&at(9)).unwrap();

    assert_eq!(*removed.payload(), "gone");
    assert!(store.is_empty());
    assert!(store.remove_entry(&at(9)).is_none());
}

#[test]
fn test_contains_and_get_respect_instant_identity() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.put(&at(9), 1);

    assert!(store.contains(&shifted(at(9), 3)));
    assert!(!store.contains(&at(10)));
    assert_eq!(store.get(&shifted(at(9), 3)), Some(&1));
    assert_eq!(store.get(&at(10)), None);
}

#[test]
fn test_first_and_last_track_the_instant_extremes() {
    let mut store: SeriesCore<Single<&str>> = SeriesCore::default();
    store.put(&at(12), "noon");
    store.put(&at(6), "dawn");
    store.put(&at(22), "night");

    assert_eq!(*store.first().unwrap().payload(), "dawn");
    assert_eq!(*store.last().unwrap().payload(), "night");
}

#[test]
fn test_clear_empties_the_store() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.put(&at(9), 1);
    store.put(&at(10), 2);

    store.clear();

    assert!(store.is_empty());
}

#[test]
fn test_payload_mut_allows_in_place_augmentation() {
    let mut store: SeriesCore<Grouped<i32>> = SeriesCore::default();
    store.add(&at(9), 1).unwrap();

    store.payload_mut(&at(9)).unwrap().push(2);

    assert_eq!(store.event_count(), 2);
    assert!(store.payload_mut(&at(10)).is_none());
}

#[test]
fn test_merge_payload_extends_an_occupied_entry() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(9), "a").unwrap();

    store.merge_payload(&at(9), vec!["b", "c"]).unwrap();

    assert_eq!(store.get(&at(9)), Some(&vec!["a", "b", "c"]));
}

#[test]
fn test_merge_payload_creates_a_vacant_entry() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();

    store.merge_payload(&at(9), vec!["a", "b"]).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.event_count(), 2);
}

#[test]
fn test_remove_event_deletes_the_entry_when_emptied() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(9), "only").unwrap();

    assert!(store.remove_event(&at(9), &"only"));

    assert!(!store.contains(&at(9)));
    assert!(store.is_empty());
}

#[test]
fn test_remove_event_keeps_the_entry_while_events_remain() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(9), "a").unwrap();
    store.add(&at(9), "b").unwrap();

    assert!(store.remove_event(&at(9), &"a"));

    assert_eq!(store.get(&at(9)), Some(&vec!["b"]));
}

#[test]
fn test_remove_event_reports_absent_events() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(9), "a").unwrap();

    assert!(!store.remove_event(&at(9), &"missing"));
    assert!(!store.remove_event(&at(10), &"a"));
    assert_eq!(store.event_count(), 1);
}

#[test]
fn test_contains_event_checks_the_timestamp_entry() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(9), "a").unwrap();

    assert!(store.contains_event(&at(9), &"a"));
    assert!(store.contains_event(&shifted(at(9), 2), &"a"));
    assert!(!store.contains_event(&at(9), &"b"));
    assert!(!store.contains_event(&at(10), &"a"));
}

#[test]
fn test_events_flatten_entries_in_instant_order() {
    let mut store: SeriesCore<Grouped<&str>> = SeriesCore::default();
    store.add(&at(10), "c").unwrap();
    store.add(&at(9), "a").unwrap();
    store.add(&at(9), "b").unwrap();

    let events: Vec<_> = store.events().copied().collect();

    assert_eq!(events, vec!["a", "b", "c"]);
}

#[test]
fn test_event_times_preserve_the_recorded_zone() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.add(&shifted(at(9), 2), 1).unwrap();
    store.add(&at(10), 2).unwrap();

    let offsets: Vec<_> = store
        .event_times()
        .map(|event_time| event_time.offset().local_minus_utc())
        .collect();

    assert_eq!(offsets, vec![2 * 3600, 0]);
}

#[test]
fn test_into_iterator_for_reference_and_owned() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.put(&at(9), 1);
    store.put(&at(10), 2);

    let borrowed: Vec<_> = (&store).into_iter().map(|entry| *entry.payload()).collect();
    assert_eq!(borrowed, vec![1, 2]);

    let owned: Vec<_> = store.into_iter().map(Entry::into_payload).collect();
    assert_eq!(owned, vec![1, 2]);
}

#[test]
fn test_display_lists_entries_in_order() {
    let mut store: SeriesCore<Single<i32>> = SeriesCore::default();
    store.put(&at(9), 1);
    store.put(&shifted(at(10), 2), 2);

    assert_eq!(
        store.to_string(),
        "Series[2024-06-01T09:00:00+00:00 => 1, 2024-06-01T12:00:00+02:00 => 2]"
    );
}

#[test]
fn test_clone_is_independent_of_the_original() {
    let mut store: SeriesCore<Grouped<i32>> = SeriesCore::default();
    store.add(&at(9), 1).unwrap();

    let mut copy = store.clone();
    copy.add(&at(9), 2).unwrap();
    copy.add(&at(10), 3).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.event_count(), 1);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.event_count(), 3);
}

// Range selection.

fn hours_of(range: tempora_core::RangeIter<'_, Single<u32>>) -> Vec<u32> {
    range.map(|entry| *entry.payload()).collect()
}

fn populated() -> SeriesCore<Single<u32>> {
    let mut store = SeriesCore::default();
    for hour in [6, 9, 12, 15, 18] {
        store.put(&at(hour), hour);
    }
    store
}

#[test]
fn test_entries_within_excludes_both_bounds() {
    let store = populated();

    let selected = hours_of(store.entries_within(&at(9), &at(15)));

    assert_eq!(selected, vec![12]);
}

#[test]
fn test_entries_between_honors_inclusivity_flags() {
    let store = populated();

    let closed = hours_of(store.entries_between(&at(9), true, &at(15), true));
    assert_eq!(closed, vec![9, 12, 15]);

    let half_open = hours_of(store.entries_between(&at(9), true, &at(15), false));
    assert_eq!(half_open, vec![9, 12]);

    let open_closed = hours_of(store.entries_between(&at(9), false, &at(15), true));
    assert_eq!(open_closed, vec![12, 15]);
}

#[test]
fn test_entries_between_equal_bounds_inclusive_selects_the_single_entry() {
    let store = populated();

    let selected = hours_of(store.entries_between(&at(12), true, &at(12), true));

    assert_eq!(selected, vec![12]);
}

#[test]
fn test_entries_between_equal_bounds_exclusive_is_empty() {
    let store = populated();

    let selected = hours_of(store.entries_within(&at(12), &at(12)));

    assert!(selected.is_empty());
}

#[test]
#[should_panic(expected = "`from` must not be after `to`")]
fn test_entries_between_panics_on_inverted_bounds() {
    let store = populated();

    let _ = store.entries_between(&at(15), true, &at(9), true);
}

#[test]
fn test_entries_between_compares_instants_not_local_times() {
    let store = populated();

    // 14:00+02:00 is noon in UTC, so an inclusive range ending there
    // still selects the 12:00 entry.
    let selected = hours_of(store.entries_between(&at(9), false, &shifted(at(12), 2), true));

    assert_eq!(selected, vec![12]);
}

#[test]
fn test_entries_head_selects_a_prefix() {
    let store = populated();

    assert_eq!(hours_of(store.entries_head(&at(12), true)), vec![6, 9, 12]);
    assert_eq!(hours_of(store.entries_before(&at(12))), vec![6, 9]);
}

#[test]
fn test_entries_tail_selects_a_suffix() {
    let store = populated();

    assert_eq!(hours_of(store.entries_tail(&at(12), true)), vec![12, 15, 18]);
    assert_eq!(hours_of(store.entries_after(&at(12))), vec![15, 18]);
}

#[test]
fn test_range_iteration_is_double_ended() {
    let store = populated();

    let descending: Vec<_> = store
        .entries_between(&at(6), true, &at(18), true)
        .rev()
        .map(|entry| *entry.payload())
        .collect();

    assert_eq!(descending, vec![18, 15, 12, 9, 6]);
}

#[test]
fn test_range_bounds_need_not_hit_existing_entries() {
    let store = populated();

    let selected = hours_of(store.entries_between(&at(7), true, &at(14), true));

    assert_eq!(selected, vec![9, 12]);
}

// Sorted shape through the engine.

#[test]
fn test_sorted_add_keeps_events_ordered() -> anyhow::Result<()> {
    // Arrange
    let mut store: SeriesCore<Sorted<i32>> = SeriesCore::default();

    // Act
    store.add(&at(9), 30)?;
    store.add(&at(9), 10)?;
    store.add(&at(9), 20)?;

    // Assert
    let payload = store.get(&at(9)).unwrap();
    assert_eq!(payload.as_slice(), &[10, 20, 30]);
    Ok(())
}

#[test]
fn test_sorted_add_rejects_incomparable_event_without_mutating() -> anyhow::Result<()> {
    // Arrange
    let mut store: SeriesCore<Sorted<f64>> = SeriesCore::default();
    store.add(&at(9), 1.0)?;

    // Act
    let rejected = store.add(&shifted(at(9), 2), f64::NAN);

    // Assert: payload and display timestamp both untouched by the failure.
    assert!(rejected.is_err());
    let entry = store.entry(&at(9)).unwrap();
    assert_eq!(entry.payload().as_slice(), &[1.0]);
    assert_eq!(entry.event_time().offset().local_minus_utc(), 0);
    Ok(())
}

#[test]
fn test_sorted_total_ordering_places_every_float() -> anyhow::Result<()> {
    let shape = Sorted::with_ordering(EventOrdering::by(f64::total_cmp));
    let mut store = SeriesCore::with_shape(shape);

    store.add(&at(9), 1.0)?;
    store.add(&at(9), f64::NAN)?;
    store.add(&at(9), 0.5)?;

    assert_eq!(store.event_count(), 3);
    Ok(())
}

#[test]
fn test_sorted_duplicate_events_collapse() -> anyhow::Result<()> {
    let mut store: SeriesCore<Sorted<i32>> = SeriesCore::default();

    assert!(store.add(&at(9), 10)?);
    assert!(!store.add(&at(9), 10)?);

    assert_eq!(store.event_count(), 1);
    Ok(())
}
