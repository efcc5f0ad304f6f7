use proptest::prelude::*;
use time::macros::{date, datetime, offset};

use crate::domain::history::MatchHistory;
use crate::domain::sport::Sport;
use crate::domain::test_state_helpers::match_at;

#[test]
fn add_is_newest_first() {
    let mut history = MatchHistory::with_capacity(5);
    let a = match_at(Sport::Tennis, (1, 0), datetime!(2024-05-09 09:00 UTC));
    let b = match_at(Sport::Squash, (0, 2), datetime!(2024-05-09 10:00 UTC));
    history.add(a.clone());
    history.add(b.clone());

    let ids: Vec<_> = history.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert_eq!(history.newest().map(|m| m.id), Some(b.id));
}

#[test]
fn eviction_drops_oldest() {
    let mut history = MatchHistory::with_capacity(2);
    let first = match_at(Sport::Tennis, (1, 0), datetime!(2024-05-09 09:00 UTC));
    let second = match_at(Sport::Tennis, (2, 0), datetime!(2024-05-09 10:00 UTC));
    let third = match_at(Sport::Tennis, (3, 0), datetime!(2024-05-09 11:00 UTC));

    assert!(history.add(first.clone()).is_none());
    assert!(history.add(second.clone()).is_none());
    let evicted = history.add(third.clone());

    assert_eq!(evicted.map(|m| m.id), Some(first.id));
    assert_eq!(history.len(), 2);
    let ids: Vec<_> = history.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![third.id, second.id]);
}

#[test]
fn default_capacity_is_twenty() {
    assert_eq!(MatchHistory::default().capacity(), 20);
    assert_eq!(MatchHistory::with_capacity(0).capacity(), 1);
}

#[test]
fn huge_capacity_does_not_reserve_up_front() {
    for capacity in [usize::MAX, usize::MAX / 2, 1_000_000_000] {
        let mut history = MatchHistory::with_capacity(capacity);
        assert_eq!(history.capacity(), capacity);

        let m = match_at(Sport::Tennis, (1, 0), datetime!(2024-05-09 09:00 UTC));
        assert!(history.add(m).is_none());
        assert_eq!(history.len(), 1);
    }
}

#[test]
fn clear_empties() {
    let mut history = MatchHistory::default();
    history.add(match_at(Sport::Padel, (1, 1), datetime!(2024-05-09 09:00 UTC)));
    history.clear();
    assert!(history.is_empty());
    assert!(history.grouped_by_day().is_empty());
}

#[test]
fn grouping_on_empty_history_is_empty() {
    assert!(MatchHistory::default().grouped_by_day().is_empty());
}

#[test]
fn grouped_by_day_descending_with_newest_first_inside() {
    let mut history = MatchHistory::default();
    let d1_morning = match_at(Sport::Tennis, (1, 0), datetime!(2024-05-08 09:00 UTC));
    let d2_morning = match_at(Sport::Squash, (0, 1), datetime!(2024-05-09 09:00 UTC));
    let d1_evening = match_at(Sport::Padel, (2, 1), datetime!(2024-05-08 20:00 UTC));
    let d2_evening = match_at(Sport::Badminton, (2, 0), datetime!(2024-05-09 21:00 UTC));
    for m in [&d1_morning, &d1_evening, &d2_morning, &d2_evening] {
        history.add(m.clone());
    }

    let groups = history.grouped_by_day();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].date, date!(2024-05-09));
    assert_eq!(groups[1].date, date!(2024-05-08));

    let day2: Vec<_> = groups[0].matches.iter().map(|m| m.id).collect();
    assert_eq!(day2, vec![d2_evening.id, d2_morning.id]);
    let day1: Vec<_> = groups[1].matches.iter().map(|m| m.id).collect();
    assert_eq!(day1, vec![d1_evening.id, d1_morning.id]);
}

#[test]
fn grouping_respects_local_offset() {
    let mut history = MatchHistory::default();
    // 23:30 UTC on the 8th is already the 9th at +02:00.
    history.add(match_at(Sport::Tennis, (1, 0), datetime!(2024-05-08 23:30 UTC)));
    history.add(match_at(Sport::Tennis, (1, 0), datetime!(2024-05-09 08:00 UTC)));

    assert_eq!(history.grouped_by_day().len(), 2);

    let local = history.grouped_by_day_in(offset!(+2));
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].date, date!(2024-05-09));
    assert_eq!(local[0].matches.len(), 2);
}

proptest! {
    #[test]
    fn never_exceeds_capacity(capacity in 1usize..25, adds in 0usize..60) {
        let mut history = MatchHistory::with_capacity(capacity);
        let mut added = Vec::new();
        for i in 0..adds {
            let m = match_at(Sport::Generic, (i as u32, 0), datetime!(2024-05-09 09:00 UTC));
            added.push(m.id);
            history.add(m);
            prop_assert!(history.len() <= capacity);
        }
        // Survivors are exactly the most recent `capacity` adds, newest first.
        let expected: Vec<_> = added.iter().rev().take(capacity).copied().collect();
        let actual: Vec<_> = history.iter().map(|m| m.id).collect();
        prop_assert_eq!(actual, expected);
    }
}
