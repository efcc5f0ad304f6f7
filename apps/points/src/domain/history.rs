use std::collections::VecDeque;

use serde::Serialize;
use time::{Date, UtcOffset};

use crate::domain::record::Match;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Bounded, newest-first archive of finished matches.
#[derive(Debug, Clone)]
pub struct MatchHistory {
    matches: VecDeque<Match>,
    capacity: usize,
}

/// Matches played on one calendar day, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub date: Date,
    pub matches: Vec<Match>,
}

impl Default for MatchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl MatchHistory {
    /// Capacity is clamped to at least one entry. Storage grows on demand
    /// up to the cap; only a default-sized buffer is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            matches: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY) + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    pub fn newest(&self) -> Option<&Match> {
        self.matches.front()
    }

    /// Insert at the head; returns the evicted oldest entry when over capacity.
    pub fn add(&mut self, entry: Match) -> Option<Match> {
        self.matches.push_front(entry);
        if self.matches.len() > self.capacity {
            self.matches.pop_back()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.matches.clear();
    }

    /// Group by the UTC calendar day of each record.
    pub fn grouped_by_day(&self) -> Vec<DayGroup> {
        self.grouped_by_day_in(UtcOffset::UTC)
    }

    /// Group by the local calendar day at `offset`, most recent day first.
    pub fn grouped_by_day_in(&self, offset: UtcOffset) -> Vec<DayGroup> {
        let mut groups: Vec<DayGroup> = Vec::new();
        for entry in &self.matches {
            let date = entry.timestamp.to_offset(offset).date();
            match groups.iter_mut().find(|g| g.date == date) {
                Some(group) => group.matches.push(entry.clone()),
                None => groups.push(DayGroup {
                    date,
                    matches: vec![entry.clone()],
                }),
            }
        }
        // Stable: keeps newest-first order inside each day.
        groups.sort_by(|a, b| b.date.cmp(&a.date));
        groups
    }
}
