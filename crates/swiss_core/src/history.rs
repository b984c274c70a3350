//! Lookup of pairs that have already met.

use std::collections::HashSet;

use crate::types::{MatchRecord, PlayerId};

/// Every unordered pair of players that has played in this tournament.
///
/// A match in either direction forbids a rematch, so keys are stored with the
/// smaller id first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchHistorySet {
    played: HashSet<(PlayerId, PlayerId)>,
}

fn key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl MatchHistorySet {
    pub fn new() -> Self {
        Self {
            played: HashSet::new(),
        }
    }

    /// Build from match results; the winner/loser direction is discarded.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        records.into_iter().copied().collect()
    }

    /// Mark `a` and `b` as having played. Returns false if they already had.
    pub fn insert(&mut self, a: PlayerId, b: PlayerId) -> bool {
        self.played.insert(key(a, b))
    }

    pub fn contains(&self, a: PlayerId, b: PlayerId) -> bool {
        self.played.contains(&key(a, b))
    }

    pub fn len(&self) -> usize {
        self.played.len()
    }

    pub fn is_empty(&self) -> bool {
        self.played.is_empty()
    }
}

impl FromIterator<MatchRecord> for MatchHistorySet {
    fn from_iter<I: IntoIterator<Item = MatchRecord>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<MatchRecord> for MatchHistorySet {
    fn extend<I: IntoIterator<Item = MatchRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record.winner, record.loser);
        }
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod history_tests;
