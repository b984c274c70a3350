//! Shared value types: player ids, standings, match records and pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player identifier, assigned by the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One participant's record at the start of a round.
///
/// Standings are handed to the engine already ordered, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
    /// Whether this player has already sat out a round
    pub had_bye: bool,
}

impl Standing {
    /// A fresh entrant with no games played.
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            wins: 0,
            matches_played: 0,
            had_bye: false,
        }
    }

    pub fn with_record(mut self, wins: u32, matches_played: u32) -> Self {
        self.wins = wins;
        self.matches_played = matches_played;
        self
    }

    pub fn with_bye(mut self) -> Self {
        self.had_bye = true;
        self
    }

    pub fn losses(&self) -> u32 {
        self.matches_played.saturating_sub(self.wins)
    }
}

/// Result of a played match. Direction matters for scoring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

impl MatchRecord {
    pub fn new(winner: PlayerId, loser: PlayerId) -> Self {
        Self { winner, loser }
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.winner == player || self.loser == player
    }
}

/// Two players drawn against each other for the coming round.
///
/// `first` is the higher-ranked of the two; there is no winner yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub first: Standing,
    pub second: Standing,
}

impl Pair {
    pub fn new(first: Standing, second: Standing) -> Self {
        Self { first, second }
    }

    pub fn ids(&self) -> (PlayerId, PlayerId) {
        (self.first.id, self.second.id)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.first.id == player || self.second.id == player
    }

    /// Order-insensitive comparison of the two ids.
    pub fn same_players(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.first.id == a && self.second.id == b) || (self.first.id == b && self.second.id == a)
    }
}

/// Everything the engine decided for one round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairs: Vec<Pair>,
    /// The player sitting out, present only for odd fields
    pub bye: Option<Standing>,
}

impl RoundPairings {
    /// Number of players covered by this round, bye included.
    pub fn player_count(&self) -> usize {
        self.pairs.len() * 2 + usize::from(self.bye.is_some())
    }
}
