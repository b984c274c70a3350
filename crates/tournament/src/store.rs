//! Storage seam between the pairing core and wherever tournaments live

use serde::{Deserialize, Serialize};
use std::fmt;
use swiss_core::{MatchHistorySet, PlayerId, Standing};
use thiserror::Error;

/// Identifier of one tournament inside a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(pub u32);

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown tournament {0}")]
    UnknownTournament(TournamentId),

    #[error("player {player} is not registered in tournament {tournament}")]
    UnknownPlayer {
        tournament: TournamentId,
        player: PlayerId,
    },

    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("player {0} already had a bye")]
    DuplicateBye(PlayerId),

    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse store file: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the round planner needs from storage.
///
/// Every call names its tournament explicitly. Writes take `&mut self`, so a
/// round's bye draw and its recording cannot interleave with another writer.
pub trait TournamentStore {
    /// Players of `tournament`, best first.
    fn standings(&self, tournament: TournamentId) -> Result<Vec<Standing>, StoreError>;

    /// Every pair that has played in `tournament`, in either direction.
    fn match_history(&self, tournament: TournamentId) -> Result<MatchHistorySet, StoreError>;

    /// Persist a bye; it counts as a win and excludes the player from later byes.
    fn record_bye(&mut self, tournament: TournamentId, player: PlayerId) -> Result<(), StoreError>;

    fn record_match(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<(), StoreError>;
}
