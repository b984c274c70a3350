//! In-memory tournament store with JSON persistence

use serde::{Deserialize, Serialize};
use std::path::Path;
use swiss_core::{MatchHistorySet, MatchRecord, PlayerId, Standing};
use tracing::{debug, info};

use crate::store::{StoreError, TournamentId, TournamentStore};

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
}

/// Everything recorded for one tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: TournamentId,
    pub name: String,
    /// In registration order
    pub players: Vec<PlayerEntry>,
    pub matches: Vec<MatchRecord>,
    /// Players credited with a free win
    pub byes: Vec<PlayerId>,
}

impl TournamentRecord {
    fn has_player(&self, player: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player)
    }

    fn check_player(&self, player: PlayerId) -> Result<(), StoreError> {
        if self.has_player(player) {
            Ok(())
        } else {
            Err(StoreError::UnknownPlayer {
                tournament: self.id,
                player,
            })
        }
    }
}

/// Store holding any number of tournaments.
///
/// Player ids are unique across the whole store, so a player id alone is
/// never ambiguous even when names repeat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_tournament: u32,
    next_player: u32,
    tournaments: Vec<TournamentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file; a missing file gives an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "no store file, starting empty");
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the store to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), "store saved");
        Ok(())
    }

    pub fn create_tournament(&mut self, name: &str) -> TournamentId {
        self.next_tournament += 1;
        let id = TournamentId(self.next_tournament);
        self.tournaments.push(TournamentRecord {
            id,
            name: name.to_string(),
            players: Vec::new(),
            matches: Vec::new(),
            byes: Vec::new(),
        });
        info!(tournament = %id, name, "tournament created");
        id
    }

    pub fn tournaments(&self) -> impl Iterator<Item = &TournamentRecord> {
        self.tournaments.iter()
    }

    pub fn tournament(&self, id: TournamentId) -> Result<&TournamentRecord, StoreError> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTournament(id))
    }

    fn tournament_mut(&mut self, id: TournamentId) -> Result<&mut TournamentRecord, StoreError> {
        self.tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTournament(id))
    }

    /// Remove every tournament along with its players and results.
    pub fn delete_tournaments(&mut self) -> usize {
        let removed = self.tournaments.len();
        self.tournaments.clear();
        info!(removed, "tournaments deleted");
        removed
    }

    /// Add a player; names need not be unique.
    pub fn register_player(
        &mut self,
        tournament: TournamentId,
        name: &str,
    ) -> Result<PlayerId, StoreError> {
        let id = PlayerId(self.next_player + 1);
        self.tournament_mut(tournament)?.players.push(PlayerEntry {
            id,
            name: name.to_string(),
        });
        self.next_player += 1;
        debug!(tournament = %tournament, player = %id, name, "player registered");
        Ok(id)
    }

    pub fn count_players(&self, tournament: TournamentId) -> Result<usize, StoreError> {
        Ok(self.tournament(tournament)?.players.len())
    }

    /// Remove all players of a tournament, and with them every result.
    pub fn delete_players(&mut self, tournament: TournamentId) -> Result<usize, StoreError> {
        let record = self.tournament_mut(tournament)?;
        let removed = record.players.len();
        record.players.clear();
        record.matches.clear();
        record.byes.clear();
        info!(tournament = %tournament, removed, "players deleted");
        Ok(removed)
    }

    /// Forget every result of a tournament, byes included.
    pub fn delete_matches(&mut self, tournament: TournamentId) -> Result<usize, StoreError> {
        let record = self.tournament_mut(tournament)?;
        let removed = record.matches.len();
        record.matches.clear();
        record.byes.clear();
        info!(tournament = %tournament, removed, "matches deleted");
        Ok(removed)
    }
}

impl TournamentStore for MemoryStore {
    /// Wins descending; equal wins keep registration (id) order.
    fn standings(&self, tournament: TournamentId) -> Result<Vec<Standing>, StoreError> {
        let record = self.tournament(tournament)?;
        let mut standings: Vec<Standing> = record
            .players
            .iter()
            .map(|p| {
                let mut standing = Standing::new(p.id, &p.name);
                for m in record.matches.iter().filter(|m| m.involves(p.id)) {
                    standing.matches_played += 1;
                    if m.winner == p.id {
                        standing.wins += 1;
                    }
                }
                if record.byes.contains(&p.id) {
                    standing.had_bye = true;
                    standing.wins += 1;
                    standing.matches_played += 1;
                }
                standing
            })
            .collect();
        standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
        Ok(standings)
    }

    fn match_history(&self, tournament: TournamentId) -> Result<MatchHistorySet, StoreError> {
        Ok(MatchHistorySet::from_records(&self.tournament(tournament)?.matches))
    }

    fn record_bye(&mut self, tournament: TournamentId, player: PlayerId) -> Result<(), StoreError> {
        let record = self.tournament_mut(tournament)?;
        record.check_player(player)?;
        if record.byes.contains(&player) {
            return Err(StoreError::DuplicateBye(player));
        }
        record.byes.push(player);
        info!(tournament = %tournament, player = %player, "bye recorded");
        Ok(())
    }

    fn record_match(
        &mut self,
        tournament: TournamentId,
        winner: PlayerId,
        loser: PlayerId,
    ) -> Result<(), StoreError> {
        if winner == loser {
            return Err(StoreError::SelfMatch(winner));
        }
        let record = self.tournament_mut(tournament)?;
        record.check_player(winner)?;
        record.check_player(loser)?;
        record.matches.push(MatchRecord { winner, loser });
        debug!(tournament = %tournament, winner = %winner, loser = %loser, "match recorded");
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_store_tests.rs"]
mod memory_store_tests;
