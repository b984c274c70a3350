//! Next-round pairing against a store

use rand::Rng;
use serde::{Deserialize, Serialize};
use swiss_core::{ByePool, PairingError, Pairer, PairingRow, ResultFormatter, Standing};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SwissConfig;
use crate::memory_store::PlayerEntry;
use crate::store::{StoreError, TournamentId, TournamentStore};

#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Pairing(#[from] PairingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A round as handed to callers: formatted pairings and the bye, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    pub pairings: Vec<PairingRow>,
    pub bye: Option<PlayerEntry>,
}

/// Number of the round that `standings` are about to play.
pub fn next_round_number(standings: &[Standing]) -> u32 {
    standings.iter().map(|s| s.matches_played).max().unwrap_or(0) + 1
}

/// Reads a snapshot from a store, decides the round and persists the bye.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundPlanner {
    pairer: Pairer,
    widen_on_exhaustion: bool,
}

impl RoundPlanner {
    pub fn new(pairer: Pairer, widen_on_exhaustion: bool) -> Self {
        Self {
            pairer,
            widen_on_exhaustion,
        }
    }

    pub fn from_config(config: &SwissConfig) -> Self {
        Self::new(config.pairer(), config.widen_bye_pool_on_exhaustion)
    }

    /// Pair the next round of `tournament`.
    ///
    /// The bye is recorded before returning, so it is excluded from every
    /// later draw. Nothing is written when pairing fails.
    pub fn next_round_pairings<S, R>(
        &self,
        store: &mut S,
        tournament: TournamentId,
        rng: &mut R,
    ) -> Result<RoundPlan, RoundError>
    where
        S: TournamentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let standings = store.standings(tournament)?;
        let history = store.match_history(tournament)?;

        let round = match self.pairer.next_round(&standings, &history, rng) {
            Err(PairingError::NoEligibleByeCandidate { .. })
                if self.widen_on_exhaustion && self.pairer.bye_pool() != ByePool::WholeField =>
            {
                warn!(tournament = %tournament, "bye pool exhausted, widening to the whole field");
                self.pairer
                    .with_bye_pool(ByePool::WholeField)
                    .next_round(&standings, &history, rng)?
            }
            other => other?,
        };

        let bye = match round.bye {
            Some(standing) => {
                store.record_bye(tournament, standing.id)?;
                Some(PlayerEntry {
                    id: standing.id,
                    name: standing.name,
                })
            }
            None => None,
        };

        info!(
            tournament = %tournament,
            pairs = round.pairs.len(),
            bye = bye.is_some(),
            "next round ready"
        );
        Ok(RoundPlan {
            pairings: ResultFormatter::format(&round.pairs),
            bye,
        })
    }
}

#[cfg(test)]
#[path = "rounds_tests.rs"]
mod rounds_tests;
