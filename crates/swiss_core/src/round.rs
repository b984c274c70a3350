//! One full round: bye selection followed by pairing of the rest.

use rand::Rng;
use tracing::{debug, info};

use crate::bye::{ByePool, ByeSelection, ByeSelector};
use crate::error::{PairingError, Result};
use crate::history::MatchHistorySet;
use crate::pairing::{validate_standings, PairingEngine};
use crate::types::{Pair, RoundPairings, Standing};

/// Composes a [`ByeSelector`] and a [`PairingEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Pairer {
    bye: ByeSelector,
    engine: PairingEngine,
}

impl Pairer {
    pub fn new(pool: ByePool, max_steps: usize) -> Self {
        Self {
            bye: ByeSelector::new(pool),
            engine: PairingEngine::with_max_steps(max_steps),
        }
    }

    pub fn bye_pool(&self) -> ByePool {
        self.bye.pool()
    }

    /// Same engine, different bye pool.
    pub fn with_bye_pool(self, pool: ByePool) -> Self {
        Self {
            bye: ByeSelector::new(pool),
            ..self
        }
    }

    /// Take one player out of an odd field; even fields pass through.
    pub fn select_bye_if_needed<R: Rng + ?Sized>(
        &self,
        standings: &[Standing],
        rng: &mut R,
    ) -> Result<(Option<Standing>, Vec<Standing>)> {
        validate_standings(standings)?;
        if standings.len() % 2 == 0 {
            return Ok((None, standings.to_vec()));
        }
        let ByeSelection {
            recipient,
            remaining,
        } = self.bye.select(standings, rng)?;
        Ok((Some(recipient), remaining))
    }

    pub fn pair_remaining(
        &self,
        standings: &[Standing],
        history: &MatchHistorySet,
    ) -> Result<Vec<Pair>> {
        self.engine.pair(standings, history)
    }

    /// Decide the whole round.
    ///
    /// For odd fields the eligible bye candidates are tried in random order
    /// until one leaves a pairable remainder, so an unlucky draw never turns
    /// into a deadlock that another eligible recipient would avoid.
    pub fn next_round<R: Rng + ?Sized>(
        &self,
        standings: &[Standing],
        history: &MatchHistorySet,
        rng: &mut R,
    ) -> Result<RoundPairings> {
        validate_standings(standings)?;
        if standings.len() % 2 == 0 {
            let pairs = self.engine.pair(standings, history)?;
            info!(pairs = pairs.len(), "round paired");
            return Ok(RoundPairings { pairs, bye: None });
        }

        let mut last_err = None;
        for idx in self.bye.draw_order(standings, rng)? {
            let selection = ByeSelection::take(standings, idx);
            if selection.remaining.is_empty() {
                info!(bye = %selection.recipient.id, "lone player gets the bye");
                return Ok(RoundPairings {
                    pairs: Vec::new(),
                    bye: Some(selection.recipient),
                });
            }
            match self.engine.pair(&selection.remaining, history) {
                Ok(pairs) => {
                    info!(
                        pairs = pairs.len(),
                        bye = %selection.recipient.id,
                        "round paired"
                    );
                    return Ok(RoundPairings {
                        pairs,
                        bye: Some(selection.recipient),
                    });
                }
                Err(err @ PairingError::PairingDeadlock { .. }) => {
                    debug!(candidate = %selection.recipient.id, "bye leaves an unpairable field");
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.unwrap_or(PairingError::PairingDeadlock {
            players: standings.len(),
            steps: 0,
        }))
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
