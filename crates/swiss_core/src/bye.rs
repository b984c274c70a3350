//! Bye selection for odd fields.
//!
//! When the field is odd one player sits out the round and is credited with a
//! win. The bye goes to a random player from the bottom of the standings who
//! has not had one yet, so the top of the table is paired undisturbed.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{InvalidInput, PairingError, Result};
use crate::pairing::validate_standings;
use crate::types::Standing;

/// Which part of the standings may receive the bye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ByePool {
    /// Ranks `n/2..n`, i.e. the bottom half including the median player
    #[default]
    LowerHalf,
    /// Anyone in the field
    WholeField,
}

impl ByePool {
    /// Index of the first rank inside the pool for a field of `field_size`.
    pub fn start(self, field_size: usize) -> usize {
        match self {
            ByePool::LowerHalf => field_size / 2,
            ByePool::WholeField => 0,
        }
    }
}

/// Outcome of a bye draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByeSelection {
    pub recipient: Standing,
    /// The rest of the field, still in standings order
    pub remaining: Vec<Standing>,
}

impl ByeSelection {
    /// Split the player at `index` out of `standings`.
    pub fn take(standings: &[Standing], index: usize) -> Self {
        let mut remaining = standings.to_vec();
        let recipient = remaining.remove(index);
        Self {
            recipient,
            remaining,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ByeSelector {
    pool: ByePool,
}

impl ByeSelector {
    pub fn new(pool: ByePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> ByePool {
        self.pool
    }

    /// Indices of every player allowed to take the bye, shuffled.
    ///
    /// Walking the result front to back samples the eligible set without
    /// replacement. Fails with `NoEligibleByeCandidate` once everyone in the
    /// pool has already sat out; the caller decides whether to widen the pool.
    pub fn draw_order<R: Rng + ?Sized>(
        &self,
        standings: &[Standing],
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        validate_standings(standings)?;
        let field_size = standings.len();
        if field_size % 2 == 0 {
            return Err(InvalidInput::EvenField(field_size).into());
        }

        let start = self.pool.start(field_size);
        let mut eligible: Vec<usize> = (start..field_size)
            .filter(|&idx| !standings[idx].had_bye)
            .collect();
        debug!(
            pool = ?self.pool,
            pool_size = field_size - start,
            eligible = eligible.len(),
            "drawing bye"
        );

        if eligible.is_empty() {
            warn!(field_size, pool = ?self.pool, "bye pool exhausted");
            return Err(PairingError::NoEligibleByeCandidate {
                pool_size: field_size - start,
                field_size,
            });
        }
        eligible.shuffle(rng);
        Ok(eligible)
    }

    /// Pick the bye recipient for an odd field.
    pub fn select<R: Rng + ?Sized>(
        &self,
        standings: &[Standing],
        rng: &mut R,
    ) -> Result<ByeSelection> {
        let order = self.draw_order(standings, rng)?;
        let selection = ByeSelection::take(standings, order[0]);
        info!(
            player = %selection.recipient.id,
            name = %selection.recipient.name,
            "bye assigned"
        );
        Ok(selection)
    }
}

#[cfg(test)]
#[path = "bye_tests.rs"]
mod bye_tests;
