//! Rematch-free pairing of an even field.
//!
//! The search walks the standings top-down. The highest-ranked unpaired
//! player is matched with the closest-ranked unpaired player they have not
//! met; when that leaves the rest of the field unpairable the choice is
//! undone and the next-closest partner is tried. Sub-fields that are proven
//! unpairable are remembered, so the same dead end is never explored twice.
//!
//! Because partners are always tried closest-first, the result is the
//! lexicographically best pairing by rank distance and is fully determined by
//! the standings order and the history.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::error::{InvalidInput, PairingError, Result};
use crate::history::MatchHistorySet;
use crate::types::{Pair, Standing};

/// Default cap on partner choices tried before reporting a deadlock.
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Check the snapshot handed to the engine: non-empty, unique ids, sane records.
pub fn validate_standings(standings: &[Standing]) -> std::result::Result<(), InvalidInput> {
    if standings.is_empty() {
        return Err(InvalidInput::EmptyField);
    }
    let mut seen = HashSet::with_capacity(standings.len());
    for s in standings {
        if !seen.insert(s.id) {
            return Err(InvalidInput::DuplicatePlayer(s.id));
        }
        if s.matches_played < s.wins {
            return Err(InvalidInput::InconsistentRecord {
                id: s.id,
                wins: s.wins,
                matches_played: s.matches_played,
            });
        }
    }
    Ok(())
}

/// Pairs an even field while avoiding every pair in the history.
#[derive(Debug, Clone, Copy)]
pub struct PairingEngine {
    max_steps: usize,
}

impl Default for PairingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingEngine {
    pub fn new() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Limit the search to `max_steps` partner choices.
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self { max_steps }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Pair every player in `standings` exactly once.
    ///
    /// Pairs come back in standings order of their higher-ranked player, and
    /// within a pair the higher-ranked player is `first`.
    pub fn pair(&self, standings: &[Standing], history: &MatchHistorySet) -> Result<Vec<Pair>> {
        validate_standings(standings)?;
        if standings.len() % 2 != 0 {
            return Err(InvalidInput::OddField(standings.len()).into());
        }

        let n = standings.len();
        debug!(players = n, history = history.len(), "pairing field");

        // Candidate partners per rank, closest-ranked first.
        let partners: Vec<Vec<usize>> = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i && !history.contains(standings[i].id, standings[j].id))
                    .collect()
            })
            .collect();

        if let Some(stranded) = partners.iter().position(|p| p.is_empty()) {
            warn!(
                player = %standings[stranded].id,
                "player has already met every opponent"
            );
            return Err(PairingError::PairingDeadlock {
                players: n,
                steps: 0,
            });
        }

        let mut search = Search::new(&partners, self.max_steps);
        match search.extend() {
            Step::Complete => {
                debug!(steps = search.steps, "pairing found");
                Ok(search
                    .chosen
                    .iter()
                    .map(|&(a, b)| Pair::new(standings[a].clone(), standings[b].clone()))
                    .collect())
            }
            Step::DeadEnd | Step::OutOfBudget => {
                warn!(players = n, steps = search.steps, "no rematch-free pairing");
                Err(PairingError::PairingDeadlock {
                    players: n,
                    steps: search.steps,
                })
            }
        }
    }
}

enum Step {
    Complete,
    DeadEnd,
    OutOfBudget,
}

/// Depth-first state: which ranks are taken, and the pairs chosen so far.
struct Search<'a> {
    partners: &'a [Vec<usize>],
    used: Vec<u64>,
    /// Taken-sets already shown to have no completion
    failed: HashSet<Vec<u64>>,
    chosen: Vec<(usize, usize)>,
    steps: usize,
    max_steps: usize,
}

impl<'a> Search<'a> {
    fn new(partners: &'a [Vec<usize>], max_steps: usize) -> Self {
        Self {
            partners,
            used: vec![0; partners.len().div_ceil(64)],
            failed: HashSet::new(),
            chosen: Vec::with_capacity(partners.len() / 2),
            steps: 0,
            max_steps,
        }
    }

    #[inline]
    fn is_used(&self, idx: usize) -> bool {
        self.used[idx / 64] & (1u64 << (idx % 64)) != 0
    }

    #[inline]
    fn toggle(&mut self, idx: usize) {
        self.used[idx / 64] ^= 1u64 << (idx % 64);
    }

    /// Some open player has no open partner left.
    fn has_stranded_player(&self) -> bool {
        (0..self.partners.len()).any(|i| {
            !self.is_used(i) && self.partners[i].iter().all(|&j| self.is_used(j))
        })
    }

    fn extend(&mut self) -> Step {
        let Some(first) = (0..self.partners.len()).find(|&i| !self.is_used(i)) else {
            return Step::Complete;
        };
        if self.failed.contains(&self.used) {
            return Step::DeadEnd;
        }

        let partners = self.partners;
        for &partner in &partners[first] {
            if self.is_used(partner) {
                continue;
            }
            self.steps += 1;
            if self.steps > self.max_steps {
                return Step::OutOfBudget;
            }

            self.toggle(first);
            self.toggle(partner);
            self.chosen.push((first, partner));

            if !self.has_stranded_player() {
                match self.extend() {
                    Step::DeadEnd => {}
                    done => return done,
                }
            }

            trace!(first, partner, depth = self.chosen.len(), "backtracking");
            self.chosen.pop();
            self.toggle(first);
            self.toggle(partner);
        }

        self.failed.insert(self.used.clone());
        Step::DeadEnd
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
