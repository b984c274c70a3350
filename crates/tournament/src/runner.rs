//! Runner for playing several Swiss rounds in a row

use rand::Rng;
use serde::{Deserialize, Serialize};
use swiss_core::{MatchRecord, PairingRow};
use tracing::info;

use crate::rounds::{RoundError, RoundPlan, RoundPlanner};
use crate::store::{TournamentId, TournamentStore};

/// Which side of a pairing row won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `id_a` won
    FirstWins,
    /// `id_b` won
    SecondWins,
}

impl Outcome {
    pub fn record(self, row: &PairingRow) -> MatchRecord {
        match self {
            Outcome::FirstWins => MatchRecord::new(row.id_a, row.id_b),
            Outcome::SecondWins => MatchRecord::new(row.id_b, row.id_a),
        }
    }
}

/// Decides the result of each pairing; implemented for closures.
pub trait MatchOracle {
    fn decide(&mut self, row: &PairingRow) -> Outcome;
}

impl<F> MatchOracle for F
where
    F: FnMut(&PairingRow) -> Outcome,
{
    fn decide(&mut self, row: &PairingRow) -> Outcome {
        self(row)
    }
}

/// Settings for a multi-round run
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub rounds: u32,
    /// Print each round as it is played
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            rounds: 3,
            verbose: false,
        }
    }
}

/// One played round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub number: u32,
    pub plan: RoundPlan,
    pub results: Vec<MatchRecord>,
}

/// Plays rounds of a tournament: pair, decide, record, repeat.
pub struct SwissRunner {
    config: RunnerConfig,
    planner: RoundPlanner,
}

impl SwissRunner {
    pub fn new(config: RunnerConfig, planner: RoundPlanner) -> Self {
        Self { config, planner }
    }

    /// Play `config.rounds` rounds.
    ///
    /// Stops at the first round that cannot be paired; the rounds before it
    /// are already recorded in the store.
    pub fn run<S, R, O>(
        &self,
        store: &mut S,
        tournament: TournamentId,
        oracle: &mut O,
        rng: &mut R,
    ) -> Result<Vec<RoundSummary>, RoundError>
    where
        S: TournamentStore + ?Sized,
        R: Rng + ?Sized,
        O: MatchOracle + ?Sized,
    {
        let mut summaries = Vec::with_capacity(self.config.rounds as usize);

        for number in 1..=self.config.rounds {
            let plan = self.planner.next_round_pairings(store, tournament, rng)?;

            let mut results = Vec::with_capacity(plan.pairings.len());
            for row in &plan.pairings {
                let record = oracle.decide(row).record(row);
                store.record_match(tournament, record.winner, record.loser)?;
                results.push(record);
            }

            if self.config.verbose {
                println!("Round {}/{}", number, self.config.rounds);
                for row in &plan.pairings {
                    println!("  {}", row);
                }
                if let Some(bye) = &plan.bye {
                    println!("  bye: {} {}", bye.id, bye.name);
                }
            }
            info!(
                tournament = %tournament,
                round = number,
                matches = results.len(),
                "round played"
            );

            summaries.push(RoundSummary {
                number,
                plan,
                results,
            });
        }

        Ok(summaries)
    }
}

/// Quick utility: the higher-ranked side of every pairing wins.
pub fn favourite_wins(_row: &PairingRow) -> Outcome {
    Outcome::FirstWins
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
