//! Error types reported by the pairing engine

use thiserror::Error;

use crate::types::PlayerId;

/// Failures of a single round's pairing request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Odd field, and everyone in the bye pool has already sat out once.
    #[error("no eligible bye candidate among the bottom {pool_size} of {field_size} players")]
    NoEligibleByeCandidate { pool_size: usize, field_size: usize },

    #[error("no rematch-free pairing for {players} players (gave up after {steps} search steps)")]
    PairingDeadlock { players: usize, steps: usize },
}

/// What exactly was wrong with the snapshot handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("no players to pair")]
    EmptyField,

    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("cannot pair an odd field of {0} players without a bye")]
    OddField(usize),

    #[error("a field of {0} players needs no bye")]
    EvenField(usize),

    #[error("player {id} has {wins} wins in only {matches_played} matches")]
    InconsistentRecord {
        id: PlayerId,
        wins: u32,
        matches_played: u32,
    },

    #[error("pairing row matches player {0} against itself")]
    SelfPairing(PlayerId),
}

pub type Result<T> = std::result::Result<T, PairingError>;
