//! External representation of a round's pairings.
//!
//! Callers receive each pair as the flat tuple `(id_a, name_a, id_b, name_b)`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::InvalidInput;
use crate::types::{Pair, PlayerId};

/// The tuple shape handed to callers.
pub type PairingTuple = (PlayerId, String, PlayerId, String);

/// One formatted pairing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRow {
    pub id_a: PlayerId,
    pub name_a: String,
    pub id_b: PlayerId,
    pub name_b: String,
}

impl PairingRow {
    pub fn into_tuple(self) -> PairingTuple {
        (self.id_a, self.name_a, self.id_b, self.name_b)
    }
}

impl From<PairingTuple> for PairingRow {
    fn from((id_a, name_a, id_b, name_b): PairingTuple) -> Self {
        Self {
            id_a,
            name_a,
            id_b,
            name_b,
        }
    }
}

impl From<&Pair> for PairingRow {
    fn from(pair: &Pair) -> Self {
        Self {
            id_a: pair.first.id,
            name_a: pair.first.name.clone(),
            id_b: pair.second.id,
            name_b: pair.second.name.clone(),
        }
    }
}

impl fmt::Display for PairingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} vs {} {}",
            self.id_a, self.name_a, self.id_b, self.name_b
        )
    }
}

/// Converts between engine pairs and the caller-facing rows.
pub struct ResultFormatter;

impl ResultFormatter {
    /// Render pairs in the order given.
    pub fn format(pairs: &[Pair]) -> Vec<PairingRow> {
        pairs.iter().map(PairingRow::from).collect()
    }

    pub fn to_tuples(rows: &[PairingRow]) -> Vec<PairingTuple> {
        rows.iter().cloned().map(PairingRow::into_tuple).collect()
    }

    /// Read caller tuples back into rows, rejecting anything that could not
    /// have come out of a single round: a player paired with themselves or
    /// appearing in two rows.
    pub fn parse(tuples: Vec<PairingTuple>) -> Result<Vec<PairingRow>, InvalidInput> {
        let mut seen = HashSet::new();
        tuples
            .into_iter()
            .map(|tuple| {
                let row = PairingRow::from(tuple);
                if row.id_a == row.id_b {
                    return Err(InvalidInput::SelfPairing(row.id_a));
                }
                for id in [row.id_a, row.id_b] {
                    if !seen.insert(id) {
                        return Err(InvalidInput::DuplicatePlayer(id));
                    }
                }
                Ok(row)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
