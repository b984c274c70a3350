//! Swiss-system pairing core
//!
//! Given standings (best first) and the set of pairs that have already met,
//! this crate decides the next round:
//! - [`ByeSelector`] takes one low-ranked player out of an odd field
//! - [`PairingEngine`] pairs the rest without rematches, closest ranks first
//! - [`ResultFormatter`] turns pairs into `(id_a, name_a, id_b, name_b)` rows
//!
//! Storage is not this crate's concern: callers pass a consistent snapshot in
//! and persist the bye and results themselves.
//!
//! # Usage
//!
//! ```
//! use swiss_core::{MatchHistorySet, MatchRecord, Pairer, PlayerId, Standing};
//! use rand::SeedableRng;
//!
//! let standings: Vec<Standing> = (1..=4)
//!     .map(|id| Standing::new(PlayerId(id), "p"))
//!     .collect();
//! let history = MatchHistorySet::from_records(&[MatchRecord::new(PlayerId(1), PlayerId(2))]);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let round = Pairer::default().next_round(&standings, &history, &mut rng).unwrap();
//! assert_eq!(round.pairs.len(), 2);
//! assert!(round.bye.is_none());
//! ```

mod bye;
mod error;
mod format;
mod history;
mod pairing;
mod round;
mod types;

pub use bye::*;
pub use error::*;
pub use format::*;
pub use history::*;
pub use pairing::*;
pub use round::*;
pub use types::*;
