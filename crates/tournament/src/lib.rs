//! Tournament runner for Swiss-system events
//!
//! This crate provides infrastructure for:
//! - Registering players and recording results per tournament
//! - Pairing the next round through `swiss_core`, byes included
//! - Playing several rounds against an outcome oracle
//!
//! # Usage
//!
//! ```bash
//! # Create a tournament and register players
//! cargo run -p tournament -- create "Club night"
//! cargo run -p tournament -- register 1 Ann Bo Cleo
//!
//! # Pair the next round, then report a result
//! cargo run -p tournament -- pair 1
//! cargo run -p tournament -- report 1 --winner 1 --loser 2
//! ```

mod config;
mod memory_store;
mod report;
mod rounds;
mod runner;
mod store;

pub use config::*;
pub use memory_store::*;
pub use report::*;
pub use rounds::*;
pub use runner::*;
pub use store::*;
