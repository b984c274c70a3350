//! Runner configuration, read from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swiss_core::{ByePool, Pairer, DEFAULT_MAX_STEPS};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for pairing rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwissConfig {
    /// JSON file holding tournaments, players and results
    pub store_path: PathBuf,
    /// Who may receive the bye in an odd field
    pub bye_pool: ByePool,
    /// Retry with the whole field when the bye pool is used up
    pub widen_bye_pool_on_exhaustion: bool,
    /// Partner choices tried before a round is declared unpairable
    pub max_search_steps: usize,
    /// Fixed seed for bye draws (None = fresh entropy each run)
    pub seed: Option<u64>,
}

impl Default for SwissConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("tournament_store.json"),
            bye_pool: ByePool::LowerHalf,
            widen_bye_pool_on_exhaustion: false,
            max_search_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

impl SwissConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn pairer(&self) -> Pairer {
        Pairer::new(self.bye_pool, self.max_search_steps)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
