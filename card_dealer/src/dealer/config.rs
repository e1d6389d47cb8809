//! Dealer configuration models.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::errors::{DealError, DealResult};

/// Default upper bound on the number of hands dealt per request.
pub const DEFAULT_MAX_PLAYERS: usize = 10_000;

/// Where the shuffle RNG comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleSource {
    /// Fresh generator seeded from the operating system for every deal
    Entropy,
    /// Fixed seed, every deal for the same player count is identical
    Seeded(u64),
}

impl ShuffleSource {
    /// Build a generator for a single deal.
    ///
    /// # Errors
    ///
    /// Returns `DealError::Entropy` if the OS random source cannot be read.
    pub fn rng(&self) -> DealResult<StdRng> {
        match self {
            ShuffleSource::Entropy => {
                StdRng::try_from_os_rng().map_err(|e| DealError::Entropy(e.to_string()))
            }
            ShuffleSource::Seeded(seed) => Ok(StdRng::seed_from_u64(*seed)),
        }
    }
}

impl std::fmt::Display for ShuffleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuffleSource::Entropy => write!(f, "entropy"),
            ShuffleSource::Seeded(seed) => write!(f, "seeded({seed})"),
        }
    }
}

/// Dealer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerConfig {
    /// Largest accepted player count (default: 10,000). Bounds the hands
    /// allocated per request; any count above 52 is otherwise a valid deal.
    pub max_players: usize,

    /// Fixed shuffle seed; `None` seeds from OS entropy per deal
    pub seed: Option<u64>,
}

impl DealerConfig {
    pub fn shuffle_source(&self) -> ShuffleSource {
        self.seed
            .map(ShuffleSource::Seeded)
            .unwrap_or(ShuffleSource::Entropy)
    }
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            seed: None,
        }
    }
}
