//! Session configuration and defaults

use rand::Rng;
use thiserror::Error;

/// Default seed for the environment's answer draws
pub const SEED_ENV: i64 = 1000;
/// Default seed for the agent's guess draws
pub const SEED_AGENT: i64 = 2000;
/// Default number of games per session
pub const N_GAMES: usize = 5;
/// Default guess budget per game
pub const MAX_GUESSES: usize = 5;
/// Default word length
pub const WORD_LENGTH: usize = 5;

/// Seed value asking for a randomly drawn seed
pub const RANDOM_SEED: i64 = -1;

/// Upper bound (exclusive) for randomly drawn seeds
const RANDOM_SEED_LIMIT: u64 = 9999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("seed must be non-negative or {RANDOM_SEED} for a random seed, got {0}")]
    NegativeSeed(i64),
}

/// Turn a command-line seed into a concrete one
///
/// `-1` draws a seed in `0..9999` from `rng`; other values are used as given.
///
/// # Errors
/// Returns `ConfigError::NegativeSeed` for negative values other than `-1`.
pub fn resolve_seed<R: Rng>(seed: i64, rng: &mut R) -> Result<u64, ConfigError> {
    match seed {
        RANDOM_SEED => Ok(rng.random_range(0..RANDOM_SEED_LIMIT)),
        seed => u64::try_from(seed).map_err(|_| ConfigError::NegativeSeed(seed)),
    }
}

/// How a session of games is played and reported
///
/// The guess budget belongs to the [`Environment`](crate::environment::Environment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub n_games: usize,
    /// Reveal the answer in each game's header row
    pub show_answer: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            n_games: N_GAMES,
            show_answer: true,
        }
    }
}
