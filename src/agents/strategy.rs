//! Player capability shared by every guessing strategy

use crate::core::GameError;
use crate::environment::TimeStep;

/// A player of the game
///
/// The environment and the player alternate: `select_action` sees the latest
/// timestep and returns a guess, the environment plays it, and `update` receives the
/// resulting timestep together with the guess that produced it.
pub trait Agent {
    /// Choose the next guess
    ///
    /// # Errors
    /// Returns a `GameError` if the player cannot produce a guess.
    fn select_action(&mut self, timestep: &TimeStep) -> Result<String, GameError>;

    /// Learn from the timestep produced by `action`
    ///
    /// # Errors
    /// Returns a `GameError` if the feedback cannot be folded into the player's state.
    fn update(&mut self, timestep: &TimeStep, action: &str) -> Result<(), GameError>;

    /// Whether the player keeps a candidate pool at all
    fn tracks_candidates(&self) -> bool {
        false
    }

    /// Size of the player's candidate pool, for players that keep one
    ///
    /// May be `None` until the player has seen its first timestep.
    fn candidate_count(&self) -> Option<usize> {
        None
    }
}
