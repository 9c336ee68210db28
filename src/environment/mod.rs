//! Wordle game environment
//!
//! The environment hides an answer, counts guesses and reports each transition as a
//! [`TimeStep`].

mod game;
mod state;

pub use game::Environment;
pub use state::{Reward, State, StepType, TimeStep};
