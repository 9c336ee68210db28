//! Players for the Wordle environment
//!
//! This module contains the player capability and the players built on it.

pub mod filter;
mod human;
mod knowledge;
mod random;
mod strategy;

pub use filter::{Constraints, is_possible_word};
pub use human::HumanAgent;
pub use knowledge::{LetterKnowledge, Mark};
pub use random::RandomAgent;
pub use strategy::Agent;
