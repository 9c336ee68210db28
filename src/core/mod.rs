//! Core domain types for the Wordle game
//!
//! This module contains the fundamental domain types shared by the environment and the
//! players. Everything here is pure and deterministic.

mod error;
mod feedback;
mod letter;
mod vocabulary;

pub use error::GameError;
pub use feedback::Feedback;
pub use letter::{ALPHABET_SIZE, alphabet, index_to_letter, letter_to_index};
pub use vocabulary::Vocabulary;
