//! Human player reading guesses from a text stream

use super::strategy::Agent;
use crate::core::GameError;
use crate::environment::TimeStep;
use std::io::{BufRead, Write};

/// Player that asks a human for every guess
///
/// Guesses are trimmed and upper-cased. Words of the wrong length and words outside
/// the vocabulary are rejected with a new prompt, so only valid guesses reach the
/// environment.
pub struct HumanAgent<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn prompt(&mut self, message: &str) -> Result<String, GameError> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(GameError::InputClosed);
        }

        Ok(input.trim().to_uppercase())
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_action(&mut self, timestep: &TimeStep) -> Result<String, GameError> {
        let words = &timestep.state.words;
        let expected = words.word_length();

        let mut action = self.prompt("Guess: ")?;
        loop {
            let actual = action.chars().count();
            let message = if actual != expected {
                format!("Expected a word of length {expected}, got {actual}. Try again: ")
            } else if !words.contains(&action) {
                format!("{action} is not a valid word. Try again: ")
            } else {
                return Ok(action);
            };
            action = self.prompt(&message)?;
        }
    }

    fn update(&mut self, _timestep: &TimeStep, _action: &str) -> Result<(), GameError> {
        Ok(())
    }
}
