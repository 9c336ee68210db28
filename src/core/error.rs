//! Error type shared by the game environment and its players

use std::io;
use thiserror::Error;

/// Everything that can go wrong inside a game
///
/// A guess that is not in the vocabulary is deliberately absent: the environment
/// treats it as a losing move, not as an error.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("'{0}' is not an uppercase ASCII letter")]
    InvalidLetter(char),

    #[error("letter index {0} is outside 0..26")]
    InvalidLetterIndex(usize),

    #[error("expected a word of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("vocabulary word '{0}' must contain only uppercase ASCII letters")]
    InvalidWord(String),

    #[error("vocabulary words must all have length {expected}, found '{word}'")]
    MixedWordLengths { expected: usize, word: String },

    #[error("at least one guess must be allowed per game")]
    InvalidMaxGuesses,

    #[error("the game has ended; reset the environment to play again")]
    GameFinished,

    /// Two different letters confirmed at the same position.
    ///
    /// Only reachable when feedback from different answers is mixed into one tracker.
    #[error("letters {first} and {second} are both confirmed at position {position}")]
    ConflictingPosition {
        position: usize,
        first: char,
        second: char,
    },

    #[error("no candidate words remain")]
    EmptyCandidatePool,

    #[error("input closed before a guess was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
