//! Candidate-selecting player
//!
//! Keeps the pool of vocabulary words consistent with every piece of feedback seen in
//! the current game and guesses uniformly at random from it.

use super::filter::Constraints;
use super::knowledge::LetterKnowledge;
use super::strategy::Agent;
use crate::core::{GameError, Vocabulary};
use crate::environment::TimeStep;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Random guesser over the words that fit the feedback so far
pub struct RandomAgent<R: Rng> {
    rng: R,
    game: Option<GameMemory>,
}

/// Per-game state, created lazily from the first timestep seen
struct GameMemory {
    words: Vocabulary,
    /// Indices into `words`
    pool: Vec<usize>,
    knowledge: LetterKnowledge,
}

impl GameMemory {
    fn new(words: &Vocabulary) -> Self {
        Self {
            words: words.clone(),
            pool: (0..words.len()).collect(),
            knowledge: LetterKnowledge::new(words.word_length()),
        }
    }
}

impl<R: Rng> RandomAgent<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng, game: None }
    }

    /// Words still considered possible answers, in vocabulary order
    ///
    /// Empty until the agent has seen its first timestep.
    #[must_use]
    pub fn possible_words(&self) -> Vec<&str> {
        self.game.as_ref().map_or_else(Vec::new, |game| {
            game.pool
                .iter()
                .filter_map(|&index| game.words.get(index))
                .collect()
        })
    }

    /// Letter knowledge gathered in the current game
    #[must_use]
    pub fn knowledge(&self) -> Option<&LetterKnowledge> {
        self.game.as_ref().map(|game| &game.knowledge)
    }

    /// Start a fresh game memory on first use or when the vocabulary changes
    fn sync(&mut self, words: &Vocabulary) {
        if !self.game.as_ref().is_some_and(|game| game.words.ptr_eq(words)) {
            self.game = Some(GameMemory::new(words));
        }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_action(&mut self, timestep: &TimeStep) -> Result<String, GameError> {
        self.sync(&timestep.state.words);
        let game = self.game.as_mut().ok_or(GameError::EmptyCandidatePool)?;

        let &index = game
            .pool
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyCandidatePool)?;

        game.words
            .get(index)
            .map(str::to_string)
            .ok_or(GameError::EmptyCandidatePool)
    }

    fn update(&mut self, timestep: &TimeStep, action: &str) -> Result<(), GameError> {
        if timestep.is_terminal() {
            self.game = Some(GameMemory::new(&timestep.state.words));
            debug!("Game over, candidate pool reset");
            return Ok(());
        }

        self.sync(&timestep.state.words);
        let game = self.game.as_mut().ok_or(GameError::EmptyCandidatePool)?;
        game.knowledge.update(action, &timestep.state.answer)?;

        let constraints = Constraints::from_knowledge(&game.knowledge)?;
        let words = &game.words;
        let before = game.pool.len();
        game.pool.retain(|&index| {
            words
                .get(index)
                .is_some_and(|word| word != action && constraints.is_possible(word))
        });

        debug!(
            "Guess {action}: candidate pool {before} -> {}",
            game.pool.len()
        );

        Ok(())
    }

    fn tracks_candidates(&self) -> bool {
        true
    }

    fn candidate_count(&self) -> Option<usize> {
        self.game.as_ref().map(|game| game.pool.len())
    }
}
