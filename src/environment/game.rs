//! Turn-based Wordle game state machine

use super::state::{Reward, State, StepType, TimeStep};
use crate::core::{GameError, Vocabulary};
use log::debug;
use rand::Rng;

/// The game environment
///
/// Owns the answer, the guess counter and the random source used to draw answers.
/// It is the only writer of game state; players see snapshots inside timesteps.
pub struct Environment<R: Rng> {
    words: Vocabulary,
    answer: String,
    max_guesses: usize,
    n_guesses: usize,
    finished: bool,
    rng: R,
}

impl<R: Rng> Environment<R> {
    /// Create an environment and draw the first answer
    ///
    /// # Errors
    /// Returns `GameError::InvalidMaxGuesses` if `max_guesses` is zero.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_gym::core::Vocabulary;
    /// use wordle_gym::environment::{Environment, Reward, StepType};
    ///
    /// let words = Vocabulary::new(vec!["CRANE".to_string()]).unwrap();
    /// let mut env = Environment::new(words, 5, StdRng::seed_from_u64(0)).unwrap();
    ///
    /// let timestep = env.step("CRANE").unwrap();
    /// assert_eq!(timestep.step, StepType::End);
    /// assert_eq!(timestep.reward, Reward::Win);
    /// ```
    pub fn new(words: Vocabulary, max_guesses: usize, mut rng: R) -> Result<Self, GameError> {
        if max_guesses == 0 {
            return Err(GameError::InvalidMaxGuesses);
        }

        let answer = draw_answer(&words, &mut rng);
        debug!("Environment created over {words}, max {max_guesses} guesses");

        Ok(Self {
            words,
            answer,
            max_guesses,
            n_guesses: 0,
            finished: false,
            rng,
        })
    }

    /// Current state snapshot
    #[must_use]
    pub fn state(&self) -> State {
        State {
            words: self.words.clone(),
            answer: self.answer.clone(),
            n_guesses: self.n_guesses,
        }
    }

    /// The `Start` timestep for the current game, without changing anything
    #[must_use]
    pub fn start(&self) -> TimeStep {
        TimeStep::new(self.state(), StepType::Start, Reward::Draw)
    }

    /// Play one guess
    ///
    /// Guessing the answer wins. Running out of guesses or guessing a word outside the
    /// vocabulary loses. Anything else continues the game.
    ///
    /// # Errors
    /// Returns `GameError::GameFinished` if the game already ended; call
    /// [`Environment::reset`] first.
    pub fn step(&mut self, action: &str) -> Result<TimeStep, GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }

        self.n_guesses += 1;

        let (step, reward) = if action == self.answer {
            (StepType::End, Reward::Win)
        } else if self.n_guesses >= self.max_guesses || !self.words.contains(action) {
            (StepType::End, Reward::Lose)
        } else {
            (StepType::Step, Reward::Draw)
        };

        self.finished = step == StepType::End;

        Ok(TimeStep::new(self.state(), step, reward))
    }

    /// Start a new game with a freshly drawn answer
    pub fn reset(&mut self) -> TimeStep {
        self.answer = draw_answer(&self.words, &mut self.rng);
        self.n_guesses = 0;
        self.finished = false;
        debug!("Environment reset");

        self.start()
    }

    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn n_guesses(&self) -> usize {
        self.n_guesses
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &Vocabulary {
        &self.words
    }

    /// Whether the current game has ended
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

fn draw_answer<R: Rng>(words: &Vocabulary, rng: &mut R) -> String {
    let index = rng.random_range(0..words.len());
    words.as_slice()[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            ["CRANE", "SLATE", "ABIDE", "SPEED", "IRATE"]
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        )
        .unwrap()
    }

    fn environment(max_guesses: usize) -> Environment<StdRng> {
        Environment::new(vocabulary(), max_guesses, StdRng::seed_from_u64(1000)).unwrap()
    }

    fn wrong_word(env: &Environment<StdRng>) -> String {
        env.words()
            .iter()
            .find(|w| *w != env.answer())
            .unwrap()
            .to_string()
    }

    #[test]
    fn zero_max_guesses_rejected() {
        let result = Environment::new(vocabulary(), 0, StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(GameError::InvalidMaxGuesses)));
    }

    #[test]
    fn answer_is_from_vocabulary() {
        let env = environment(5);
        assert!(env.words().contains(env.answer()));
        assert_eq!(env.n_guesses(), 0);
    }

    #[test]
    fn start_timestep_does_not_change_state() {
        let env = environment(5);
        let timestep = env.start();
        assert_eq!(timestep.step, StepType::Start);
        assert_eq!(timestep.reward, Reward::Draw);
        assert_eq!(timestep.state.n_guesses, 0);
        assert_eq!(timestep.state.answer, env.answer());
    }

    #[test]
    fn guessing_answer_wins_at_any_count() {
        for wrong_guesses in 0..4 {
            let mut env = environment(5);
            let wrong = wrong_word(&env);
            for _ in 0..wrong_guesses {
                env.step(&wrong).unwrap();
            }
            let answer = env.answer().to_string();
            let timestep = env.step(&answer).unwrap();
            assert_eq!(timestep.step, StepType::End);
            assert_eq!(timestep.reward, Reward::Win);
            assert_eq!(timestep.state.n_guesses, wrong_guesses + 1);
        }
    }

    #[test]
    fn guessing_answer_on_last_attempt_wins() {
        let mut env = environment(2);
        let wrong = wrong_word(&env);
        env.step(&wrong).unwrap();
        let answer = env.answer().to_string();
        let timestep = env.step(&answer).unwrap();
        assert_eq!(timestep.reward, Reward::Win);
    }

    #[test]
    fn valid_wrong_guess_continues() {
        let mut env = environment(5);
        let wrong = wrong_word(&env);
        let timestep = env.step(&wrong).unwrap();
        assert_eq!(timestep.step, StepType::Step);
        assert_eq!(timestep.reward, Reward::Draw);
        assert_eq!(timestep.state.n_guesses, 1);

        let timestep = env.step(&wrong).unwrap();
        assert_eq!(timestep.state.n_guesses, 2);
    }

    #[test]
    fn unknown_word_loses_immediately() {
        let mut env = environment(5);
        let timestep = env.step("ZZZZZ").unwrap();
        assert_eq!(timestep.step, StepType::End);
        assert_eq!(timestep.reward, Reward::Lose);
    }

    #[test]
    fn unknown_word_on_last_attempt_loses() {
        let mut env = environment(2);
        let wrong = wrong_word(&env);
        env.step(&wrong).unwrap();
        let timestep = env.step("QQQQQ").unwrap();
        assert_eq!(timestep.step, StepType::End);
        assert_eq!(timestep.reward, Reward::Lose);
        assert_eq!(timestep.state.n_guesses, 2);
    }

    #[test]
    fn exhausting_guesses_loses() {
        let mut env = environment(3);
        let wrong = wrong_word(&env);
        assert_eq!(env.step(&wrong).unwrap().step, StepType::Step);
        assert_eq!(env.step(&wrong).unwrap().step, StepType::Step);

        let last = env.step(&wrong).unwrap();
        assert_eq!(last.step, StepType::End);
        assert_eq!(last.reward, Reward::Lose);
        assert!(env.is_finished());
    }

    #[test]
    fn no_transition_out_of_end_without_reset() {
        let mut env = environment(5);
        let answer = env.answer().to_string();
        env.step(&answer).unwrap();

        assert!(matches!(env.step(&answer), Err(GameError::GameFinished)));
        assert_eq!(env.n_guesses(), 1);

        env.reset();
        assert!(env.step("ZZZZZ").is_ok());
    }

    #[test]
    fn reset_twice_gives_two_fresh_starts() {
        let mut env = environment(5);
        let wrong = wrong_word(&env);
        env.step(&wrong).unwrap();

        let first = env.reset();
        let second = env.reset();

        for timestep in [&first, &second] {
            assert_eq!(timestep.step, StepType::Start);
            assert_eq!(timestep.reward, Reward::Draw);
            assert_eq!(timestep.state.n_guesses, 0);
            assert!(timestep.state.words.contains(&timestep.state.answer));
        }
    }

    #[test]
    fn same_seed_same_answers() {
        let mut a = environment(5);
        let mut b = environment(5);
        for _ in 0..10 {
            assert_eq!(a.answer(), b.answer());
            a.reset();
            b.reset();
        }
    }
}
