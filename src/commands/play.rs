//! Playing sessions of games
//!
//! Drives the alternation between the environment and a player, one game at a time.

use crate::agents::Agent;
use crate::config::SessionConfig;
use crate::core::{Feedback, GameError};
use crate::environment::{Environment, Reward};
use crate::output::{POSSIBILITIES_LABEL, render_answer, render_guess, render_hidden};
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;

/// What a driver sees after every guess
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub guess: &'a str,
    pub answer: &'a str,
    /// Guess number, starting at 1
    pub n_guesses: usize,
    pub max_guesses: usize,
    /// Pool size the guess was drawn from, for players that keep one
    pub candidates: Option<usize>,
}

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub answer: String,
    pub guesses: Vec<String>,
    pub reward: Reward,
}

impl GameRecord {
    #[must_use]
    pub fn won(&self) -> bool {
        self.reward == Reward::Win
    }

    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    /// One emoji row per guess, as shared after a game
    #[must_use]
    pub fn emoji_grid(&self) -> String {
        self.guesses
            .iter()
            .map(|guess| Feedback::to_emoji(&Feedback::calculate(guess, &self.answer)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Results of a session of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    pub games: Vec<GameRecord>,
}

impl SessionStatistics {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.games.iter().filter(|g| g.won()).count()
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.total_games() - self.wins()
    }

    /// Fraction of games won, 0 for an empty session
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            self.wins() as f64 / self.total_games() as f64
        }
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses_to_win(&self) -> Option<f64> {
        let wins = self.wins();
        if wins == 0 {
            return None;
        }
        let total: usize = self
            .games
            .iter()
            .filter(|g| g.won())
            .map(GameRecord::num_guesses)
            .sum();
        Some(total as f64 / wins as f64)
    }

    /// Number of won games by guess count
    #[must_use]
    pub fn guess_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for game in self.games.iter().filter(|g| g.won()) {
            *distribution.entry(game.num_guesses()).or_insert(0) += 1;
        }
        distribution
    }
}

/// Header row for the environment's current game
///
/// Labels the pool-size column when the player reports one.
fn session_header<R: Rng>(env: &Environment<R>, show_answer: bool, with_pool: bool) -> String {
    let mut header = if show_answer {
        render_answer(env.answer())
    } else {
        render_hidden(env.words().word_length())
    };
    if with_pool {
        header.push_str(POSSIBILITIES_LABEL);
    }
    header
}

/// Play the environment's current game to the end
///
/// Every timestep, including the terminal one, is handed back to the player.
/// `on_turn` is called after each guess. The environment is not reset.
///
/// # Errors
///
/// Returns a `GameError` if the player fails to produce a guess or to absorb
/// feedback, or if the environment's game had already ended.
pub fn play_game<R, A, F>(
    env: &mut Environment<R>,
    agent: &mut A,
    mut on_turn: F,
) -> Result<GameRecord, GameError>
where
    R: Rng,
    A: Agent + ?Sized,
    F: FnMut(&Turn<'_>),
{
    let answer = env.answer().to_string();
    let mut guesses = Vec::new();
    let mut timestep = env.start();

    loop {
        let action = agent.select_action(&timestep)?;
        let candidates = agent.candidate_count();

        timestep = env.step(&action)?;

        on_turn(&Turn {
            guess: &action,
            answer: &answer,
            n_guesses: timestep.state.n_guesses,
            max_guesses: env.max_guesses(),
            candidates,
        });

        agent.update(&timestep, &action)?;
        guesses.push(action);

        if timestep.is_terminal() {
            return Ok(GameRecord {
                answer,
                guesses,
                reward: timestep.reward,
            });
        }
    }
}

/// Play `config.n_games` games, logging every guess
///
/// The environment is reset after each game.
///
/// # Errors
///
/// Returns the first `GameError` raised by [`play_game`].
pub fn play_games<R, A>(
    env: &mut Environment<R>,
    agent: &mut A,
    config: &SessionConfig,
) -> Result<SessionStatistics, GameError>
where
    R: Rng,
    A: Agent + ?Sized,
{
    let mut statistics = SessionStatistics::default();

    for n in 0..config.n_games {
        info!("\nGame {}/{}", n + 1, config.n_games);

        info!(
            "{}",
            session_header(env, config.show_answer, agent.tracks_candidates())
        );

        let record = play_game(env, agent, |turn| {
            info!(
                "{}",
                render_guess(
                    turn.guess,
                    turn.answer,
                    turn.n_guesses,
                    turn.max_guesses,
                    turn.candidates,
                )
            );
        })?;

        if record.won() {
            info!("You win!");
        } else {
            info!(
                "You lose - better luck next time! Answer {}",
                record.answer
            );
        }

        debug!("{}", record.emoji_grid());

        statistics.games.push(record);
        env.reset();
    }

    Ok(statistics)
}
