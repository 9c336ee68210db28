//! Benchmark command
//!
//! Plays many games silently and measures how the player fares.

use super::play::{SessionStatistics, play_game};
use crate::agents::Agent;
use crate::core::GameError;
use crate::environment::Environment;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub statistics: SessionStatistics,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `n_games` games without rendering them
///
/// Progress is shown on a progress bar; the environment is reset after each game.
///
/// # Errors
///
/// Returns the first `GameError` raised while playing.
pub fn run_benchmark<R, A>(
    env: &mut Environment<R>,
    agent: &mut A,
    n_games: usize,
) -> Result<BenchmarkResult, GameError>
where
    R: Rng,
    A: Agent + ?Sized,
{
    let pb = ProgressBar::new(n_games as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut statistics = SessionStatistics::default();

    for _ in 0..n_games {
        let record = play_game(env, agent, |_| {})?;
        pb.set_message(format!("{} in {}", record.answer, record.num_guesses()));
        pb.inc(1);

        statistics.games.push(record);
        env.reset();
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let seconds = duration.as_secs_f64();
    let games_per_second = if seconds > 0.0 {
        n_games as f64 / seconds
    } else {
        0.0
    };
    debug!("Benchmarked {n_games} games in {seconds:.3}s");

    Ok(BenchmarkResult {
        statistics,
        duration,
        games_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::core::Vocabulary;
    use crate::wordlists::{EMBEDDED, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(max_guesses: usize) -> (Environment<StdRng>, RandomAgent<StdRng>) {
        let words = Vocabulary::new(words_from_slice(&EMBEDDED[..60], 5)).unwrap();
        let env = Environment::new(words, max_guesses, StdRng::seed_from_u64(1000)).unwrap();
        (env, RandomAgent::new(StdRng::seed_from_u64(2000)))
    }

    #[test]
    fn benchmark_runs() {
        let (mut env, mut agent) = setup(6);
        let result = run_benchmark(&mut env, &mut agent, 20).unwrap();

        assert_eq!(result.statistics.total_games(), 20);
        assert!(result.games_per_second >= 0.0);
        for game in &result.statistics.games {
            assert!((1..=6).contains(&game.num_guesses()));
        }
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let (mut env, mut agent) = setup(5);
        let result = run_benchmark(&mut env, &mut agent, 30).unwrap();

        let distribution_sum: usize = result.statistics.guess_distribution().values().sum();
        assert_eq!(distribution_sum, result.statistics.wins());
    }

    #[test]
    fn benchmark_no_games() {
        let (mut env, mut agent) = setup(5);
        let result = run_benchmark(&mut env, &mut agent, 0).unwrap();

        assert_eq!(result.statistics.total_games(), 0);
        assert_eq!(result.statistics.average_guesses_to_win(), None);
    }

    #[test]
    fn benchmark_matches_rendered_session() {
        use crate::commands::play::play_games;
        use crate::config::SessionConfig;

        let (mut env, mut agent) = setup(5);
        let silent = run_benchmark(&mut env, &mut agent, 10).unwrap();

        let (mut env, mut agent) = setup(5);
        let config = SessionConfig {
            n_games: 10,
            ..SessionConfig::default()
        };
        let rendered = play_games(&mut env, &mut agent, &config).unwrap();

        assert_eq!(silent.statistics, rendered);
    }
}
