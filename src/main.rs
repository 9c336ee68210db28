//! Wordle Gym - CLI
//!
//! Plays sessions of Wordle with a random candidate-filtering player or a human.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use wordle_gym::{
    agents::{HumanAgent, RandomAgent},
    commands::{play_games, run_benchmark},
    config::{self, SessionConfig, resolve_seed},
    core::Vocabulary,
    environment::Environment,
    output::{print_benchmark_result, print_session_statistics},
    wordlists::{
        EMBEDDED,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_gym",
    about = "Wordle environment with random and human players",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default, built-in five-letter words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the answer draws, -1 for a random seed
    #[arg(long, global = true, default_value_t = config::SEED_ENV, allow_negative_numbers = true)]
    seed_env: i64,

    /// Seed for the player's guesses, -1 for a random seed
    #[arg(long, global = true, default_value_t = config::SEED_AGENT, allow_negative_numbers = true)]
    seed_agent: i64,

    /// Number of games to play
    #[arg(short = 'n', long, global = true, default_value_t = config::N_GAMES)]
    n_games: usize,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = config::MAX_GUESSES)]
    max_guesses: usize,

    /// Length of the words in play
    #[arg(long, global = true, default_value_t = config::WORD_LENGTH)]
    word_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// The random player plays, every guess rendered with its pool size
    Random,

    /// Play yourself, reading guesses from stdin
    Human {
        /// Reveal the answer above each game
        #[arg(short, long)]
        show: bool,
    },

    /// The random player plays silently; prints statistics
    Benchmark,
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist: &str, word_length: usize) -> Result<Vocabulary> {
    let words = match wordlist {
        "embedded" => words_from_slice(EMBEDDED, word_length),
        path => load_from_file(path, word_length)
            .with_context(|| format!("Failed to read word list {path}"))?,
    };

    Vocabulary::new(words)
        .with_context(|| format!("No usable words of length {word_length} in {wordlist}"))
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .target(Target::Stdout)
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let words = load_vocabulary(&cli.wordlist, cli.word_length)?;
    info!("Vocabulary: {words}");

    let mut seed_rng = rand::rng();
    let seed_env = resolve_seed(cli.seed_env, &mut seed_rng)?;
    let seed_agent = resolve_seed(cli.seed_agent, &mut seed_rng)?;
    info!("Seed environment: {seed_env}, seed agent: {seed_agent}");

    let mut env = Environment::new(words, cli.max_guesses, StdRng::seed_from_u64(seed_env))?;

    match cli.command {
        Commands::Random => {
            let config = SessionConfig {
                n_games: cli.n_games,
                show_answer: true,
            };
            let mut agent = RandomAgent::new(StdRng::seed_from_u64(seed_agent));
            let statistics = play_games(&mut env, &mut agent, &config)?;
            print_session_statistics(&statistics);
        }
        Commands::Human { show } => {
            let config = SessionConfig {
                n_games: cli.n_games,
                show_answer: show,
            };
            let mut agent = HumanAgent::new(io::stdin().lock(), io::stdout());
            let statistics = play_games(&mut env, &mut agent, &config)?;
            print_session_statistics(&statistics);
        }
        Commands::Benchmark => {
            info!("Running benchmark on {} games...", cli.n_games);
            let mut agent = RandomAgent::new(StdRng::seed_from_u64(seed_agent));
            let result = run_benchmark(&mut env, &mut agent, cli.n_games)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
