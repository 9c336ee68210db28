//! Wordle Gym
//!
//! A Wordle environment in the style of a reinforcement-learning gym, with a random
//! candidate-filtering player and a human player.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_gym::agents::RandomAgent;
//! use wordle_gym::commands::play_game;
//! use wordle_gym::core::Vocabulary;
//! use wordle_gym::environment::Environment;
//! use wordle_gym::wordlists::{EMBEDDED, loader::words_from_slice};
//!
//! let words = Vocabulary::new(words_from_slice(EMBEDDED, 5)).unwrap();
//! let mut env = Environment::new(words, 6, StdRng::seed_from_u64(1000)).unwrap();
//! let mut agent = RandomAgent::new(StdRng::seed_from_u64(2000));
//!
//! let record = play_game(&mut env, &mut agent, |turn| println!("{}", turn.guess)).unwrap();
//! println!("{:?} in {} guesses", record.reward, record.num_guesses());
//! ```

// Core domain types
pub mod core;

// Game environment
pub mod environment;

// Players
pub mod agents;

// Word lists
pub mod wordlists;

// Defaults and session settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
