//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{GameRecord, SessionStatistics, Turn, play_game, play_games};
