//! Word lists for the game
//!
//! Provides the embedded default vocabulary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
