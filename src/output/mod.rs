//! Terminal output formatting
//!
//! Coloured game rows and pretty-printed session results.

pub mod display;
pub mod formatters;
pub mod render;

pub use display::{print_benchmark_result, print_session_statistics};
pub use render::{
    POSSIBILITIES_LABEL, feedback_color, render_answer, render_guess, render_hidden, text_color,
};
