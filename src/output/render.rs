//! Coloured rendering of guesses for the terminal

use crate::core::Feedback;
use colored::{Color, Colorize};

/// Background colour used for one letter's feedback
#[must_use]
pub const fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::White,
    }
}

/// Text colour for a row: white within the guess budget, red beyond it
#[must_use]
pub const fn text_color(n_guesses: usize, max_guesses: usize) -> Color {
    if n_guesses <= max_guesses {
        Color::BrightWhite
    } else {
        Color::BrightRed
    }
}

fn cell(text: &str, foreground: Color, background: Color) -> String {
    format!(" {text} ")
        .color(foreground)
        .on_color(background)
        .to_string()
}

/// Render one guess, coloured against the answer
///
/// The row starts with the guess number, then one cell per letter. When
/// `n_possibilities` is given it is appended, e.g. the candidate-pool size.
///
/// # Examples
/// ```
/// use wordle_gym::output::render_guess;
///
/// colored::control::set_override(false);
/// assert_eq!(
///     render_guess("SPEED", "ABIDE", 1, 5, Some(4)),
///     " 1 :  S  P  E  E  D  4"
/// );
/// ```
#[must_use]
pub fn render_guess(
    guess: &str,
    answer: &str,
    n_guesses: usize,
    max_guesses: usize,
    n_possibilities: Option<usize>,
) -> String {
    let foreground = text_color(n_guesses, max_guesses);
    let mut output = cell(&format!("{n_guesses} :"), foreground, Color::Black);

    for (letter, feedback) in guess.chars().zip(Feedback::calculate(guess, answer)) {
        output.push_str(&cell(
            &letter.to_string(),
            foreground,
            feedback_color(feedback),
        ));
    }

    if let Some(count) = n_possibilities {
        output.push_str(&format!(" {count}"));
    }

    output
}

/// Header label above the candidate-pool column
pub const POSSIBILITIES_LABEL: &str = " No. possibilities";

/// Header row revealing the answer in dark cells
#[must_use]
pub fn render_answer(answer: &str) -> String {
    let mut output = String::from("     ");
    for letter in answer.chars() {
        output.push_str(&cell(&letter.to_string(), Color::BrightWhite, Color::Black));
    }
    output
}

/// Header row hiding the answer
#[must_use]
pub fn render_hidden(word_length: usize) -> String {
    let mut output = String::from("     ");
    for _ in 0..word_length {
        output.push_str(&cell("?", Color::BrightWhite, Color::Black));
    }
    output
}
