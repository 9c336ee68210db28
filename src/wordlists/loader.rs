//! Word list loading utilities
//!
//! Turns raw newline-delimited lists into the uppercase, single-length word lists the
//! game expects.

use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `word_length` letters from a file
///
/// Lines are trimmed; blank lines, words of other lengths and words with non-letter
/// characters are skipped. Words are upper-cased and de-duplicated, keeping file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_gym::wordlists::loader::load_from_file;
///
/// let words = load_from_file("all_words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = filter_words(content.lines(), word_length);

    debug!(
        "Loaded {} words of length {word_length} from {}",
        words.len(),
        path.as_ref().display()
    );

    Ok(words)
}

/// Apply the same filtering to an in-memory list
///
/// # Examples
/// ```
/// use wordle_gym::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "bye", "Slate"], 5);
/// assert_eq!(words, vec!["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<String> {
    filter_words(slice.iter().copied(), word_length)
}

fn filter_words<'a>(lines: impl Iterator<Item = &'a str>, word_length: usize) -> Vec<String> {
    let mut seen = FxHashSet::default();

    lines
        .map(str::trim)
        .filter(|word| {
            !word.is_empty()
                && word.len() == word_length
                && word.chars().all(|c| c.is_ascii_alphabetic())
        })
        .map(str::to_ascii_uppercase)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
