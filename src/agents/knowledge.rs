//! Accumulated letter knowledge for one game
//!
//! Every (letter, position) cell holds at most one [`Mark`]:
//! - `Here` (class 0): the letter is confirmed at this position
//! - `Elsewhere` (class 1): the letter is in the word, but not at this position
//! - `Absent` (class 2): a guess of this letter found no unclaimed copy left in the
//!   answer; every cell not already `Here`/`Elsewhere` gets it, so the cell says
//!   nothing about the letter's own position
//!
//! A letter whose every cell is `Absent` is known not to be in the answer at all.

use crate::core::{ALPHABET_SIZE, Feedback, GameError, alphabet, letter_to_index};
use std::collections::BTreeSet;

/// Knowledge about one letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Here,
    Elsewhere,
    Absent,
}

impl Mark {
    /// `Here` or `Elsewhere`
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Here | Self::Elsewhere)
    }
}

/// Feedback tracker: the 26 x `word_length` table of marks for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterKnowledge {
    word_length: usize,
    cells: Vec<Option<Mark>>,
    guessed: BTreeSet<char>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            cells: vec![None; ALPHABET_SIZE * word_length],
            guessed: BTreeSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Fold the feedback for one guess into the table
    ///
    /// Must be called once per guess, in guess order, with the game's answer.
    ///
    /// Per-letter classes come from [`Feedback::calculate`]. Exact matches are applied
    /// first, so a letter guessed more often than it occurs in the answer keeps its
    /// `Here`/`Elsewhere` cells and only the rest of its row turns `Absent`.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if either word has the wrong length and
    /// `GameError::InvalidLetter` for characters outside `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::agents::{LetterKnowledge, Mark};
    ///
    /// let mut knowledge = LetterKnowledge::new(5);
    /// knowledge.update("SPEED", "ABIDE").unwrap();
    ///
    /// assert_eq!(knowledge.mark('E', 2), Some(Mark::Elsewhere));
    /// assert_eq!(knowledge.mark('E', 3), Some(Mark::Absent));
    /// assert!(knowledge.known_letters().contains(&'E'));
    /// assert!(!knowledge.known_not_letters().contains(&'E'));
    /// ```
    pub fn update(&mut self, guess: &str, answer: &str) -> Result<(), GameError> {
        let letters = self.letter_indices(guess)?;
        self.letter_indices(answer)?;

        let row = Feedback::calculate(guess, answer);
        self.guessed.extend(guess.chars());

        // Exact matches first, so later `Absent` marks cannot land on them
        for (pos, (&letter, &feedback)) in letters.iter().zip(&row).enumerate() {
            if feedback == Feedback::Correct {
                self.set(letter, pos, Mark::Here);
                self.clear_absent(letter);
            }
        }

        for (pos, (&letter, &feedback)) in letters.iter().zip(&row).enumerate() {
            match feedback {
                Feedback::Correct => {}
                Feedback::Present => {
                    self.set(letter, pos, Mark::Elsewhere);
                    self.clear_absent(letter);
                }
                Feedback::Absent => self.mark_absent(letter),
            }
        }

        Ok(())
    }

    /// Mark for `letter` at `position`, if any
    ///
    /// Returns `None` for unknown cells, non-letters and out-of-range positions.
    #[must_use]
    pub fn mark(&self, letter: char, position: usize) -> Option<Mark> {
        let letter = letter_to_index(letter).ok()?;
        if position >= self.word_length {
            return None;
        }
        self.cells[self.cell(letter, position)]
    }

    /// Letters known to be in the answer, alphabetically
    #[must_use]
    pub fn known_letters(&self) -> Vec<char> {
        alphabet()
            .enumerate()
            .filter(|&(letter, _)| self.row(letter).iter().flatten().any(|m| m.is_present()))
            .map(|(_, c)| c)
            .collect()
    }

    /// Letters known not to be in the answer, alphabetically
    #[must_use]
    pub fn known_not_letters(&self) -> Vec<char> {
        alphabet()
            .enumerate()
            .filter(|&(letter, _)| {
                self.word_length > 0
                    && self.row(letter).iter().all(|m| *m == Some(Mark::Absent))
            })
            .map(|(_, c)| c)
            .collect()
    }

    /// Confirmed letter per position, `None` where unconfirmed
    ///
    /// # Errors
    /// Returns `GameError::ConflictingPosition` if two different letters are confirmed
    /// at the same position, which means feedback for different answers was mixed.
    pub fn known_letters_and_positions(&self) -> Result<Vec<Option<char>>, GameError> {
        let mut slots: Vec<Option<char>> = vec![None; self.word_length];

        for (letter, c) in alphabet().enumerate() {
            for (position, slot) in slots.iter_mut().enumerate() {
                if self.cells[self.cell(letter, position)] != Some(Mark::Here) {
                    continue;
                }
                match *slot {
                    Some(first) => {
                        return Err(GameError::ConflictingPosition {
                            position,
                            first,
                            second: c,
                        });
                    }
                    None => *slot = Some(c),
                }
            }
        }

        Ok(slots)
    }

    /// Letters that appeared in at least one guess
    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Letters never guessed so far
    #[must_use]
    pub fn unguessed_letters(&self) -> BTreeSet<char> {
        alphabet().filter(|c| !self.guessed.contains(c)).collect()
    }

    fn letter_indices(&self, word: &str) -> Result<Vec<usize>, GameError> {
        let indices = word
            .chars()
            .map(letter_to_index)
            .collect::<Result<Vec<_>, _>>()?;

        if indices.len() == self.word_length {
            Ok(indices)
        } else {
            Err(GameError::LengthMismatch {
                expected: self.word_length,
                actual: indices.len(),
            })
        }
    }

    #[inline]
    const fn cell(&self, letter: usize, position: usize) -> usize {
        letter * self.word_length + position
    }

    fn row(&self, letter: usize) -> &[Option<Mark>] {
        let start = self.cell(letter, 0);
        &self.cells[start..start + self.word_length]
    }

    fn row_mut(&mut self, letter: usize) -> &mut [Option<Mark>] {
        let start = self.cell(letter, 0);
        let end = start + self.word_length;
        &mut self.cells[start..end]
    }

    fn set(&mut self, letter: usize, position: usize, mark: Mark) {
        let cell = self.cell(letter, position);
        self.cells[cell] = Some(mark);
    }

    /// The letter is in the word, so no cell of it can stay `Absent`
    fn clear_absent(&mut self, letter: usize) {
        for cell in self.row_mut(letter) {
            if *cell == Some(Mark::Absent) {
                *cell = None;
            }
        }
    }

    /// Rule the letter out on every cell not already confirmed present
    fn mark_absent(&mut self, letter: usize) {
        for cell in self.row_mut(letter) {
            if !cell.is_some_and(Mark::is_present) {
                *cell = Some(Mark::Absent);
            }
        }
    }
}
