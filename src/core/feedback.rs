//! Per-letter Wordle feedback for a single guess
//!
//! Each guessed letter is classified as:
//! - Correct (letter in the answer at this position)
//! - Present (letter in the answer, elsewhere)
//! - Absent (letter not in the answer, or every occurrence already accounted for)

use rustc_hash::FxHashMap;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Calculate the feedback row when `guess` is played against `answer`
    ///
    /// Duplicate letters are handled the way Wordle does: exact matches claim their
    /// answer letters first, then the remaining occurrences are handed out to
    /// misplaced letters from left to right.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position letters from the remaining pool
    ///
    /// Both words are expected to have the same length; extra letters in the longer
    /// word are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::core::Feedback;
    ///
    /// let row = Feedback::calculate("SPEED", "ABIDE");
    /// assert_eq!(
    ///     row,
    ///     vec![
    ///         Feedback::Absent,
    ///         Feedback::Absent,
    ///         Feedback::Present,
    ///         Feedback::Absent,
    ///         Feedback::Present,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, answer: &str) -> Vec<Self> {
        let guess: Vec<char> = guess.chars().collect();
        let answer: Vec<char> = answer.chars().collect();
        let length = guess.len().min(answer.len());

        let mut result = vec![Self::Absent; length];
        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &letter in &answer {
            *available.entry(letter).or_insert(0) += 1;
        }

        // First pass: exact position matches
        #[allow(clippy::needless_range_loop)]
        for i in 0..length {
            if guess[i] == answer[i] {
                result[i] = Self::Correct;
                if let Some(count) = available.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        #[allow(clippy::needless_range_loop)]
        for i in 0..length {
            if result[i] == Self::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess[i])
                && *count > 0
            {
                result[i] = Self::Present;
                *count -= 1;
            }
        }

        result
    }

    /// Convert a feedback row to its emoji form, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(row: &[Self]) -> String {
        row.iter()
            .map(|feedback| match feedback {
                Self::Correct => '🟩',
                Self::Present => '🟨',
                Self::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    #[test]
    fn feedback_all_absent() {
        assert_eq!(Feedback::calculate("ABCDE", "FGHIJ"), vec![Absent; 5]);
    }

    #[test]
    fn feedback_all_correct() {
        let row = Feedback::calculate("CRANE", "CRANE");
        assert_eq!(row, vec![Correct; 5]);
    }

    #[test]
    fn feedback_duplicate_guess_letter_single_in_answer() {
        // SPEED vs ABIDE: only one E may be credited
        let row = Feedback::calculate("SPEED", "ABIDE");
        assert_eq!(row, vec![Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn feedback_duplicate_letters_exact_takes_priority() {
        // ROBOT vs FLOOR: the second O is exact, the first O takes the other one
        let row = Feedback::calculate("ROBOT", "FLOOR");
        assert_eq!(row, vec![Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn feedback_exact_match_consumes_before_present() {
        // EERIE vs ABIDE: the final E is exact, so the earlier E's get nothing
        let row = Feedback::calculate("EERIE", "ABIDE");
        assert_eq!(row, vec![Absent, Absent, Absent, Present, Correct]);
    }

    #[test]
    fn feedback_real_wordle_example() {
        let row = Feedback::calculate("CRANE", "SLATE");
        assert_eq!(row, vec![Absent, Absent, Correct, Absent, Correct]);
    }

    #[test]
    fn feedback_to_emoji() {
        let row = Feedback::calculate("ROBOT", "FLOOR");
        assert_eq!(Feedback::to_emoji(&row), "🟨🟨⬜🟩⬜");
    }
}
