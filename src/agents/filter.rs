//! Candidate filtering against accumulated letter knowledge

use super::knowledge::LetterKnowledge;
use crate::core::GameError;

/// False if the word is missing a letter known to be in the answer
#[must_use]
pub fn has_known_letters(word: &str, known_letters: &[char]) -> bool {
    known_letters.iter().all(|&letter| word.contains(letter))
}

/// False if the word disagrees with a confirmed letter position
///
/// Positions without a confirmed letter (`None`) accept anything.
#[must_use]
pub fn has_known_letters_and_positions(word: &str, known_positions: &[Option<char>]) -> bool {
    let mut letters = word.chars();
    known_positions.iter().all(|slot| {
        let letter = letters.next();
        slot.is_none_or(|known| letter == Some(known))
    })
}

/// True if the word contains a letter known not to be in the answer
#[must_use]
pub fn has_known_not_letters(word: &str, known_not_letters: &[char]) -> bool {
    known_not_letters.iter().any(|&letter| word.contains(letter))
}

/// Check whether `word` could still be the answer
///
/// # Errors
/// Returns `GameError::ConflictingPosition` if the knowledge itself is inconsistent.
pub fn is_possible_word(word: &str, knowledge: &LetterKnowledge) -> Result<bool, GameError> {
    Ok(Constraints::from_knowledge(knowledge)?.is_possible(word))
}

/// The three projections of [`LetterKnowledge`] the filter needs, computed once
///
/// Filtering a whole pool through one snapshot avoids rebuilding the projections
/// for every word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    pub known_letters: Vec<char>,
    pub known_positions: Vec<Option<char>>,
    pub known_not_letters: Vec<char>,
}

impl Constraints {
    /// Snapshot the current knowledge
    ///
    /// # Errors
    /// Returns `GameError::ConflictingPosition` if two letters are confirmed at one
    /// position.
    pub fn from_knowledge(knowledge: &LetterKnowledge) -> Result<Self, GameError> {
        Ok(Self {
            known_letters: knowledge.known_letters(),
            known_positions: knowledge.known_letters_and_positions()?,
            known_not_letters: knowledge.known_not_letters(),
        })
    }

    /// All three checks; positions first since they are the cheapest to reject on
    #[must_use]
    pub fn is_possible(&self, word: &str) -> bool {
        has_known_letters_and_positions(word, &self.known_positions)
            && has_known_letters(word, &self.known_letters)
            && !has_known_not_letters(word, &self.known_not_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_letters_check() {
        assert!(has_known_letters("HELLO", &['H', 'E', 'L', 'O']));
        assert!(!has_known_letters("HELLO", &['X']));
        assert!(has_known_letters("FOO", &['O']));
        assert!(has_known_letters("BAR", &['A', 'A']));
        assert!(has_known_letters("BAR", &[]));
    }

    #[test]
    fn known_not_letters_check() {
        assert!(has_known_not_letters("HELLO", &['H', 'E', 'L', 'O']));
        assert!(!has_known_not_letters("HELLO", &['X']));
        assert!(has_known_not_letters("FOO", &['O']));
        assert!(has_known_not_letters("BAR", &['A', 'A']));
        assert!(has_known_not_letters("HELLO", &['A', 'E']));
        assert!(!has_known_not_letters("HELLO", &[]));
    }

    #[test]
    fn known_positions_check() {
        assert!(has_known_letters_and_positions(
            "HELLO",
            &[Some('H'), Some('E'), None, None, None]
        ));
        assert!(has_known_letters_and_positions(
            "HELLO",
            &[None, None, None, Some('L'), None]
        ));
        assert!(!has_known_letters_and_positions("BYE", &[Some('A'), None, None]));
        assert!(!has_known_letters_and_positions("BYE", &[Some('Y'), None, None]));
        assert!(has_known_letters_and_positions("BYE", &[None, None, None]));
    }

    #[test]
    fn constraints_combine_all_checks() {
        let constraints = Constraints {
            known_letters: vec!['E'],
            known_positions: vec![None, None, None, None, Some('E')],
            known_not_letters: vec!['S', 'P'],
        };

        assert!(constraints.is_possible("ABIDE"));
        assert!(constraints.is_possible("CRANE"));
        assert!(!constraints.is_possible("SLATE")); // contains S
        assert!(!constraints.is_possible("EIGHT")); // E in the wrong place
        assert!(!constraints.is_possible("BLOCK")); // no E
    }

    #[test]
    fn empty_constraints_accept_everything() {
        let constraints = Constraints::default();
        assert!(constraints.is_possible("HELLO"));
        assert!(constraints.is_possible("ZZZZZ"));
    }

    #[test]
    fn filter_from_tracked_feedback_keeps_answer() {
        let mut knowledge = LetterKnowledge::new(5);
        knowledge.update("SPEED", "ABIDE").unwrap();

        assert!(is_possible_word("ABIDE", &knowledge).unwrap());
        // P and S are ruled out
        assert!(!is_possible_word("SPEED", &knowledge).unwrap());
        // Missing the known D
        assert!(!is_possible_word("CRANE", &knowledge).unwrap());
        assert!(is_possible_word("ELDER", &knowledge).unwrap());
    }

    #[test]
    fn inconsistent_knowledge_is_an_error() {
        let mut knowledge = LetterKnowledge::new(3);
        knowledge.update("BYE", "BYE").unwrap();
        knowledge.update("AYE", "AYE").unwrap();

        assert!(matches!(
            is_possible_word("BYE", &knowledge),
            Err(GameError::ConflictingPosition { .. })
        ));
    }
}
