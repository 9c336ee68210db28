//! Conversion between uppercase letters and their alphabet index

use super::GameError;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Map `'A'..='Z'` to `0..26`
///
/// # Errors
/// Returns `GameError::InvalidLetter` for anything outside `'A'..='Z'`.
///
/// # Examples
/// ```
/// use wordle_gym::core::letter_to_index;
///
/// assert_eq!(letter_to_index('A').unwrap(), 0);
/// assert_eq!(letter_to_index('Z').unwrap(), 25);
/// assert!(letter_to_index('a').is_err());
/// ```
#[inline]
pub fn letter_to_index(letter: char) -> Result<usize, GameError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as usize - 'A' as usize)
    } else {
        Err(GameError::InvalidLetter(letter))
    }
}

/// Map `0..26` back to `'A'..='Z'`
///
/// # Errors
/// Returns `GameError::InvalidLetterIndex` if `index >= 26`.
#[inline]
pub fn index_to_letter(index: usize) -> Result<char, GameError> {
    if index < ALPHABET_SIZE {
        Ok(char::from(b'A' + index as u8))
    } else {
        Err(GameError::InvalidLetterIndex(index))
    }
}

/// Iterate the alphabet in order
pub fn alphabet() -> impl Iterator<Item = char> {
    'A'..='Z'
}
