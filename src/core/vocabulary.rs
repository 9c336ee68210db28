//! Shared game vocabulary
//!
//! A Vocabulary is an immutable list of uppercase words of one length. Clones are cheap
//! and share the same storage, so the environment and every player can hold one.

use super::GameError;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct Inner {
    words: Vec<String>,
    members: FxHashSet<String>,
    word_length: usize,
}

/// Immutable, ordered, fixed-length word list with fast membership checks
#[derive(Debug, Clone)]
pub struct Vocabulary {
    inner: Arc<Inner>,
}

impl Vocabulary {
    /// Build a vocabulary from already filtered, upper-cased words
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - `words` is empty
    /// - a word contains anything other than `A-Z`
    /// - the words do not all share the first word's length
    ///
    /// # Examples
    /// ```
    /// use wordle_gym::core::Vocabulary;
    ///
    /// let words = Vocabulary::new(vec!["CRANE".to_string(), "SLATE".to_string()]).unwrap();
    /// assert_eq!(words.word_length(), 5);
    /// assert!(words.contains("SLATE"));
    ///
    /// assert!(Vocabulary::new(vec!["crane".to_string()]).is_err());
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        let word_length = words.first().ok_or(GameError::EmptyVocabulary)?.len();

        for word in &words {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(GameError::InvalidWord(word.clone()));
            }
            if word.len() != word_length {
                return Err(GameError::MixedWordLengths {
                    expected: word_length,
                    word: word.clone(),
                });
            }
        }

        let members = words.iter().cloned().collect();

        Ok(Self {
            inner: Arc::new(Inner {
                words,
                members,
                word_length,
            }),
        })
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.inner.word_length
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.words.is_empty()
    }

    /// Word at `index`, in load order
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.inner.words.get(index).map(String::as_str)
    }

    /// Check whether `word` is a legal guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.inner.members.contains(word)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.inner.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.words.iter().map(String::as_str)
    }

    /// True when both handles point at the same storage
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words of length {}",
            self.len(),
            self.word_length()
        )
    }
}
