//! Puzzle word representation
//!
//! A Word is a tile label. Words are normalised once, when a puzzle is loaded,
//! so every later comparison is an exact string match.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// A single tile of the puzzle
///
/// Stored trimmed and upper-cased, the way tiles are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text is empty after trimming.
    ///
    /// # Examples
    /// ```
    /// use clusters::core::Word;
    ///
    /// let word = Word::new("  Market ").unwrap();
    /// assert_eq!(word.text(), "MARKET");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self(text.to_uppercase()))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Case-insensitive alphabetical ordering
    ///
    /// Used to order words inside a category and to pick target slots when
    /// a solved row is swapped to the front of the pool.
    #[must_use]
    pub fn alphabetical(&self, other: &Self) -> Ordering {
        self.0.to_lowercase().cmp(&other.0.to_lowercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("MALL").unwrap();
        assert_eq!(word.text(), "MALL");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("mall").unwrap();
        assert_eq!(word.text(), "MALL");

        let word2 = Word::new("MaLl").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  allen\t").unwrap();
        assert_eq!(word.text(), "ALLEN");
    }

    #[test]
    fn word_creation_keeps_inner_spaces() {
        let word = Word::new("marching band").unwrap();
        assert_eq!(word.text(), "MARCHING BAND");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_alphabetical() {
        let a = Word::new("allen").unwrap();
        let b = Word::new("CRESCENT").unwrap();
        assert_eq!(a.alphabetical(&b), Ordering::Less);
        assert_eq!(b.alphabetical(&a), Ordering::Greater);
        assert_eq!(a.alphabetical(&a), Ordering::Equal);
    }

    #[test]
    fn word_display() {
        let word = Word::new("socket").unwrap();
        assert_eq!(format!("{word}"), "SOCKET");
    }
}
