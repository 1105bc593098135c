//! A submitted guess

use super::{GROUP_SIZE, Word};
use std::fmt;

/// Exactly four words, in the order the player selected them
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess([Word; GROUP_SIZE]);

impl Guess {
    #[must_use]
    pub const fn new(words: [Word; GROUP_SIZE]) -> Self {
        Self(words)
    }

    /// Build a guess from a selection; `None` unless it holds exactly four words
    #[must_use]
    pub fn from_selection(selection: &[Word]) -> Option<Self> {
        let words: [Word; GROUP_SIZE] = selection.to_vec().try_into().ok()?;
        Some(Self(words))
    }

    #[must_use]
    pub const fn words(&self) -> &[Word; GROUP_SIZE] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// Compare as unordered sets
    #[must_use]
    pub fn same_words(&self, other: &Self) -> bool {
        self.0.iter().all(|w| other.contains(w)) && other.0.iter().all(|w| self.contains(w))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.0;
        write!(f, "{a}, {b}, {c}, {d}")
    }
}
