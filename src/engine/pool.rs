//! Word pool management
//!
//! The pool is the set of words not yet part of a revealed category, in the
//! order they are shown. Order only changes on an explicit shuffle (and the
//! deal at session start). Submitting removes words in place so the remaining
//! tiles keep their relative positions.

use super::evaluator::guessed_category;
use crate::core::{CategoryIndex, CategorySet, GROUP_SIZE, Guess, Puzzle, Word};
use rand::Rng;
use rand::seq::SliceRandom;

/// Categories with at least one correct guess in `history`
///
/// Repeated correct guesses for the same category reveal it only once.
#[must_use]
pub fn revealed_categories(puzzle: &Puzzle, history: &[Guess]) -> CategorySet {
    history
        .iter()
        .filter_map(|guess| guessed_category(puzzle, guess))
        .collect()
}

/// Words of every non-revealed category, shuffled with `rng`
#[must_use]
pub fn visible_pool<R: Rng + ?Sized>(puzzle: &Puzzle, history: &[Guess], rng: &mut R) -> Vec<Word> {
    Pool::deal(puzzle, history, rng).into_words()
}

/// Ordered pool of ungrouped words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    words: Vec<Word>,
}

impl Pool {
    /// Collect the words of all non-revealed categories and shuffle them
    pub fn deal<R: Rng + ?Sized>(puzzle: &Puzzle, history: &[Guess], rng: &mut R) -> Self {
        let revealed = revealed_categories(puzzle, history);

        let mut words: Vec<Word> = puzzle
            .categories()
            .iter()
            .zip(CategoryIndex::ALL)
            .filter(|&(_, index)| !revealed.contains(index))
            .flat_map(|(category, _)| category.words().iter().cloned())
            .collect();
        words.shuffle(rng);

        Self { words }
    }

    /// Re-roll the order; membership is unchanged
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    /// Move the given words into the first slots
    ///
    /// Words are placed in case-insensitive alphabetical order: slot `a` is
    /// swapped with wherever the `a`-th word currently sits. Words missing from
    /// the pool are skipped.
    pub fn swap_to_front(&mut self, words: &[Word; GROUP_SIZE]) {
        let mut sorted = words.clone();
        sorted.sort_by(Word::alphabetical);

        for (slot, word) in sorted.iter().enumerate() {
            if let Some(position) = self.position(word)
                && slot < self.words.len()
            {
                self.words.swap(slot, position);
            }
        }
    }

    /// Remove the given words, keeping the relative order of the rest
    ///
    /// Returns how many words were removed.
    pub fn remove(&mut self, words: &[Word]) -> usize {
        let before = self.words.len();
        self.words.retain(|w| !words.contains(w));
        before - self.words.len()
    }

    /// Drop every word (the loss reveal)
    pub fn clear(&mut self) {
        self.words.clear();
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
