//! Guess evaluation
//!
//! Pure functions that classify a guess against a puzzle. Nothing here looks
//! at game state; the session and progress tracker build on these.

use crate::core::{CATEGORY_COUNT, CategoryIndex, Guess, Puzzle, Word};

/// Number of shared words that makes an incorrect guess "one away"
pub const ONE_AWAY: usize = 3;

/// Classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All four words belong to this category
    Correct(CategoryIndex),
    /// Incorrect, but three of the four words share a category
    OneAway,
    /// Incorrect
    Miss,
}

impl Verdict {
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct(_))
    }
}

/// Find the category containing `word`
///
/// Returns `None` if no category contains it.
#[inline]
#[must_use]
pub fn category_of(puzzle: &Puzzle, word: &Word) -> Option<CategoryIndex> {
    puzzle.index_of(word)
}

/// The category every word of the guess belongs to, if there is one
#[must_use]
pub fn guessed_category(puzzle: &Puzzle, guess: &Guess) -> Option<CategoryIndex> {
    let mut indices = guess.words().iter().map(|w| category_of(puzzle, w));
    let first = indices.next()??;
    indices.all(|i| i == Some(first)).then_some(first)
}

/// Check whether all four words belong to the same category
///
/// A guess containing a word outside the puzzle is never correct.
///
/// # Examples
/// ```
/// use clusters::core::{Guess, Word};
/// use clusters::engine::evaluator::is_correct_guess;
/// use clusters::puzzles::builtin;
///
/// let puzzle = builtin::puzzle(1).unwrap();
/// let guess = Guess::new(["STORE", "MALL", "OUTLET", "MARKET"].map(|w| Word::new(w).unwrap()));
/// assert!(is_correct_guess(&puzzle, &guess));
/// ```
#[must_use]
pub fn is_correct_guess(puzzle: &Puzzle, guess: &Guess) -> bool {
    guessed_category(puzzle, guess).is_some()
}

/// Largest number of guessed words that share one category (0-4)
///
/// Which category wins a tie does not matter; only the count is reported.
#[must_use]
pub fn common_category_count(puzzle: &Puzzle, guess: &Guess) -> usize {
    let mut counts = [0usize; CATEGORY_COUNT];

    for index in guess.words().iter().filter_map(|w| category_of(puzzle, w)) {
        counts[index.get()] += 1;
    }

    counts.into_iter().max().unwrap_or(0)
}

/// Classify a guess
#[must_use]
pub fn evaluate(puzzle: &Puzzle, guess: &Guess) -> Verdict {
    if let Some(index) = guessed_category(puzzle, guess) {
        Verdict::Correct(index)
    } else if common_category_count(puzzle, guess) == ONE_AWAY {
        Verdict::OneAway
    } else {
        Verdict::Miss
    }
}
