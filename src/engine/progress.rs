//! Game progress tracking
//!
//! Everything here is derived from the puzzle and the guess history; nothing
//! is stored. A correct guess never spends a mistake, so the guess that
//! reveals the last category can never also exhaust the budget. Win is still
//! checked first.

use super::evaluator::is_correct_guess;
use super::pool::revealed_categories;
use crate::core::{CategorySet, Guess, Puzzle};

/// Session result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Number of incorrect guesses in `history`
#[must_use]
pub fn mistake_count(puzzle: &Puzzle, history: &[Guess]) -> usize {
    history
        .iter()
        .filter(|guess| !is_correct_guess(puzzle, guess))
        .count()
}

/// Mistakes left before the game is lost, never below zero
#[must_use]
pub fn remaining_mistakes(max_mistakes: usize, puzzle: &Puzzle, history: &[Guess]) -> usize {
    max_mistakes.saturating_sub(mistake_count(puzzle, history))
}

/// All four categories revealed
#[must_use]
pub fn is_won(puzzle: &Puzzle, history: &[Guess]) -> bool {
    revealed_categories(puzzle, history).is_full()
}

/// Mistake budget exhausted without winning
#[must_use]
pub fn is_lost(max_mistakes: usize, puzzle: &Puzzle, history: &[Guess]) -> bool {
    !is_won(puzzle, history) && remaining_mistakes(max_mistakes, puzzle, history) == 0
}

/// Current result of a history
#[must_use]
pub fn outcome(max_mistakes: usize, puzzle: &Puzzle, history: &[Guess]) -> Outcome {
    Progress::compute(max_mistakes, puzzle, history).outcome
}

/// Snapshot of everything derived from a history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub mistakes: usize,
    pub remaining: usize,
    pub solved: CategorySet,
    pub outcome: Outcome,
}

impl Progress {
    #[must_use]
    pub fn compute(max_mistakes: usize, puzzle: &Puzzle, history: &[Guess]) -> Self {
        let mistakes = mistake_count(puzzle, history);
        let remaining = max_mistakes.saturating_sub(mistakes);
        let solved = revealed_categories(puzzle, history);

        let outcome = if solved.is_full() {
            Outcome::Won
        } else if remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::Playing
        };

        Self {
            mistakes,
            remaining,
            solved,
            outcome,
        }
    }
}
