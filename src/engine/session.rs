//! Session controller
//!
//! Owns the guess history, the selection and the pool, and moves the game
//! through `Playing` to `Won` or `Lost`.
//!
//! A correct submit happens in two phases. `submit` swaps the four words to
//! the front of the pool and returns a [`PendingReveal`]; the caller waits as
//! long as its presentation needs and then calls [`Session::complete_reveal`],
//! which records the guess and removes the words. While a reveal is pending
//! every other action is refused. Incorrect guesses are recorded at once.
//!
//! Invalid actions never fail loudly: they return a [`Rejection`] and leave
//! the session untouched.

use super::evaluator::{Verdict, evaluate};
use super::pool::Pool;
use super::progress::{Outcome, Progress};
use crate::core::{CategoryIndex, GROUP_SIZE, Guess, Puzzle, Word};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Why an action was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The game is over
    Finished,
    /// A correct guess is waiting for `complete_reveal`
    RevealPending,
    /// The word is not in the pool
    NotInPool,
    /// Four words are already selected
    SelectionFull,
    /// Fewer than four words are selected
    Incomplete,
    /// The same four words were already submitted
    AlreadyGuessed,
    /// Nothing is selected
    NothingSelected,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Finished => "The game is over",
            Self::RevealPending => "Hold on...",
            Self::NotInPool => "That word is not on the board",
            Self::SelectionFull => "Four words are already selected",
            Self::Incomplete => "Select four words first",
            Self::AlreadyGuessed => "Already guessed!",
            Self::NothingSelected => "Nothing is selected",
        };
        f.write_str(text)
    }
}

/// A correct guess between its two phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReveal {
    pub category: CategoryIndex,
    pub guess: Guess,
}

/// Result of an accepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// Correct; call `complete_reveal` to finish
    Revealing(PendingReveal),
    /// Incorrect and already recorded
    Missed { one_away: bool, outcome: Outcome },
}

/// Result of the second phase of a correct submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revealed {
    pub category: CategoryIndex,
    pub outcome: Outcome,
}

/// A single play-through of a puzzle
#[derive(Debug, Clone)]
pub struct Session<'a, R: Rng> {
    puzzle: &'a Puzzle,
    max_mistakes: usize,
    history: Vec<Guess>,
    selection: Vec<Word>,
    pool: Pool,
    solved: Vec<CategoryIndex>,
    outcome: Outcome,
    pending: Option<PendingReveal>,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Start a session and deal a shuffled pool
    ///
    /// A budget of zero mistakes is raised to one.
    pub fn new(puzzle: &'a Puzzle, max_mistakes: usize, mut rng: R) -> Self {
        let pool = Pool::deal(puzzle, &[], &mut rng);

        Self {
            puzzle,
            max_mistakes: max_mistakes.max(1),
            history: Vec::new(),
            selection: Vec::with_capacity(GROUP_SIZE),
            pool,
            solved: Vec::new(),
            outcome: Outcome::Playing,
            pending: None,
            rng,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    #[must_use]
    pub const fn max_mistakes(&self) -> usize {
        self.max_mistakes
    }

    /// Visible words in display order
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        self.pool.words()
    }

    #[must_use]
    pub fn selection(&self) -> &[Word] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, word: &Word) -> bool {
        self.selection.contains(word)
    }

    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingReveal> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::compute(self.max_mistakes, self.puzzle, &self.history)
    }

    #[must_use]
    pub fn remaining_mistakes(&self) -> usize {
        self.progress().remaining
    }

    /// Categories to show as finished rows, in the order they were solved
    ///
    /// After a loss every category is listed: solved ones first, then the
    /// rest in definition order.
    #[must_use]
    pub fn revealed(&self) -> Vec<CategoryIndex> {
        let mut rows = self.solved.clone();

        if self.outcome == Outcome::Lost {
            rows.extend(CategoryIndex::ALL.into_iter().filter(|i| !self.solved.contains(i)));
        }

        rows
    }

    /// Whether `submit` would be accepted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    /// Add a pool word to the selection, or remove it if already selected
    ///
    /// Returns `true` if the word is now selected.
    ///
    /// # Errors
    /// Returns a `Rejection` (and changes nothing) if the game is over, a
    /// reveal is pending, the word is not in the pool, or four words are
    /// already selected.
    pub fn toggle(&mut self, word: &Word) -> Result<bool, Rejection> {
        self.check_active()?;

        if let Some(position) = self.selection.iter().position(|w| w == word) {
            self.selection.remove(position);
            return Ok(false);
        }

        if !self.pool.contains(word) {
            return Err(Rejection::NotInPool);
        }
        if self.selection.len() >= GROUP_SIZE {
            return Err(Rejection::SelectionFull);
        }

        self.selection.push(word.clone());
        Ok(true)
    }

    /// Deselect everything
    ///
    /// # Errors
    /// Returns a `Rejection` if the game is over, a reveal is pending, or
    /// nothing is selected.
    pub fn clear_selection(&mut self) -> Result<(), Rejection> {
        self.check_active()?;

        if self.selection.is_empty() {
            return Err(Rejection::NothingSelected);
        }

        self.selection.clear();
        Ok(())
    }

    /// Re-roll the pool order
    ///
    /// # Errors
    /// Returns a `Rejection` if the game is over or a reveal is pending.
    pub fn shuffle(&mut self) -> Result<(), Rejection> {
        self.check_active()?;
        self.pool.shuffle(&mut self.rng);
        debug!("pool shuffled");
        Ok(())
    }

    /// Submit the four selected words
    ///
    /// # Errors
    /// Returns a `Rejection` (and changes nothing) if the game is over, a
    /// reveal is pending, fewer than four words are selected, or the same
    /// four words were submitted before.
    pub fn submit(&mut self) -> Result<Submitted, Rejection> {
        let guess = self.check_submit()?;
        self.selection.clear();

        match evaluate(self.puzzle, &guess) {
            Verdict::Correct(category) => {
                debug!(%guess, %category, "correct guess, reveal pending");
                self.pool.swap_to_front(guess.words());

                let pending = PendingReveal { category, guess };
                self.pending = Some(pending.clone());
                Ok(Submitted::Revealing(pending))
            }
            verdict => {
                let one_away = verdict == Verdict::OneAway;
                debug!(%guess, one_away, "incorrect guess");

                self.history.push(guess);
                self.refresh_outcome();

                Ok(Submitted::Missed {
                    one_away,
                    outcome: self.outcome,
                })
            }
        }
    }

    /// Finish a pending correct guess
    ///
    /// Records the guess, removes its words from the pool and updates the
    /// outcome. Returns `None` if no reveal is pending.
    pub fn complete_reveal(&mut self) -> Option<Revealed> {
        let PendingReveal { category, guess } = self.pending.take()?;

        self.pool.remove(guess.words());
        self.history.push(guess);
        if !self.solved.contains(&category) {
            self.solved.push(category);
        }
        self.refresh_outcome();

        debug!(%category, remaining = self.pool.len(), "category revealed");
        Some(Revealed {
            category,
            outcome: self.outcome,
        })
    }

    /// Start over on the same puzzle with a fresh deal
    ///
    /// # Errors
    /// Returns `Rejection::RevealPending` while a reveal is in flight.
    pub fn restart(&mut self) -> Result<(), Rejection> {
        if self.pending.is_some() {
            return Err(Rejection::RevealPending);
        }

        self.history.clear();
        self.selection.clear();
        self.solved.clear();
        self.outcome = Outcome::Playing;
        self.pool = Pool::deal(self.puzzle, &[], &mut self.rng);

        debug!("session restarted");
        Ok(())
    }

    const fn check_active(&self) -> Result<(), Rejection> {
        if self.outcome.is_finished() {
            Err(Rejection::Finished)
        } else if self.pending.is_some() {
            Err(Rejection::RevealPending)
        } else {
            Ok(())
        }
    }

    fn check_submit(&self) -> Result<Guess, Rejection> {
        self.check_active()?;

        let guess = Guess::from_selection(&self.selection).ok_or(Rejection::Incomplete)?;
        if self.history.iter().any(|previous| previous.same_words(&guess)) {
            return Err(Rejection::AlreadyGuessed);
        }

        Ok(guess)
    }

    fn refresh_outcome(&mut self) {
        let progress = self.progress();
        if progress.outcome == self.outcome {
            return;
        }

        self.outcome = progress.outcome;
        match self.outcome {
            Outcome::Won => {
                info!(mistakes = progress.mistakes, "puzzle solved");
            }
            Outcome::Lost => {
                self.pool.clear();
                self.selection.clear();
                info!(
                    solved = progress.solved.len(),
                    "out of mistakes, revealing solution"
                );
            }
            Outcome::Playing => {}
        }
    }
}
