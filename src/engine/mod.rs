//! Puzzle state engine
//!
//! Evaluates guesses, maintains the visible pool, tracks mistakes and drives
//! a session from first selection to win or loss.

pub mod evaluator;
pub mod pool;
pub mod progress;
pub mod session;

pub use evaluator::{Verdict, category_of, common_category_count, evaluate, is_correct_guess};
pub use pool::{Pool, revealed_categories, visible_pool};
pub use progress::{
    Outcome, Progress, is_lost, is_won, mistake_count, outcome, remaining_mistakes,
};
pub use session::{PendingReveal, Rejection, Revealed, Session, Submitted};
