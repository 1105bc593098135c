//! Share text
//!
//! A spoiler-free summary: one emoji row per guess, coloured by the
//! category each word belongs to, followed by the mistake tally.

use crate::core::{CategoryIndex, Guess, Puzzle};
use crate::engine::{category_of, mistake_count};

/// Emoji per category, in definition order
pub const CATEGORY_EMOJI: [&str; 4] = ["🟨", "⬜\u{fe0f}", "🟧", "🟦"];

/// Shown for a word outside the puzzle
const UNKNOWN_EMOJI: &str = "⬛";

/// Emoji for a category
#[must_use]
pub const fn category_emoji(index: CategoryIndex) -> &'static str {
    CATEGORY_EMOJI[index.get()]
}

/// One row for a guess, grouped by category
#[must_use]
pub fn guess_row(puzzle: &Puzzle, guess: &Guess) -> String {
    let mut indices: Vec<Option<CategoryIndex>> =
        guess.words().iter().map(|w| category_of(puzzle, w)).collect();
    indices.sort_by_key(|i| i.map_or(usize::MAX, CategoryIndex::get));

    indices
        .into_iter()
        .map(|i| i.map_or(UNKNOWN_EMOJI, category_emoji))
        .collect()
}

/// Full share text for a finished (or unfinished) game
#[must_use]
pub fn share_text(puzzle: &Puzzle, history: &[Guess], max_mistakes: usize) -> String {
    let mut lines = vec![puzzle.title().to_string(), String::new()];
    lines.extend(history.iter().map(|guess| guess_row(puzzle, guess)));
    lines.push(String::new());
    lines.push(format!(
        "Mistakes: {}/{max_mistakes}",
        mistake_count(puzzle, history)
    ));
    lines.join("\n")
}
