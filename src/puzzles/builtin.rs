//! Built-in puzzles
//!
//! A few published puzzles compiled into the binary, numbered from 1.

use super::options::PuzzleOptions;
use crate::core::{Puzzle, PuzzleError};

/// A built-in puzzle in its authored form
pub struct BuiltinPuzzle {
    pub title: &'static str,
    pub author: &'static str,
    pub names: [&'static str; 4],
    pub words: [[&'static str; 4]; 4],
}

/// Puzzles shipped with the binary
pub const BUILTIN: &[BuiltinPuzzle] = &[
    BuiltinPuzzle {
        title: "Connections #173",
        author: "New York Times",
        names: [
            "PLACES TO SHOP",
            "WAYS TO REMOVE HAIR",
            "PORTION OF PROFIT",
            "KINDS OF WRENCHES",
        ],
        words: [
            ["MALL", "MARKET", "OUTLET", "STORE"],
            ["SHAVE", "THREAD", "TWEEZE", "WAX"],
            ["CUT", "PIECE", "SHARE", "TAKE"],
            ["ALLEN", "CRESCENT", "MONKEY", "SOCKET"],
        ],
    },
    BuiltinPuzzle {
        title: "Connections #204",
        author: "New York Times",
        names: [
            "GARDENING NOUNS/VERBS",
            "KINDS OF SALADS",
            "CLASSIC GAME SHOWS, FAMILIARLY",
            "W + VOWEL PROGRESSION",
        ],
        words: [
            ["PLANT", "SEED", "WATER", "WEED"],
            ["CAESAR", "GREEK", "GREEN", "WEDGE"],
            ["MILLIONAIRE", "PRICE", "PYRAMID", "WHEEL"],
            ["WAY", "WEE", "WHOA", "WHY"],
        ],
    },
    BuiltinPuzzle {
        title: "Connections #235",
        author: "New York Times",
        names: ["MAKE SHORTER", "MUSCULAR", "ENTHUSIAST", "WRINKLY THINGS"],
        words: [
            ["CLIP", "CUT", "PARE", "TRIM"],
            ["BUILT", "JACKED", "RIPPED", "SWOLE"],
            ["BUFF", "FAN", "LOVER", "NUT"],
            ["BRAIN", "PRUNE", "PUG", "WALNUT"],
        ],
    },
];

impl BuiltinPuzzle {
    #[must_use]
    pub fn options(&self) -> PuzzleOptions {
        PuzzleOptions {
            words: self
                .words
                .iter()
                .map(|group| group.iter().map(|w| (*w).to_string()).collect())
                .collect(),
            names: self.names.iter().map(|n| (*n).to_string()).collect(),
            author: self.author.to_string(),
            title: self.title.to_string(),
        }
    }
}

/// Load built-in puzzle `number` (1-based)
///
/// # Errors
/// Returns `PuzzleError::UnknownBuiltin` if there is no such puzzle.
pub fn puzzle(number: usize) -> Result<Puzzle, PuzzleError> {
    number
        .checked_sub(1)
        .and_then(|i| BUILTIN.get(i))
        .ok_or(PuzzleError::UnknownBuiltin(number))?
        .options()
        .to_puzzle()
}
