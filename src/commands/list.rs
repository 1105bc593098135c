//! List command
//!
//! Shows the built-in puzzles and the parameter that shares each one.

use crate::core::PuzzleError;
use crate::puzzles::{BUILTIN, PuzzleOptions};

/// One built-in puzzle, ready to print
#[derive(Debug, Clone)]
pub struct PuzzleListing {
    pub number: usize,
    pub title: String,
    pub author: String,
    pub encoded: String,
}

/// Describe every built-in puzzle
///
/// # Errors
///
/// Returns an error if a puzzle cannot be encoded.
pub fn list_puzzles() -> Result<Vec<PuzzleListing>, PuzzleError> {
    BUILTIN
        .iter()
        .enumerate()
        .map(|(i, builtin)| {
            let options: PuzzleOptions = builtin.options();
            Ok(PuzzleListing {
                number: i + 1,
                title: builtin.title.to_string(),
                author: builtin.author.to_string(),
                encoded: options.encode()?,
            })
        })
        .collect()
}
