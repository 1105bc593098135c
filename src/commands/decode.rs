//! Decode command
//!
//! Turns a shared puzzle back into editable JSON so it can be remixed and fed
//! to `encode` again.

use crate::core::{Puzzle, PuzzleError};
use crate::puzzles::PuzzleOptions;
use crate::puzzles::loader::resolve;

/// A shared puzzle in authoring form
#[derive(Debug)]
pub struct DecodeResult {
    pub puzzle: Puzzle,
    pub options: PuzzleOptions,
    pub json: String,
}

/// Decode a puzzle source into pretty-printed options JSON
///
/// Accepts anything `--puzzle` does: a built-in number, a JSON file, an
/// encoded parameter or a play link.
///
/// # Errors
///
/// Returns an error if the source does not describe a valid puzzle.
pub fn decode_source(source: &str) -> Result<DecodeResult, PuzzleError> {
    let puzzle = resolve(source)?;
    let options = PuzzleOptions::from(&puzzle);
    let json = serde_json::to_string_pretty(&options)?;
    Ok(DecodeResult {
        puzzle,
        options,
        json,
    })
}
