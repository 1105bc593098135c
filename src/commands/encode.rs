//! Encode command
//!
//! Turns an authored puzzle file into a shareable `options` parameter.

use crate::core::{Puzzle, PuzzleError};
use crate::puzzles::PuzzleOptions;
use crate::puzzles::loader::load_options;
use std::path::Path;

/// Result of encoding an authored puzzle
#[derive(Debug)]
pub struct EncodeResult {
    pub puzzle: Puzzle,
    pub encoded: String,
}

/// Validate authored options and encode them
///
/// Every word and category name must be filled in; title and author are
/// optional.
///
/// # Errors
///
/// Returns an error if a field is empty, the shape is not 4×4, or a word is
/// used twice.
pub fn encode_options(options: &PuzzleOptions) -> Result<EncodeResult, PuzzleError> {
    options.validate_complete()?;
    let puzzle = options.to_puzzle()?;
    let encoded = options.encode()?;
    Ok(EncodeResult { puzzle, encoded })
}

/// Load a JSON file and encode it
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn encode_file<P: AsRef<Path>>(path: P) -> Result<EncodeResult, PuzzleError> {
    encode_options(&load_options(path)?)
}
