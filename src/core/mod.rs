//! Core domain types for the puzzle
//!
//! This module contains the puzzle definition types. They are immutable once
//! built and carry no game state.

mod category;
mod guess;
mod puzzle;
mod word;

pub use category::{CATEGORY_COUNT, Category, CategoryIndex, CategorySet, GROUP_SIZE};
pub use guess::Guess;
pub use puzzle::{Puzzle, PuzzleError};
pub use word::{Word, WordError};
