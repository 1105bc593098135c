//! Puzzle sources
//!
//! Built-in puzzles, the shareable base64 options format, and file loading.

pub mod builtin;
pub mod loader;
pub mod options;

pub use builtin::BUILTIN;
pub use options::{PuzzleOptions, decode, encode};
