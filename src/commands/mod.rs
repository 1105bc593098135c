//! Command implementations

pub mod decode;
pub mod encode;
pub mod list;
pub mod simple;
pub mod simulate;

pub use decode::{DecodeResult, decode_source};
pub use encode::{EncodeResult, encode_file, encode_options};
pub use list::{PuzzleListing, list_puzzles};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationResult, play_random, run_simulation};
