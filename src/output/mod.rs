//! Terminal output formatting
//!
//! Display utilities for CLI results, board printing and share text.

pub mod display;
pub mod formatters;
pub mod share;

pub use display::{
    print_board, print_decode_result, print_encode_result, print_header, print_puzzle_list,
    print_result, print_simulation_result,
};
pub use share::share_text;
