//! Clusters
//!
//! A word-grouping puzzle engine: sixteen words hide four categories of four,
//! and the player finds them one group at a time before running out of
//! mistakes.
//!
//! # Quick Start
//!
//! ```rust
//! use clusters::core::Word;
//! use clusters::engine::{Session, Submitted};
//! use clusters::puzzles::builtin;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let puzzle = builtin::puzzle(1).unwrap();
//! let mut session = Session::new(&puzzle, 4, StdRng::seed_from_u64(7));
//!
//! for text in ["MALL", "MARKET", "OUTLET", "STORE"] {
//!     session.toggle(&Word::new(text).unwrap()).unwrap();
//! }
//!
//! if let Ok(Submitted::Revealing(pending)) = session.submit() {
//!     println!("Found {}", puzzle.category(pending.category).name());
//!     session.complete_reveal();
//! }
//! assert_eq!(session.pool().len(), 12);
//! ```

// Core domain types
pub mod core;

// Guess evaluation and session state
pub mod engine;

// Built-in puzzles, loading and share encoding
pub mod puzzles;

// Game settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
