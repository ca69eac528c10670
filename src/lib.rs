//! Gordle
//!
//! A console word-guessing game: find the hidden word within a fixed number
//! of attempts, guided by per-character feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use gordle::core::{Feedback, Word};
//!
//! let guess = Word::new("holle");
//! let solution = Word::new("hello");
//!
//! let feedback = Feedback::compute(&guess, &solution);
//! assert_eq!(feedback.to_string(), "💚🟡💚💚🟡");
//! ```

// Core domain types
pub mod core;

// Guess validation and the game loop
pub mod game;

// Word lists
pub mod wordlists;

// Terminal output formatting
pub mod output;
