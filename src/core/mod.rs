//! Core domain types for Gordle
//!
//! Pure types with no I/O: words and the feedback computed for a guess.

mod feedback;
mod word;

pub use feedback::{Feedback, Hint, UnknownHint};
pub use word::Word;
